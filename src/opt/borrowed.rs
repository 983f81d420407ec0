//! `OptRef` / `OptMut` — non-owning optional-value façades.
//!
//! Structurally distinct variants of [`Opt`](crate::Opt) for borrowed
//! content, with identical operation names wherever the operation makes
//! sense for a borrow. The "value" these containers extract is the borrow
//! itself (`&'a T` or `&'a mut T`); the referent's lifetime is controlled
//! entirely by its owner, never by the container.
//!
//! `OptRef` is cheaply clonable — shared borrows alias freely. `OptMut` is
//! not: it carries an exclusive borrow, and its destructive extraction hands
//! that borrow out at most once.

use crate::error::{EmptyValueError, UNWRAP_ON_NONE};
use crate::slot::{MutSlot, RefSlot};

use super::bound::BoundMethod;
use super::owned::{some, Opt};

/// A shared borrow of a `T` that may or may not currently be recorded here.
///
/// Produced by [`Opt::as_ref`] or directly from a reference. Extraction is
/// destructive on the *container* — the referent is untouched.
///
/// # Examples
///
/// ```
/// use solo::some;
///
/// let opt = some(3);
/// let mut borrowed = opt.as_ref();
/// assert_eq!(borrowed.unwrap(), Ok(&3));
/// // the owning container is unaffected by the borrow's extraction
/// assert!(opt.is_some());
/// ```
pub struct OptRef<'a, T> {
    slot: RefSlot<'a, T>,
}

impl<'a, T> OptRef<'a, T> {
    /// Creates an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slot: RefSlot::empty(),
        }
    }

    /// Creates a container recording a borrow of `referent`.
    #[inline]
    pub fn filled(referent: &'a T) -> Self {
        Self {
            slot: RefSlot::filled(referent),
        }
    }

    /// Whether the container currently records a borrow.
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.slot.is_live()
    }

    /// Exact negation of [`is_some`](OptRef::is_some).
    #[inline(always)]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Moves the borrow out, or fails with `msg` if the container is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] carrying `msg` when the container is
    /// `None`.
    pub fn expect(&mut self, msg: &str) -> Result<&'a T, EmptyValueError> {
        self.slot.take().ok_or_else(|| EmptyValueError::new(msg))
    }

    /// [`expect`](OptRef::expect) with a fixed default message.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when the container is `None`.
    #[inline]
    pub fn unwrap(&mut self) -> Result<&'a T, EmptyValueError> {
        self.expect(UNWRAP_ON_NONE)
    }

    /// Moves the borrow out, or returns `fallback` if the container is empty.
    #[inline]
    pub fn unwrap_or(&mut self, fallback: &'a T) -> &'a T {
        self.slot.take().unwrap_or(fallback)
    }

    /// Moves the borrow out, or computes a fallback if the container is
    /// empty. `fallback` is invoked only on the empty path.
    #[inline]
    pub fn unwrap_or_else<F>(&mut self, fallback: F) -> &'a T
    where
        F: FnOnce() -> &'a T,
    {
        self.slot.take().unwrap_or_else(fallback)
    }

    /// Moves the current borrow into a fresh container, leaving this one
    /// empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        match self.slot.take() {
            Some(referent) => Self::filled(referent),
            None => Self::new(),
        }
    }

    /// Records a borrow of `referent`, returning the prior content.
    #[inline]
    pub fn replace(&mut self, referent: &'a T) -> Self {
        let prior = self.take();
        self.slot.set(referent);
        prior
    }

    /// Forgets any recorded borrow. Idempotent; the referent is untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.slot.clear();
    }

    /// Consumes the container; if `Some`, applies `f` to the extracted
    /// borrow and wraps the result in an owned container.
    ///
    /// `f` is never invoked on an empty container.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::some;
    ///
    /// let name = some(String::from("im here"));
    /// let mapped = name
    ///     .as_ref()
    ///     .map(|s| format!("{s}, too!"))
    ///     .map(|s| s.len());
    /// assert_eq!(mapped, some(13));
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub fn map<U, F>(mut self, f: F) -> Opt<U>
    where
        F: FnOnce(&'a T) -> U,
    {
        match self.slot.take() {
            Some(referent) => some(f(referent)),
            None => Opt::new(),
        }
    }

    /// [`map`](OptRef::map) followed by flattening one level.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(&'a T) -> Opt<U>,
    {
        self.map(f).flatten()
    }

    /// Consumes the container; if `Some`, feeds the extracted borrow to `f`
    /// and reports `true`, otherwise reports `false`.
    #[inline]
    pub fn for_each<F>(mut self, f: F) -> bool
    where
        F: FnOnce(&'a T),
    {
        match self.slot.take() {
            Some(referent) => {
                f(referent);
                true
            }
            None => false,
        }
    }

    /// By-value fallback: the recorded borrow, or `fallback` when empty.
    #[inline]
    pub fn or_value(mut self, fallback: &'a T) -> &'a T {
        self.unwrap_or(fallback)
    }

    /// By-value fallback: the recorded borrow, or `fallback()` when empty.
    #[inline]
    pub fn or_else<F>(mut self, fallback: F) -> &'a T
    where
        F: FnOnce() -> &'a T,
    {
        self.unwrap_or_else(fallback)
    }

    /// Lifts the borrow into an owned container by copying the referent.
    #[inline]
    pub fn copied(self) -> Opt<T>
    where
        T: Copy,
    {
        self.map(|referent| *referent)
    }

    /// Lifts the borrow into an owned container by cloning the referent.
    #[inline]
    pub fn cloned(self) -> Opt<T>
    where
        T: Clone,
    {
        self.map(Clone::clone)
    }

    /// Pairs the extracted borrow with a method selector for deferred
    /// invocation. See [`Opt::bind`].
    #[inline]
    pub fn bind<F>(self, method: F) -> Opt<BoundMethod<&'a T, F>> {
        self.map(|instance| BoundMethod::new(instance, method))
    }

    /// Crate-internal read access (equality, hashing, formatting).
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.slot.get()
    }
}

impl<T> Default for OptRef<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copying an `OptRef` copies an address; the referent is shared, not
/// duplicated. No `T: Clone` bound is needed.
impl<T> Clone for OptRef<'_, T> {
    fn clone(&self) -> Self {
        Self { slot: self.slot }
    }
}

impl<'a, T> From<&'a T> for OptRef<'a, T> {
    fn from(referent: &'a T) -> Self {
        Self::filled(referent)
    }
}

/// An exclusive borrow of a `T` that may or may not currently be recorded
/// here.
///
/// Produced by [`Opt::as_mut`] or directly from a mutable reference. The
/// recorded `&mut` is handed out at most once; mutation through the
/// extracted borrow is visible in the owning container.
///
/// # Examples
///
/// ```
/// use solo::some;
///
/// let mut opt = some(3);
/// if let Ok(value) = opt.as_mut().unwrap() {
///     *value = 5;
/// }
/// assert_eq!(opt, some(5));
/// ```
pub struct OptMut<'a, T> {
    slot: MutSlot<'a, T>,
}

impl<'a, T> OptMut<'a, T> {
    /// Creates an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slot: MutSlot::empty(),
        }
    }

    /// Creates a container recording an exclusive borrow of `referent`.
    #[inline]
    pub fn filled(referent: &'a mut T) -> Self {
        Self {
            slot: MutSlot::filled(referent),
        }
    }

    /// Whether the container currently records a borrow.
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.slot.is_live()
    }

    /// Exact negation of [`is_some`](OptMut::is_some).
    #[inline(always)]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Moves the exclusive borrow out, or fails with `msg` if the container
    /// is empty.
    ///
    /// The borrow is produced at most once per recorded referent.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] carrying `msg` when the container is
    /// `None`.
    pub fn expect(&mut self, msg: &str) -> Result<&'a mut T, EmptyValueError> {
        self.slot.take().ok_or_else(|| EmptyValueError::new(msg))
    }

    /// [`expect`](OptMut::expect) with a fixed default message.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when the container is `None`.
    #[inline]
    pub fn unwrap(&mut self) -> Result<&'a mut T, EmptyValueError> {
        self.expect(UNWRAP_ON_NONE)
    }

    /// Moves the borrow out, or returns `fallback` if the container is empty.
    #[inline]
    pub fn unwrap_or(&mut self, fallback: &'a mut T) -> &'a mut T {
        self.slot.take().unwrap_or(fallback)
    }

    /// Moves the borrow out, or computes a fallback if the container is
    /// empty. `fallback` is invoked only on the empty path.
    #[inline]
    pub fn unwrap_or_else<F>(&mut self, fallback: F) -> &'a mut T
    where
        F: FnOnce() -> &'a mut T,
    {
        self.slot.take().unwrap_or_else(fallback)
    }

    /// Moves the current borrow into a fresh container, leaving this one
    /// empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        match self.slot.take() {
            Some(referent) => Self::filled(referent),
            None => Self::new(),
        }
    }

    /// Records an exclusive borrow of `referent`, returning the prior
    /// content.
    #[inline]
    pub fn replace(&mut self, referent: &'a mut T) -> Self {
        let prior = self.take();
        self.slot.set(referent);
        prior
    }

    /// Forgets any recorded borrow. Idempotent; the referent is untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.slot.clear();
    }

    /// Consumes the container; if `Some`, applies `f` to the extracted
    /// exclusive borrow and wraps the result in an owned container.
    ///
    /// `f` is never invoked on an empty container.
    #[inline]
    pub fn map<U, F>(mut self, f: F) -> Opt<U>
    where
        F: FnOnce(&'a mut T) -> U,
    {
        match self.slot.take() {
            Some(referent) => some(f(referent)),
            None => Opt::new(),
        }
    }

    /// [`map`](OptMut::map) followed by flattening one level.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(&'a mut T) -> Opt<U>,
    {
        self.map(f).flatten()
    }

    /// Consumes the container; if `Some`, feeds the extracted borrow to `f`
    /// and reports `true`, otherwise reports `false`.
    #[inline]
    pub fn for_each<F>(mut self, f: F) -> bool
    where
        F: FnOnce(&'a mut T),
    {
        match self.slot.take() {
            Some(referent) => {
                f(referent);
                true
            }
            None => false,
        }
    }

    /// By-value fallback: the recorded borrow, or `fallback` when empty.
    #[inline]
    pub fn or_value(mut self, fallback: &'a mut T) -> &'a mut T {
        self.unwrap_or(fallback)
    }

    /// By-value fallback: the recorded borrow, or `fallback()` when empty.
    #[inline]
    pub fn or_else<F>(mut self, fallback: F) -> &'a mut T
    where
        F: FnOnce() -> &'a mut T,
    {
        self.unwrap_or_else(fallback)
    }

    /// Lifts the borrow into an owned container by copying the referent.
    #[inline]
    pub fn copied(self) -> Opt<T>
    where
        T: Copy,
    {
        self.map(|referent| *referent)
    }

    /// Lifts the borrow into an owned container by cloning the referent.
    #[inline]
    pub fn cloned(self) -> Opt<T>
    where
        T: Clone,
    {
        self.map(|referent| referent.clone())
    }

    /// Pairs the extracted borrow with a method selector for deferred
    /// invocation. See [`Opt::bind`].
    #[inline]
    pub fn bind<F>(self, method: F) -> Opt<BoundMethod<&'a mut T, F>> {
        self.map(|instance| BoundMethod::new(instance, method))
    }

    /// Crate-internal read access (equality, hashing, formatting).
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.slot.get()
    }
}

impl<T> Default for OptMut<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> From<&'a mut T> for OptMut<'a, T> {
    fn from(referent: &'a mut T) -> Self {
        Self::filled(referent)
    }
}
