//! `Opt<T>` — the owned optional-value façade.
//!
//! A thin shell over [`Slot<T>`](crate::slot::Slot) that defines every
//! observable semantic: state transitions, destructive extraction, borrowing,
//! combinators, and the fallback family. The container has exactly two
//! states, `Some` and `None`, and cycles between them for its entire
//! lifetime; absence is the only non-value state.
//!
//! ## Extraction is destructive
//!
//! Unlike `std::option::Option`, reading the value *out* always empties the
//! container: after any successful `expect`/`unwrap`/`unwrap_or*`, the
//! container reports `is_none()`. Borrowing through [`Opt::as_ref`] /
//! [`Opt::as_mut`] is the non-consuming read path.
//!
//! ## Ownership
//!
//! Transferring an `Opt` transfers its payload exactly once — Rust's move
//! semantics, no duplication, no double-drop. Every content-overwriting
//! operation funnels through take-then-store, so the prior value is fully
//! destroyed before the new one lands.

use crate::error::{EmptyValueError, UNWRAP_ON_NONE};
use crate::slot::Slot;

use super::borrowed::{OptMut, OptRef};
use super::bound::BoundMethod;

/// A value of type `T` that may or may not currently exist here.
///
/// Owns its content exclusively: the value is destroyed on the container's
/// own drop, on [`clear`](Opt::clear), or on replacement, and is moved out by
/// the extraction operations.
///
/// # Examples
///
/// ```
/// use solo::{none, some};
///
/// let mut greeting = some(String::from("hello"));
/// assert_eq!(greeting.unwrap(), Ok(String::from("hello")));
/// assert!(greeting.is_none());
/// assert_eq!(greeting.unwrap_or(String::from(" world")), " world");
/// ```
pub struct Opt<T> {
    slot: Slot<T>,
}

/// Produces a filled container.
///
/// ```
/// use solo::some;
///
/// assert!(some(3).is_some());
/// ```
#[inline]
pub fn some<T>(value: T) -> Opt<T> {
    Opt {
        slot: Slot::filled(value),
    }
}

/// Produces an explicitly-typed empty container.
///
/// Useful where the value type cannot be inferred from context.
///
/// ```
/// use solo::none;
///
/// assert!(none::<String>().is_none());
/// ```
#[inline]
pub const fn none<T>() -> Opt<T> {
    Opt::new()
}

impl<T> Opt<T> {
    /// Creates an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: Slot::empty() }
    }

    /// Whether the container currently holds a value.
    #[inline(always)]
    pub const fn is_some(&self) -> bool {
        self.slot.is_live()
    }

    /// Exact negation of [`is_some`](Opt::is_some).
    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Moves the value out, or fails with `msg` if the container is empty.
    ///
    /// After any successful call the container is empty — extraction is
    /// destructive and single-use.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] carrying `msg` when the container is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::{none, some};
    ///
    /// let mut opt = some(5);
    /// assert_eq!(opt.expect("five is missing"), Ok(5));
    /// assert!(opt.is_none());
    ///
    /// let err = none::<i32>().expect("five is missing").unwrap_err();
    /// assert_eq!(err.message(), "five is missing");
    /// ```
    pub fn expect(&mut self, msg: &str) -> Result<T, EmptyValueError> {
        match self.slot.take() {
            Some(value) => Ok(value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(msg, "extraction attempted on an empty container");
                Err(EmptyValueError::new(msg))
            }
        }
    }

    /// Fails with `msg` if the container holds a value.
    ///
    /// The dual of [`expect`](Opt::expect); the container is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] carrying `msg` when the container is
    /// `Some`.
    pub fn expect_none(&self, msg: &str) -> Result<(), EmptyValueError> {
        if self.is_some() {
            Err(EmptyValueError::new(msg))
        } else {
            Ok(())
        }
    }

    /// [`expect`](Opt::expect) with a fixed default message.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when the container is `None`.
    #[inline]
    pub fn unwrap(&mut self) -> Result<T, EmptyValueError> {
        self.expect(UNWRAP_ON_NONE)
    }

    /// Moves the value out, or returns `fallback` if the container is empty.
    ///
    /// The fallback is consumed only on the empty path, never both.
    #[inline]
    pub fn unwrap_or(&mut self, fallback: T) -> T {
        match self.slot.take() {
            Some(value) => value,
            None => fallback,
        }
    }

    /// Moves the value out, or returns `T::default()` if the container is
    /// empty.
    #[inline]
    pub fn unwrap_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Moves the value out, or computes a fallback if the container is empty.
    ///
    /// `fallback` is invoked only when the container is empty.
    #[inline]
    pub fn unwrap_or_else<F>(&mut self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.slot.take() {
            Some(value) => value,
            None => fallback(),
        }
    }

    /// Moves the current content into a fresh container, leaving this one
    /// empty.
    ///
    /// On an already-empty container, returns an empty container and leaves
    /// this one unchanged. This is the canonical read-and-clear primitive the
    /// other operations build on.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::some;
    ///
    /// let mut opt = some(3);
    /// let taken = opt.take();
    /// assert!(opt.is_none());
    /// assert_eq!(taken, some(3));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(was_some = self.is_some(), "take");
        Self::from_inner(self.slot.take())
    }

    /// Stores `value`, returning the prior content.
    ///
    /// Equivalent to [`take`](Opt::take) followed by storing `value`: the
    /// previous value, if any, is fully destroyed before the new one is
    /// stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::some;
    ///
    /// let mut opt = some("old");
    /// let prior = opt.replace("new");
    /// assert_eq!(prior, some("old"));
    /// assert_eq!(opt, some("new"));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        let prior = self.take();
        self.slot.set(value);
        prior
    }

    /// Drops any content, leaving the container empty. Idempotent.
    #[inline]
    pub fn clear(&mut self) {
        self.slot.clear();
    }

    /// Borrows the current value into a non-owning container.
    ///
    /// Borrowing never changes this container's state; an empty input yields
    /// an empty output. The result holds a shared borrow, so the original
    /// stays readable.
    #[inline]
    pub fn as_ref(&self) -> OptRef<'_, T> {
        match self.slot.get() {
            Some(value) => OptRef::filled(value),
            None => OptRef::new(),
        }
    }

    /// Mutably borrows the current value into a non-owning container.
    ///
    /// Borrowing never changes this container's state; an empty input yields
    /// an empty output.
    #[inline]
    pub fn as_mut(&mut self) -> OptMut<'_, T> {
        match self.slot.get_mut() {
            Some(value) => OptMut::filled(value),
            None => OptMut::new(),
        }
    }

    /// Consumes the container; if `Some`, applies `f` to the extracted value
    /// and wraps the result.
    ///
    /// `f` is never invoked on an empty container — the chain short-circuits.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::{none, some};
    ///
    /// assert_eq!(some(3).map(|n| n * 2), some(6));
    /// assert_eq!(none::<i32>().map(|n| n * 2), none::<i32>());
    /// ```
    #[inline]
    pub fn map<U, F>(mut self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot.take() {
            Some(value) => some(f(value)),
            None => Opt::new(),
        }
    }

    /// [`map`](Opt::map) followed by flattening one level.
    ///
    /// Supports chaining functions that themselves return an `Opt`, without
    /// nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::{none, some, Opt};
    ///
    /// fn half(n: i32) -> Opt<i32> {
    ///     if n % 2 == 0 { some(n / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).and_then(half), some(4));
    /// assert_eq!(some(5).and_then(half), none::<i32>());
    /// assert_eq!(none::<i32>().and_then(half), none::<i32>());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        self.map(f).flatten()
    }

    /// Consumes the container; if `Some`, feeds the extracted value to `f`
    /// and reports `true`, otherwise reports `false`.
    ///
    /// The terminal step of an effectful chain; `f` is never invoked on an
    /// empty container.
    #[inline]
    pub fn for_each<F>(mut self, f: F) -> bool
    where
        F: FnOnce(T),
    {
        match self.slot.take() {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Extracts and invokes the contained callable.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::{none, some};
    ///
    /// assert_eq!(some(|| 5).call(), some(5));
    /// assert_eq!(none::<fn() -> i32>().call(), none::<i32>());
    /// ```
    #[inline]
    pub fn call<R>(self) -> Opt<R>
    where
        T: FnOnce() -> R,
    {
        self.map(|callable| callable())
    }

    /// Extracts and invokes the contained callable with `arg`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::some;
    ///
    /// assert_eq!(some(|n: i32| n * 2).call_with(3), some(6));
    /// ```
    #[inline]
    pub fn call_with<A, R>(self, arg: A) -> Opt<R>
    where
        T: FnOnce(A) -> R,
    {
        self.map(|callable| callable(arg))
    }

    /// By-value fallback: the contained value, or `fallback` when empty.
    ///
    /// Fluent alias of [`unwrap_or`](Opt::unwrap_or) for the end of a chain.
    #[inline]
    pub fn or_value(mut self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }

    /// By-value fallback: the contained value, or `fallback()` when empty.
    ///
    /// Fluent alias of [`unwrap_or_else`](Opt::unwrap_or_else); `fallback`
    /// is invoked only when the container is empty.
    #[inline]
    pub fn or_else<F>(mut self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(fallback)
    }

    /// Pairs the extracted value with a method selector for deferred
    /// invocation.
    ///
    /// On `Some`, extracts the value and wraps it with `method` in a
    /// [`BoundMethod`], so the method can be invoked later without
    /// re-querying the container; on `None`, yields `None` and `method` is
    /// dropped uninvoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::some;
    ///
    /// let value = some(String::from("hi"));
    /// let proxy = value.as_ref().bind(String::len);
    /// assert_eq!(proxy.map(|method| method.invoke()), some(2));
    /// ```
    #[inline]
    pub fn bind<F>(self, method: F) -> Opt<BoundMethod<T, F>> {
        self.map(|instance| BoundMethod::new(instance, method))
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.slot.take()
    }

    /// Builds a container from the standard library's `Option`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        Self::from_inner(value)
    }

    /// Borrows the content for crate-internal inspection (equality, hashing,
    /// formatting, cloning).
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    #[inline]
    fn from_inner(value: Option<T>) -> Self {
        match value {
            Some(value) => some(value),
            None => Self::new(),
        }
    }
}

impl<T> Opt<Opt<T>> {
    /// Collapses one level of nesting.
    ///
    /// `None` and `Some(None)` collapse to `None`; `Some(Some(v))` collapses
    /// to `Some(v)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solo::{none, some, Opt};
    ///
    /// assert_eq!(none::<Opt<i32>>().flatten(), none::<i32>());
    /// assert_eq!(some(none::<i32>()).flatten(), none::<i32>());
    /// assert_eq!(some(some(3)).flatten(), some(3));
    /// ```
    #[inline]
    pub fn flatten(mut self) -> Opt<T> {
        self.unwrap_or_default()
    }
}

impl<T> Default for Opt<T> {
    /// The empty container.
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit duplication only: the container is clonable exactly when its
/// payload is.
impl<T: Clone> Clone for Opt<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => some(value.clone()),
            None => Self::new(),
        }
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_inner(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.into_option()
    }
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::arbitrary::{any_with, Arbitrary};
    use proptest::strategy::{BoxedStrategy, LazyJust, Strategy, Union};

    use super::{some, Opt};

    impl<T: Arbitrary + 'static> Arbitrary for Opt<T> {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            Union::new_weighted(vec![
                (1, LazyJust::new(Opt::<T>::new).boxed()),
                (4, any_with::<T>(args).prop_map(some).boxed()),
            ])
            .boxed()
        }
    }
}
