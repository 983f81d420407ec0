//! `BoundMethod` — deferred invocation of a method on an extracted value.
//!
//! Built only via [`bind`](crate::Opt::bind) on a `Some` container: the
//! extracted instance (owned or borrowed, matching how it was extracted) is
//! paired with a method selector so the method can be invoked later without
//! re-querying the container. Once built the pair is immutable; it is
//! intended for immediate, single use. When the instance is a borrow, the
//! borrow's lifetime bounds the proxy — the compiler will not let it outlive
//! the referent.

use core::fmt;

/// An immutable (instance, method selector) pair awaiting invocation.
///
/// The selector is any `FnOnce` taking the instance first — a function item
/// like `String::len`, a fn pointer, or a closure. Invocation consumes the
/// proxy and applies the selector to the carried instance.
///
/// No equality or ordering is defined.
///
/// # Examples
///
/// ```
/// use solo::some;
///
/// let word = some(String::from("abc"));
/// let proxy = word.as_ref().bind(String::is_empty);
/// assert_eq!(proxy.map(|method| method.invoke()), some(false));
/// ```
pub struct BoundMethod<T, F> {
    instance: T,
    method: F,
}

impl<T, F> BoundMethod<T, F> {
    /// Built only through the `bind` path on a `Some` container.
    #[inline]
    pub(crate) fn new(instance: T, method: F) -> Self {
        Self { instance, method }
    }

    /// Applies the selector to the carried instance.
    #[inline]
    pub fn invoke<R>(self) -> R
    where
        F: FnOnce(T) -> R,
    {
        (self.method)(self.instance)
    }

    /// Applies the selector to the carried instance with `arg`.
    #[inline]
    pub fn invoke_with<A, R>(self, arg: A) -> R
    where
        F: FnOnce(T, A) -> R,
    {
        (self.method)(self.instance, arg)
    }
}

impl<T, F> fmt::Debug for BoundMethod<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoundMethod")
    }
}
