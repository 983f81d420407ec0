//! Structural equality, hashing, and textual form for the three façades.
//!
//! Two containers are equal iff both are `None`, or both are `Some` and
//! their borrowed contents compare equal; mismatched presence is always
//! unequal. The comparison is by referent, never by address, so it holds
//! across the owned and borrowed variants: `some(3) == some(3).as_ref()`.
//!
//! Hashing feeds the presence flag and then, if present, the contained value
//! into the host's hasher, so equal containers — including across variants —
//! produce identical hash streams. The result is process-local only: it is
//! meant for keys in the host's associative containers, not for persistence.
//!
//! The textual form renders as `Some(value)` or `None`, for diagnostics and
//! test assertions.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::borrowed::{OptMut, OptRef};
use super::owned::Opt;

#[inline]
fn contents_eq<T, U>(lhs: Option<&T>, rhs: Option<&U>) -> bool
where
    T: PartialEq<U>,
{
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        (None, None) => true,
        _ => false,
    }
}

impl<T, U> PartialEq<Opt<U>> for Opt<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Opt<U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'b, T, U> PartialEq<OptRef<'b, U>> for Opt<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &OptRef<'b, U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'b, T, U> PartialEq<OptMut<'b, U>> for Opt<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &OptMut<'b, U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'a, T, U> PartialEq<Opt<U>> for OptRef<'a, T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Opt<U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'a, 'b, T, U> PartialEq<OptRef<'b, U>> for OptRef<'a, T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &OptRef<'b, U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'a, 'b, T, U> PartialEq<OptMut<'b, U>> for OptRef<'a, T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &OptMut<'b, U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'a, T, U> PartialEq<Opt<U>> for OptMut<'a, T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Opt<U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'a, 'b, T, U> PartialEq<OptRef<'b, U>> for OptMut<'a, T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &OptRef<'b, U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<'a, 'b, T, U> PartialEq<OptMut<'b, U>> for OptMut<'a, T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &OptMut<'b, U>) -> bool {
        contents_eq(self.get(), other.get())
    }
}

impl<T: Eq> Eq for Opt<T> {}
impl<T: Eq> Eq for OptRef<'_, T> {}
impl<T: Eq> Eq for OptMut<'_, T> {}

#[inline]
fn contents_hash<T: Hash, H: Hasher>(contents: Option<&T>, state: &mut H) {
    contents.is_some().hash(state);
    if let Some(value) = contents {
        value.hash(state);
    }
}

impl<T: Hash> Hash for Opt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        contents_hash(self.get(), state);
    }
}

impl<T: Hash> Hash for OptRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        contents_hash(self.get(), state);
    }
}

impl<T: Hash> Hash for OptMut<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        contents_hash(self.get(), state);
    }
}

#[inline]
fn fmt_debug<T: fmt::Debug>(contents: Option<&T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match contents {
        Some(value) => f.debug_tuple("Some").field(value).finish(),
        None => f.write_str("None"),
    }
}

#[inline]
fn fmt_display<T: fmt::Display>(contents: Option<&T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match contents {
        Some(value) => write!(f, "Some({value})"),
        None => f.write_str("None"),
    }
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self.get(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for OptRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self.get(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for OptMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self.get(), f)
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self.get(), f)
    }
}

impl<T: fmt::Display> fmt::Display for OptRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self.get(), f)
    }
}

impl<T: fmt::Display> fmt::Display for OptMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self.get(), f)
    }
}
