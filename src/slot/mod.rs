//! Storage foundation: slots holding at most one value or one borrow.
//!
//! All `unsafe` in the crate lives in this module. The owned [`Slot`] pairs a
//! presence flag with inline `MaybeUninit` storage and owns the payload's
//! construct/destroy lifecycle; the reference slots ([`RefSlot`], [`MutSlot`])
//! are a single nullable address plus a lifetime brand and never own their
//! referent. The [`Opt`](crate::Opt) façade and its borrowed variants define
//! all observable semantics on top of these.

mod owned;
mod raw;
mod reference;

pub use owned::Slot;
pub use reference::{MutSlot, RefSlot};
