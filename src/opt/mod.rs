//! The public optional-value façades.
//!
//! Façades are organized by how they relate to the value:
//! - `owned`: [`Opt`], which owns its content exclusively
//! - `borrowed`: [`OptRef`] and [`OptMut`], which record a borrow
//! - `bound`: [`BoundMethod`], the deferred-invocation proxy
//! - `cmp`: the structural equality / hash / rendering contract across all
//!   of the above

mod borrowed;
mod bound;
mod cmp;
mod owned;

pub use borrowed::{OptMut, OptRef};
pub use bound::BoundMethod;
pub use owned::{none, some, Opt};
