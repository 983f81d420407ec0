//! # `solo` - Move-Centric Optional Value Container
//!
//! A container that either holds exactly one value of a given type or holds
//! none, with ownership-transferring extraction, non-owning reference
//! variants, and chainable short-circuiting combinators. For library authors
//! who want explicit, non-null optionality with zero implicit duplication of
//! non-duplicable values.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **Audited unsafe core**: every `unsafe` block lives in the storage
//!   foundation (`slot`), funneled through a small set of individually
//!   documented helpers.
//! - **At most one live value, exactly one owner**: the presence flag is
//!   raised only after a value is fully stored and lowered before it is moved
//!   out or dropped, so no operation can observe a half-constructed value,
//!   double-drop one, or leak one.
//! - **Structural leak prevention**: the storage layer has no
//!   "store without clearing" operation — every overwrite destroys the prior
//!   value first, by construction rather than by caller discipline.
//!
//! ### Ownership
//! - **Moves, never implicit copies**: transferring a container transfers its
//!   payload exactly once; duplication requires `T: Clone` and an explicit
//!   `clone()`.
//! - **Borrows stay borrows**: the reference variants record an address and a
//!   lifetime brand, never ownership — the compiler bounds them by the
//!   referent's lifetime, and an exclusive borrow is handed back out at most
//!   once.
//!
//! ## Architecture
//!
//! Stratified design: storage foundation → ergonomic façades.
//!
//! 1. **Slots** ([`slot::Slot`], [`slot::RefSlot`], [`slot::MutSlot`]):
//!    presence tracking plus room for one value or one borrow; own the
//!    construct/destroy lifecycle (or explicitly none of it).
//! 2. **Façades** ([`Opt`], [`OptRef`], [`OptMut`]): the observable
//!    semantics — state transitions, destructive extraction, the combinator
//!    family, equality/hash/rendering.
//! 3. **Deferred invocation** ([`BoundMethod`]): an extracted instance paired
//!    with a method selector, built only through [`Opt::bind`].
//!
//! Extraction is destructive by design: after a successful
//! `expect`/`unwrap`, the container is empty. Failed extraction is the one
//! error of the crate, [`EmptyValueError`]. The container is single-threaded;
//! `Send`/`Sync` follow the payload exactly as they do for `T`, `&T`, and
//! `&mut T`.
//!
//! ## Example
//!
//! ```rust
//! use solo::{none, some, Opt};
//!
//! // Start empty; fill by replacement.
//! let mut greeting: Opt<String> = Opt::new();
//! assert!(greeting.is_none());
//! greeting.replace(String::from("hello"));
//!
//! // Extraction moves the value out and empties the container.
//! assert_eq!(greeting.unwrap(), Ok(String::from("hello")));
//! assert_eq!(greeting.unwrap_or(String::from(" world")), " world");
//!
//! // Combinator chains short-circuit on `None` without invoking any step.
//! let chained = some(5).map(|n| n * n).map(|n| n + 1).map(|n| n / 2);
//! assert_eq!(chained, some(13));
//! assert_eq!(none::<i32>().map(|n| n * n), none::<i32>());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod opt;
pub mod slot;

pub use error::EmptyValueError;
pub use opt::{none, some, BoundMethod, Opt, OptMut, OptRef};
