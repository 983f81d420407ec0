//! `RefSlot` / `MutSlot` — non-owning storage for at most one borrow.
//!
//! Each reference slot is a single nullable pointer plus a lifetime brand:
//! presence is "pointer is non-null", and the slot never owns the referent.
//! There is no construction or destruction cost and no destructor to run;
//! the referent's lifetime is controlled entirely by its owner, and the brand
//! ties the slot to the borrow it was created from.
//!
//! `MutSlot` additionally guarantees that the exclusive borrow it records is
//! handed back out at most once: `take` nulls the pointer before returning
//! the `&mut`, and the slot is not clonable.

use core::marker::PhantomData;
use core::ptr;

/// Non-owning storage for at most one shared borrow.
pub struct RefSlot<'a, T> {
    ptr: *const T,
    _brand: PhantomData<&'a T>,
}

impl<'a, T> RefSlot<'a, T> {
    /// Creates an empty slot.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null(),
            _brand: PhantomData,
        }
    }

    /// Creates a slot recording the address of `referent`.
    #[inline]
    pub fn filled(referent: &'a T) -> Self {
        Self {
            ptr: referent,
            _brand: PhantomData,
        }
    }

    /// Whether the slot currently records a referent.
    #[inline(always)]
    pub fn is_live(&self) -> bool {
        !self.ptr.is_null()
    }

    /// The recorded borrow, if any. Does not change the slot's state.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.ptr.is_null() {
            None
        } else {
            // SAFETY: a non-null pointer in this slot always originates from
            // a `&'a T`, which outlives the slot by the brand lifetime.
            Some(unsafe { &*self.ptr })
        }
    }

    /// Records the address of `referent`, forgetting any previous one.
    #[inline]
    pub fn set(&mut self, referent: &'a T) {
        self.ptr = referent;
    }

    /// Moves the recorded borrow out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<&'a T> {
        let referent = self.get();
        self.clear();
        referent
    }

    /// Nulls the slot. Idempotent.
    #[inline]
    pub fn clear(&mut self) {
        self.ptr = ptr::null();
    }
}

// A `RefSlot` is observationally a `Option<&'a T>`: copying it copies an
// address, nothing more.
impl<T> Clone for RefSlot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RefSlot<'_, T> {}

impl<T> Default for RefSlot<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

// SAFETY: `RefSlot<'a, T>` grants exactly the access of a `&'a T`, so it
// travels between threads under the same bound.
unsafe impl<T: Sync> Send for RefSlot<'_, T> {}
// SAFETY: shared access through `&RefSlot` is shared access to `T`.
unsafe impl<T: Sync> Sync for RefSlot<'_, T> {}

/// Non-owning storage for at most one exclusive borrow.
pub struct MutSlot<'a, T> {
    ptr: *mut T,
    _brand: PhantomData<&'a mut T>,
}

impl<'a, T> MutSlot<'a, T> {
    /// Creates an empty slot.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            _brand: PhantomData,
        }
    }

    /// Creates a slot recording the address of `referent`.
    #[inline]
    pub fn filled(referent: &'a mut T) -> Self {
        Self {
            ptr: referent,
            _brand: PhantomData,
        }
    }

    /// Whether the slot currently records a referent.
    #[inline(always)]
    pub fn is_live(&self) -> bool {
        !self.ptr.is_null()
    }

    /// Reborrows the referent for reading. Does not change the slot's state.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.ptr.is_null() {
            None
        } else {
            // SAFETY: the slot holds the only live path to the `&'a mut T` it
            // was built from; a shared reborrow bounded by `&self` cannot
            // alias a second exclusive borrow.
            Some(unsafe { &*self.ptr })
        }
    }

    /// Reborrows the referent for writing. Does not change the slot's state.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.ptr.is_null() {
            None
        } else {
            // SAFETY: as for `get`, with exclusivity inherited from `&mut self`.
            Some(unsafe { &mut *self.ptr })
        }
    }

    /// Records the address of `referent`, forgetting any previous one.
    #[inline]
    pub fn set(&mut self, referent: &'a mut T) {
        self.ptr = referent;
    }

    /// Moves the recorded exclusive borrow out, leaving the slot empty.
    ///
    /// The pointer is nulled before the borrow is materialized, so the same
    /// `&'a mut T` can never be produced twice.
    #[inline]
    pub fn take(&mut self) -> Option<&'a mut T> {
        if self.ptr.is_null() {
            None
        } else {
            let ptr = core::mem::replace(&mut self.ptr, ptr::null_mut());
            // SAFETY: `ptr` originates from the `&'a mut T` this slot was
            // built from, and nulling above makes this the single extraction.
            Some(unsafe { &mut *ptr })
        }
    }

    /// Nulls the slot. Idempotent. The referent is untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.ptr = ptr::null_mut();
    }
}

impl<T> Default for MutSlot<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

// SAFETY: `MutSlot<'a, T>` grants exactly the access of a `&'a mut T`.
unsafe impl<T: Send> Send for MutSlot<'_, T> {}
// SAFETY: shared access through `&MutSlot` only ever produces `&T`.
unsafe impl<T: Sync> Sync for MutSlot<'_, T> {}
