//! Raw, uninitialized element storage.
//!
//! [`RawStorage`] owns a block of correctly-aligned, uninitialized memory
//! sized for `cap` elements. It never constructs or destroys elements -
//! tracking which slots hold live values is the caller's job. Dropping a
//! `RawStorage` releases the block and nothing else.

use core::mem;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};

/// Error returned when element storage cannot be allocated.
///
/// The fallible allocation paths (`try_allocate`, `Vector::try_reserve`)
/// report this instead of panicking; the container is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity overflows the maximum allocation size.
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    OutOfMemory {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AllocError::CapacityOverflow => {
                write!(f, "requested capacity exceeds the maximum allocation size")
            }
            AllocError::OutOfMemory { bytes } => {
                write!(f, "memory allocation of {bytes} bytes failed")
            }
        }
    }
}

impl std::error::Error for AllocError {}

/// Owner of a block of uninitialized memory for `cap` elements of `T`.
///
/// # Invariants
///
/// - If `cap > 0` and `T` is not zero-sized, `ptr` addresses a live
///   allocation of exactly `Layout::array::<T>(cap)` from the global
///   allocator. Otherwise `ptr` is dangling and nothing is allocated.
/// - The block contains no live objects as far as this type is concerned.
///   Constructing into and destroying out of slots is the caller's
///   responsibility; `Drop` only frees the bytes.
///
/// Ownership is exclusive: there is no `Clone` impl (a byte-copy would
/// create two owners of one block), and a Rust move transfers the block
/// without any release.
pub(crate) struct RawStorage<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawStorage<T> {
    const ELEM_SIZE: usize = mem::size_of::<T>();

    /// Storage holding nothing.
    ///
    /// Zero-sized element types never need backing memory, so they report
    /// unbounded capacity from the start.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if Self::ELEM_SIZE == 0 { usize::MAX } else { 0 },
        }
    }

    /// Allocates storage for exactly `cap` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows, and diverges via
    /// [`handle_alloc_error`] if the allocator refuses the request.
    pub(crate) fn allocate(cap: usize) -> Self {
        if Self::ELEM_SIZE == 0 || cap == 0 {
            return Self::empty();
        }
        let Ok(layout) = Layout::array::<T>(cap) else {
            panic!("capacity overflow");
        };
        let ptr = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(ptr.cast::<T>()) else {
            handle_alloc_error(layout);
        };
        Self { ptr, cap }
    }

    /// Fallible twin of [`RawStorage::allocate`].
    ///
    /// On failure nothing is allocated and no partial state exists.
    pub(crate) fn try_allocate(cap: usize) -> Result<Self, AllocError> {
        if Self::ELEM_SIZE == 0 || cap == 0 {
            return Ok(Self::empty());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow)?;
        let ptr = unsafe { alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, cap }),
            None => Err(AllocError::OutOfMemory {
                bytes: layout.size(),
            }),
        }
    }

    /// Number of element slots this block can hold.
    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Base pointer of the block.
    #[inline]
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Raw location of slot `index`. Whether a live object exists there is
    /// the caller's knowledge, not this type's.
    ///
    /// # Safety
    ///
    /// `index` must be within the allocated capacity.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(Self::ELEM_SIZE == 0 || index < self.cap);
        unsafe { self.ptr.as_ptr().add(index) }
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if Self::ELEM_SIZE == 0 || self.cap == 0 {
            return;
        }
        // Layout was validated when the block was allocated.
        let layout = Layout::array::<T>(self.cap).unwrap();
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}

// Safety: RawStorage exclusively owns its allocation; the Vector built on
// top stores values of T in it.
unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}
