//! Contiguous growable array with explicit panic-safety guarantees.
//!
//! A from-scratch reimplementation of the standard growable vector, built
//! to make the memory model legible. The key separation: memory that
//! exists versus objects that are alive within it.
//!
//! ```text
//! Vector<T>                  - tracks which slots hold live values
//! └── RawStorage<T>          - owns the uninitialized block, frees it once
//! ```
//!
//! The raw layer never constructs or destroys elements; the vector layer
//! never allocates or frees memory directly. Every capacity change
//! allocates a fresh block, relocates the live elements, and swaps
//! ownership.
//!
//! # Guarantees
//!
//! Each mutating operation states what happens when something fails
//! partway (allocation failure, or a panic out of the element type's
//! `Clone`/`Drop`):
//!
//! | Operation | On failure |
//! |-----------|------------|
//! | growth / `reserve` / `shrink_to_fit` | vector untouched: relocation is a bitwise move and cannot fail, so only the allocation itself can, before any element is moved |
//! | `push`, `insert`, `remove`, `pop`, `clear`, `truncate` | cannot fail after growth - values arrive already constructed and shifts are memmoves |
//! | `try_reserve`, `try_with_capacity` | failure reported as [`AllocError`], vector untouched |
//! | `clone` | partially-built copy torn down, source untouched |
//! | `resize`, `extend_from_slice`, `Extend` | the successfully constructed prefix stays live and counted; no leak, no double-drop |
//!
//! # Example
//!
//! ```
//! use nexus_vec::vector;
//!
//! let mut v = vector![3, 1, 2];
//! v.sort();
//! v.push(4);
//!
//! assert_eq!(v, [1, 2, 3, 4]);
//! assert_eq!(v.remove(0), 1);
//!
//! let copy = v.clone();
//! assert_eq!(copy, v);
//! ```
//!
//! # What this is not
//!
//! No custom allocator injection, no small-buffer optimization, no
//! internal synchronization (`Send`/`Sync` follow the element type; the
//! caller serializes access). References into the vector are invalidated
//! by any capacity-changing or shifting operation, as usual.

#![warn(missing_docs)]

mod raw;
mod vec;

pub use raw::AllocError;
pub use vec::Vector;

/// Creates a [`Vector`] from a literal element list, or from a value and
/// a count.
///
/// # Example
///
/// ```
/// use nexus_vec::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let filled = vector![0u8; 4];
/// assert_eq!(filled, [0, 0, 0, 0]);
///
/// let empty: nexus_vec::Vector<u8> = vector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::Vector::from_elem($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Vector::from([$($value),+])
    };
}
