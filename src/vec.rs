//! The growable vector built on top of [`RawStorage`].
//!
//! `Vector<T>` layers a live-element count over one raw block:
//!
//! ```text
//! Vector<T>
//! ├── storage: RawStorage<T>   - owns cap uninitialized slots
//! └── len: usize               - slots [0, len) hold live values
//! ```
//!
//! Every capacity change allocates a fresh block, relocates the live
//! elements with a bitwise move, and swaps ownership. Because a Rust move
//! cannot fail, relocation is never observable partway: either the
//! allocation itself fails and the vector is untouched, or every element
//! lands in the new block.

use crate::raw::{AllocError, RawStorage};

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

/// A contiguous growable array.
///
/// The first `len()` slots of the backing storage hold live values in
/// insertion order; the remaining slots up to `capacity()` are
/// uninitialized memory. All slice methods are available through deref.
///
/// # Example
///
/// ```
/// use nexus_vec::Vector;
///
/// let mut v: Vector<u32> = Vector::new();
/// v.push(2);
/// v.push(3);
/// v.insert(0, 1);
///
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.pop(), Some(3));
/// ```
pub struct Vector<T> {
    storage: RawStorage<T>,
    len: usize,
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::empty(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; diverges on allocation failure. Use
    /// [`Vector::try_with_capacity`] to handle failure instead.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RawStorage::allocate(capacity),
            len: 0,
        }
    }

    /// Fallible twin of [`Vector::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            storage: RawStorage::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Creates a vector holding `count` clones of `value`.
    ///
    /// The last slot receives `value` itself, so exactly `count - 1`
    /// clones are made.
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity(count);
        vector.extend_with(count, value);
        vector
    }
}

// =============================================================================
// Inspection
// =============================================================================

impl<T> Vector<T> {
    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are live.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current allocation can hold.
    ///
    /// Zero-sized element types report `usize::MAX`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.storage.as_ptr(), self.len) }
    }

    /// Base pointer of the backing storage.
    ///
    /// Only the first `len()` slots hold live values. The pointer is
    /// invalidated by any capacity-changing operation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable base pointer of the backing storage.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_ptr()
    }
}

// =============================================================================
// Capacity management
// =============================================================================

impl<T> Vector<T> {
    /// Ensures capacity for at least `min_capacity` elements.
    ///
    /// Reallocates to exactly `min_capacity` if the current capacity is
    /// smaller; no geometric padding is applied because the caller stated
    /// an exact need. No-op otherwise. Note that unlike
    /// `std::vec::Vec::reserve` the argument is a total capacity, not an
    /// additional element count.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; diverges on allocation failure. The
    /// vector is untouched either way.
    pub fn reserve(&mut self, min_capacity: usize) {
        if min_capacity > self.capacity() {
            self.reallocate(min_capacity);
        }
    }

    /// Fallible twin of [`Vector::reserve`].
    ///
    /// On failure the vector is left exactly as it was: the new block is
    /// requested before any element is touched.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), AllocError> {
        if min_capacity > self.capacity() {
            let new_storage = RawStorage::try_allocate(min_capacity)?;
            self.relocate_into(new_storage);
        }
        Ok(())
    }

    /// Reallocates so that capacity equals the live count exactly.
    ///
    /// No-op if capacity is already exact. Calling it twice in a row does
    /// nothing the second time.
    pub fn shrink_to_fit(&mut self) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        if self.capacity() > self.len {
            self.reallocate(self.len);
        }
    }

    /// Grows for `additional` implicitly-added elements: new capacity is
    /// at least `max(1, 2 * len)`, which amortizes relocation to O(1) per
    /// append across a sequence of appends.
    fn grow_amortized(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            panic!("capacity overflow");
        };
        if required <= self.capacity() {
            return;
        }
        let doubled = self.len.saturating_mul(2).max(1);
        self.reallocate(required.max(doubled));
    }

    /// Moves the live elements into a fresh allocation of `new_cap` slots.
    ///
    /// If the allocation fails the vector has not been touched. Once it
    /// succeeds the relocation is a single bitwise move and cannot fail.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let new_storage = RawStorage::allocate(new_cap);
        self.relocate_into(new_storage);
    }

    /// Bitwise-moves the live elements into `new_storage` and takes
    /// ownership of it. The old elements are consumed by the move, so
    /// dropping the old storage releases memory only.
    fn relocate_into(&mut self, new_storage: RawStorage<T>) {
        unsafe {
            ptr::copy_nonoverlapping(self.storage.as_ptr(), new_storage.as_ptr(), self.len);
        }
        self.storage = new_storage;
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<T> Vector<T> {
    /// Appends an element. Amortized O(1).
    ///
    /// The value is already constructed when it arrives, so once any
    /// required growth has completed nothing on this path can fail.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_amortized(1);
        }
        unsafe {
            self.storage.slot(self.len).write(value);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.storage.slot(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting everything at and after it one
    /// slot right. Inserting at `len()` is the append path.
    ///
    /// The shift is a single memmove over the tail, working right-to-left
    /// by construction, so no live element is overwritten before it has
    /// been read and nothing on this path can fail after growth.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {len})",
            len = self.len
        );
        if self.len == self.capacity() {
            self.grow_amortized(1);
        }
        unsafe {
            let slot = self.storage.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {len})",
            len = self.len
        );
        unsafe {
            let slot = self.storage.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Destroys all live elements. Capacity is unchanged. Never fails.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the vector to `new_len` elements, destroying the tail.
    /// No-op if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        unsafe {
            let tail =
                ptr::slice_from_raw_parts_mut(self.storage.slot(new_len), self.len - new_len);
            // Commit the new length before running element drops so a
            // panicking Drop cannot cause a double-destroy of the tail.
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to exactly `new_len` elements, cloning `value` into any new
    /// tail slots or destroying surplus ones.
    ///
    /// Growth reserves exactly `new_len` - no geometric over-allocation.
    /// If a clone panics partway, the successfully constructed prefix
    /// stays live and counted; nothing leaks or double-drops.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.reserve(new_len);
            self.extend_with(new_len - self.len, value);
        }
    }

    /// Like [`Vector::resize`], filling new slots with calls to `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        for _ in self.len..new_len {
            let value = f();
            unsafe {
                self.storage.slot(self.len).write(value);
            }
            self.len += 1;
        }
    }

    /// Appends clones of every element of `other`. Growth is amortized.
    ///
    /// The live count is bumped only after each clone succeeds, so a
    /// panicking clone leaves the prefix added so far live and counted.
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        if self.capacity() - self.len < other.len() {
            self.grow_amortized(other.len());
        }
        for value in other {
            let cloned = value.clone();
            unsafe {
                self.storage.slot(self.len).write(cloned);
            }
            self.len += 1;
        }
    }

    /// Appends `additional` copies of `value`, cloning all but the last.
    /// Capacity must already be reserved.
    fn extend_with(&mut self, additional: usize, value: T)
    where
        T: Clone,
    {
        debug_assert!(self.capacity() - self.len >= additional);
        if additional == 0 {
            return;
        }
        for _ in 1..additional {
            let cloned = value.clone();
            unsafe {
                self.storage.slot(self.len).write(cloned);
            }
            self.len += 1;
        }
        unsafe {
            self.storage.slot(self.len).write(value);
        }
        self.len += 1;
    }
}

// =============================================================================
// Trait plumbing
// =============================================================================

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe {
            // Destroy the live elements; RawStorage releases the block.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.storage.as_ptr(),
                self.len,
            ));
        }
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Element-wise copy with the strong guarantee: if a clone panics
    /// partway, the partially-built copy is torn down and the source is
    /// untouched.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(slice: &[T]) -> Self {
        let mut vector = Self::with_capacity(slice.len());
        vector.extend_from_slice(slice);
        vector
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(array: [T; N]) -> Self {
        let mut vector = Self::with_capacity(N);
        for value in array {
            vector.push(value);
        }
        vector
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vector = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            vector.push(value);
        }
        vector
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for Vector<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    /// Lexicographic ordering over the live elements.
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
