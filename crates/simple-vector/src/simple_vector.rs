// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, handle_alloc_error};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut, Index, IndexMut, Range};
use core::slice::{self, SliceIndex};
use core::{fmt, ptr};

#[cfg(any(test, feature = "test_utils"))]
use log::debug;

use crate::error::SimpleVectorError;
use crate::raw_slots::{InitGuard, RawSlots};

/// Test behaviour for injecting failures in `SimpleVector` operations.
///
/// Only available with the `test_utils` feature. The behaviour is sticky:
/// once set, it stays active until changed back to [`SimpleVectorBehaviour::None`].
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use simple_vector::{SimpleVector, SimpleVectorBehaviour, SimpleVectorError};
///
/// let mut vec = SimpleVector::<u8>::new();
/// vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);
///
/// assert_eq!(
///     vec.try_push_back(1).err(),
///     Some(SimpleVectorError::AllocationFailed { capacity: 1 })
/// );
/// assert!(vec.is_empty());
/// assert_eq!(vec.capacity(), 0);
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimpleVectorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every non-empty allocation, including copies, fails with `AllocationFailed`.
    FailAtAllocation,
}

/// A growable contiguous array owning a single block of element slots.
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are allocated
/// but uninitialized. A container with capacity zero owns no allocation.
///
/// Appending doubles the capacity when the block is full (starting from one
/// slot), so a sequence of `n` appends performs `O(log n)` reallocations.
/// Every reallocation goes through one transfer routine that moves each live
/// value exactly once.
///
/// # Failure model
///
/// - Allocation failures are reported by the `try_*` methods and abort through
///   [`handle_alloc_error`] in their infallible counterparts.
/// - Element constructors (`Default`, `Clone`, caller closures) may panic. Bulk
///   constructions destroy what they built, in reverse order, and release the
///   new block while unwinding; the container is left as it was before the call.
/// - Positions outside the valid range are caller bugs and panic.
///
/// # Example
///
/// ```rust
/// use simple_vector::SimpleVector;
///
/// let mut vec = SimpleVector::from_slice(&[1, 2, 3]);
/// vec.insert(0, 0);
/// vec.push_back(9);
///
/// assert_eq!(vec, [0, 1, 2, 3, 9]);
/// assert_eq!(vec.at(5).ok(), None);
/// ```
pub struct SimpleVector<T> {
    slots: RawSlots<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: SimpleVectorBehaviour,
}

/// Resolves the result of a fallible allocation the way the standard
/// collections do: allocator failure aborts, layout overflow panics.
#[cold]
#[track_caller]
fn capacity_failure<T>(error: SimpleVectorError) -> ! {
    if let SimpleVectorError::AllocationFailed { capacity } = error {
        if let Ok(layout) = Layout::array::<T>(capacity) {
            handle_alloc_error(layout);
        }
    }

    panic!("{error}");
}

#[inline]
#[track_caller]
fn infallible<T, R>(result: Result<R, SimpleVectorError>) -> R {
    match result {
        Ok(value) => value,
        Err(error) => capacity_failure::<T>(error),
    }
}

impl<T> SimpleVector<T> {
    #[inline(always)]
    const fn from_parts(slots: RawSlots<T>, len: usize) -> Self {
        Self {
            slots,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: SimpleVectorBehaviour::None,
        }
    }

    /// Allocates `capacity` slots and fills the first `len` with `make(index)`.
    fn try_build<F>(capacity: usize, len: usize, make: F) -> Result<Self, SimpleVectorError>
    where
        F: FnMut(usize) -> T,
    {
        Ok(Self::fill(RawSlots::try_allocate(capacity)?, len, make))
    }

    /// Fills the first `len` slots of a fresh block with `make(index)`.
    ///
    /// If `make` panics, the values already written are destroyed in reverse
    /// order and the block is released before the panic propagates.
    fn fill<F>(mut slots: RawSlots<T>, len: usize, mut make: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        debug_assert!(len <= slots.capacity());

        // SAFETY: the fresh block holds no live values and has room for len slots
        let mut guard = unsafe { InitGuard::new(slots.as_mut_ptr()) };

        for index in 0..len {
            let value = make(index);
            // SAFETY (PRECONDITIONS ARE MET): index < len <= capacity
            unsafe { guard.push(value) };
        }

        let len = guard.commit();

        Self::from_parts(slots, len)
    }

    /// Creates a new empty `SimpleVector`. Does not allocate.
    pub const fn new() -> Self {
        Self::from_parts(RawSlots::dangling(), 0)
    }

    /// Creates an empty `SimpleVector` backed by exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        infallible::<T, _>(Self::try_with_capacity(capacity))
    }

    /// Fallible form of [`SimpleVector::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, SimpleVectorError> {
        Ok(Self::from_parts(RawSlots::try_allocate(capacity)?, 0))
    }

    /// Creates a `SimpleVector` holding `len` default values, with capacity `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        infallible::<T, _>(Self::try_with_len(len))
    }

    /// Fallible form of [`SimpleVector::with_len`].
    pub fn try_with_len(len: usize) -> Result<Self, SimpleVectorError>
    where
        T: Default,
    {
        Self::try_build(len, len, |_| T::default())
    }

    /// Creates a `SimpleVector` holding `len` clones of `value`, with capacity `len`.
    pub fn from_elem(len: usize, value: &T) -> Self
    where
        T: Clone,
    {
        infallible::<T, _>(Self::try_from_elem(len, value))
    }

    /// Fallible form of [`SimpleVector::from_elem`].
    pub fn try_from_elem(len: usize, value: &T) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        Self::try_build(len, len, |_| value.clone())
    }

    /// Creates a `SimpleVector` holding clones of `values` in order, with
    /// capacity `values.len()`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        infallible::<T, _>(Self::try_from_slice(values))
    }

    /// Fallible form of [`SimpleVector::from_slice`].
    pub fn try_from_slice(values: &[T]) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        Self::try_build(values.len(), values.len(), |index| values[index].clone())
    }

    /// Clones every live value into a new block of the same capacity.
    pub fn try_clone(&self) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        let values = self.as_slice();
        let slots = self.allocate(self.capacity())?;

        Ok(Self::fill(slots, values.len(), |index| values[index].clone()))
    }

    /// Takes the block, length and capacity of `source`, leaving it empty and
    /// unallocated. Never allocates and never touches individual values.
    pub fn take_from(source: &mut Self) -> Self {
        let mut taken = Self::new();
        taken.swap_with(source);
        taken
    }

    /// Replaces the contents with clones of `source`.
    ///
    /// The replacement is built in full before anything is exchanged, so on
    /// failure `self` is untouched.
    pub fn try_assign(&mut self, source: &Self) -> Result<(), SimpleVectorError>
    where
        T: Clone,
    {
        let values = source.as_slice();
        let slots = self.allocate(source.capacity())?;
        let mut replacement = Self::fill(slots, values.len(), |index| values[index].clone());

        self.swap_with(&mut replacement);
        Ok(())
    }

    /// Replaces the contents with those of `source`, leaving `source` empty.
    ///
    /// The previous contents of `self` are dropped.
    pub fn assign_moved(&mut self, source: &mut Self) {
        let mut replacement = Self::take_from(source);
        self.swap_with(&mut replacement);
    }

    /// Exchanges blocks, lengths and capacities with `other` in O(1).
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the vector currently owns an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.slots.is_allocated()
    }

    /// Sets the failure-injection behaviour for later operations.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: SimpleVectorBehaviour) {
        self.behaviour = behaviour;
    }

    fn allocate(&self, capacity: usize) -> Result<RawSlots<T>, SimpleVectorError> {
        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == SimpleVectorBehaviour::FailAtAllocation && capacity > 0 {
            debug!("injected allocation failure for {capacity} slots");
            return Err(SimpleVectorError::AllocationFailed { capacity });
        }

        RawSlots::try_allocate(capacity)
    }

    /// Capacity after one growth step: doubled, with a floor of one slot.
    fn grown_capacity(&self) -> Result<usize, SimpleVectorError> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity
                .checked_mul(2)
                .ok_or(SimpleVectorError::CapacityOverflow),
        }
    }

    /// Moves every live value into `fresh` (leaving a hole at `gap` if given)
    /// and releases the old block.
    fn adopt(&mut self, mut fresh: RawSlots<T>, gap: Option<usize>) {
        // SAFETY: [0, len) is live in self.slots, fresh was just allocated with
        // room for len (+1 with a gap) values, and callers check gap <= len
        unsafe { self.slots.relocate_into(&mut fresh, self.len, gap) };

        // Old slots are logically uninitialized now; dropping only frees the block.
        self.slots = fresh;
    }

    #[cold]
    #[inline(never)]
    fn relocate(&mut self, new_capacity: usize) -> Result<(), SimpleVectorError> {
        let fresh = self.allocate(new_capacity)?;
        self.adopt(fresh, None);
        Ok(())
    }

    /// Grows the block to exactly `new_capacity` slots, moving every live value.
    ///
    /// Does nothing if `new_capacity <= capacity`.
    pub fn reserve(&mut self, new_capacity: usize) {
        infallible::<T, _>(self.try_reserve(new_capacity));
    }

    /// Fallible form of [`SimpleVector::reserve`]. On failure nothing changes.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), SimpleVectorError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.relocate(new_capacity)
    }

    /// Appends `value`, doubling the capacity first if the block is full.
    pub fn push_back(&mut self, value: T) {
        infallible::<T, _>(self.try_push_back(value));
    }

    /// Fallible form of [`SimpleVector::push_back`] returning the new element.
    ///
    /// On allocation failure `value` is dropped and the container is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, SimpleVectorError> {
        self.try_emplace_back(|| value)
    }

    /// Constructs a value with `make` directly at the end and returns it.
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        infallible::<T, _>(self.try_emplace_back(make))
    }

    /// Fallible form of [`SimpleVector::emplace_back`].
    ///
    /// The block grows before `make` runs; if `make` panics the elements are
    /// unchanged but the larger capacity is kept.
    pub fn try_emplace_back<F>(&mut self, make: F) -> Result<&mut T, SimpleVectorError>
    where
        F: FnOnce() -> T,
    {
        if self.len == self.capacity() {
            let new_capacity = self.grown_capacity()?;
            self.relocate(new_capacity)?;
        }

        let value = make();

        // SAFETY (PRECONDITIONS ARE MET): len < capacity after the growth check
        let slot = unsafe { self.slots.slot(self.len) };
        // SAFETY: slot is in bounds and uninitialized
        unsafe { slot.write(value) };
        self.len += 1;

        // SAFETY: slot now holds a live value owned by self, borrowed mutably
        Ok(unsafe { &mut *slot })
    }

    /// Inserts `value` before position `index` and returns `index`.
    ///
    /// `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        infallible::<T, _>(self.try_insert(index, value))
    }

    /// Fallible form of [`SimpleVector::insert`].
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, SimpleVectorError> {
        self.try_emplace(index, || value)
    }

    /// Constructs a value with `make` at position `index` and returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, make: F) -> usize
    where
        F: FnOnce() -> T,
    {
        infallible::<T, _>(self.try_emplace(index, make))
    }

    /// Fallible form of [`SimpleVector::emplace`].
    ///
    /// When the block is full, a block of doubled capacity is allocated, the
    /// new value is constructed, and every live value is moved once into its
    /// final slot around it. Otherwise the tail is shifted one slot right and
    /// the value is written into the vacated slot.
    ///
    /// `make` always runs before any live value moves: if it panics, or the
    /// allocation fails, the container is unchanged.
    #[track_caller]
    pub fn try_emplace<F>(&mut self, index: usize, make: F) -> Result<usize, SimpleVectorError>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if len == self.capacity() {
            let new_capacity = self.grown_capacity()?;
            let fresh = self.allocate(new_capacity)?;
            let value = make();

            self.adopt(fresh, Some(index));

            // SAFETY: adopt left slot `index` of the new block uninitialized
            unsafe { self.slots.slot(index).write(value) };
        } else {
            let value = make();

            // SAFETY (PRECONDITIONS ARE MET): len < capacity, so [index, len) can
            // shift to [index + 1, len + 1) within the block
            unsafe {
                let hole = self.slots.slot(index);
                ptr::copy(hole, hole.add(1), len - index);
                hole.write(value);
            }
        }

        self.len += 1;

        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );

        // SAFETY (PRECONDITIONS ARE MET): index < len, so the slot is live and
        // [index + 1, len) shifts to [index, len - 1) within the block
        unsafe {
            let hole = self.slots.slot(index);
            let value = hole.read();
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Destroys the element at `index` and returns the position of the element
    /// that now occupies it (`len` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Destroys the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back called on an empty SimpleVector");
        self.truncate(self.len - 1);
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        // SAFETY: the slot at the old len - 1 was live and is now outside [0, len)
        Some(unsafe { self.slots.slot(self.len).read() })
    }

    /// Destroys every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys the elements in `[new_len, len)`. Does nothing if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }

        // Shrink first so a panicking destructor cannot expose dropped slots.
        self.len = new_len;

        // SAFETY: [new_len, len) was live and is now outside the live range
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.slots.slot(new_len), len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Sets the length to `new_len`, default-constructing new elements or
    /// destroying surplus ones.
    ///
    /// Grows to `max(new_len, 2 * capacity)` slots if `new_len` exceeds the
    /// capacity. Shrinking never releases memory.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        infallible::<T, _>(self.try_resize(new_len));
    }

    /// Fallible form of [`SimpleVector::resize`].
    ///
    /// If a default constructor panics, the values built by this call are
    /// destroyed and the length is unchanged; any growth already done is kept.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), SimpleVectorError>
    where
        T: Default,
    {
        if new_len > self.capacity() {
            let new_capacity = self
                .capacity()
                .checked_mul(2)
                .map_or(new_len, |doubled| doubled.max(new_len));
            self.relocate(new_capacity)?;
        }

        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        let additional = new_len - self.len;
        // SAFETY: [len, new_len) is allocated and uninitialized
        let mut guard = unsafe { InitGuard::new(self.slots.slot(self.len)) };

        for _ in 0..additional {
            let value = T::default();
            // SAFETY (PRECONDITIONS ARE MET): at most `additional` pushes, all below capacity
            unsafe { guard.push(value) };
        }

        self.len += guard.commit();

        Ok(())
    }

    /// Checked access: `OutOfRange` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, SimpleVectorError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(SimpleVectorError::OutOfRange { index, len })
    }

    /// Checked mutable access: `OutOfRange` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVectorError::OutOfRange { index, len })
    }

    /// Returns a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live, the pointer is non-null and aligned
        unsafe { slice::from_raw_parts(self.slots.as_ptr(), self.len) }
    }

    /// Returns a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is live and uniquely borrowed through &mut self
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr(), self.len) }
    }

    /// Pointer to the first slot. Valid until the next mutation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Mutable pointer to the first slot. Valid until the next mutation.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr()
    }

    /// The `[begin, end)` pointer range of the live elements.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }
}

/// Exchanges the contents of two vectors in O(1).
#[inline]
pub fn swap<T>(lhs: &mut SimpleVector<T>, rhs: &mut SimpleVector<T>) {
    lhs.swap_with(rhs);
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is live; slots releases the block afterwards
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) };
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        infallible::<T, _>(self.try_clone())
    }

    /// Copy-and-swap: the old contents go away with the temporary.
    fn clone_from(&mut self, source: &Self) {
        infallible::<T, _>(self.try_assign(source));
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        let values = ManuallyDrop::new(values);
        let mut slots = infallible::<T, _>(RawSlots::try_allocate(N));

        // SAFETY: ownership of the N values moves into the fresh block;
        // ManuallyDrop keeps the array from dropping them again
        unsafe { ptr::copy_nonoverlapping(values.as_ptr(), slots.as_mut_ptr(), N) };

        Self::from_parts(slots, N)
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len.saturating_add(lower);

        if needed > self.capacity() {
            let grown = infallible::<T, _>(self.grown_capacity());
            self.reserve(needed.max(grown));
        }

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = crate::into_iter::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);
        let slots = mem::replace(&mut this.slots, RawSlots::dangling());
        crate::into_iter::IntoIter::new(slots, this.len)
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<T: PartialEq<U>, U> PartialEq<SimpleVector<U>> for SimpleVector<T> {
    fn eq(&self, other: &SimpleVector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for SimpleVector<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic `<` over the elements' own `<`: the first position where one
/// side is less decides, otherwise the shorter sequence is less.
fn lexicographic_less<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    for (a, b) in lhs.iter().zip(rhs) {
        if a < b {
            return true;
        }
        if b < a {
            return false;
        }
    }

    lhs.len() < rhs.len()
}

/// `<=`, `>` and `>=` are derived from `<` alone, so element pairs that are
/// neither less nor greater (such as `NaN`) are skipped rather than poisoning
/// the comparison.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if other < self {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        lexicographic_less(self.as_slice(), other.as_slice())
    }

    fn le(&self, other: &Self) -> bool {
        !lexicographic_less(other.as_slice(), self.as_slice())
    }

    fn gt(&self, other: &Self) -> bool {
        lexicographic_less(other.as_slice(), self.as_slice())
    }

    fn ge(&self, other: &Self) -> bool {
        !lexicographic_less(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
