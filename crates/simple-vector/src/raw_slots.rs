// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, alloc, dealloc};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use log::{debug, trace};

use crate::error::SimpleVectorError;

/// Exclusively owned block of `capacity` uninitialized slots for `T`.
///
/// `RawSlots` never runs element destructors. Which slots hold live values is
/// tracked by the owner; dropping a `RawSlots` only releases the block.
///
/// A block of capacity zero, or of any capacity for a zero-sized `T`, is never
/// backed by an allocation.
pub(crate) struct RawSlots<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawSlots uniquely owns its block, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawSlots<T> {}
// SAFETY: shared access only hands out *const T, reads require T: Sync.
unsafe impl<T: Sync> Sync for RawSlots<T> {}

impl<T> RawSlots<T> {
    /// An unallocated block with capacity zero.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block for exactly `capacity` slots.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, SimpleVectorError> {
        if capacity == 0 {
            return Ok(Self::dangling());
        }

        let layout = Self::layout_for(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc(layout) };

        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            debug!("allocation of {capacity} slots ({} bytes) failed", layout.size());
            return Err(SimpleVectorError::AllocationFailed { capacity });
        };

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    pub(crate) fn layout_for(capacity: usize) -> Result<Layout, SimpleVectorError> {
        Layout::array::<T>(capacity).map_err(|_| SimpleVectorError::CapacityOverflow)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if dropping this block releases memory.
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.capacity != 0 && mem::size_of::<T>() != 0
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity`.
    #[inline]
    pub(crate) unsafe fn slot(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY (PRECONDITIONS ARE MET): index is within the block or one past its end
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Moves the `len` live values of `self` into the empty block `dst`.
    ///
    /// With `gap = Some(offset)`, values at `[offset, len)` land one slot to the
    /// right, leaving slot `offset` of `dst` uninitialized for the caller to fill.
    /// Every value is moved exactly once; afterwards the slots of `self` are
    /// logically uninitialized and must not be dropped.
    ///
    /// # Safety
    ///
    /// - `self` holds live values in exactly `[0, len)`.
    /// - `dst` holds no live values and has room for `len + 1` slots when a gap
    ///   is requested, `len` otherwise.
    /// - `offset <= len`.
    pub(crate) unsafe fn relocate_into(
        &mut self,
        dst: &mut RawSlots<T>,
        len: usize,
        gap: Option<usize>,
    ) {
        trace!(
            "relocating {len} values from {} to {} slots (gap: {gap:?})",
            self.capacity, dst.capacity
        );

        let src = self.as_ptr();
        let out = dst.as_mut_ptr();

        match gap {
            None => {
                debug_assert!(len <= dst.capacity);
                // SAFETY (PRECONDITIONS ARE MET): distinct blocks, both sized for len values
                unsafe { ptr::copy_nonoverlapping(src, out, len) };
            }
            Some(offset) => {
                debug_assert!(offset <= len && len < dst.capacity);
                // SAFETY (PRECONDITIONS ARE MET): prefix [0, offset) and suffix
                // [offset, len) fit in dst at [0, offset) and [offset + 1, len + 1)
                unsafe {
                    ptr::copy_nonoverlapping(src, out, offset);
                    ptr::copy_nonoverlapping(src.add(offset), out.add(offset + 1), len - offset);
                }
            }
        }
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }

        if let Ok(layout) = Self::layout_for(self.capacity) {
            // SAFETY: the block was allocated in try_allocate with this exact layout
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Tracks values written into consecutive slots during a bulk construction.
///
/// If dropped before [`InitGuard::commit`], typically while unwinding from a
/// panicking constructor, it destroys every value it wrote in reverse order.
/// The block itself is released by its `RawSlots` owner.
pub(crate) struct InitGuard<T> {
    base: *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    /// # Safety
    ///
    /// `base` must stay valid for writes of every slot pushed through the guard,
    /// and those slots must hold no live values.
    pub(crate) unsafe fn new(base: *mut T) -> Self {
        Self {
            base,
            initialized: 0,
        }
    }

    /// Writes `value` into the next slot.
    ///
    /// # Safety
    ///
    /// The slot at `base + initialized` is in bounds of the block.
    #[inline]
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees the slot is in bounds and empty
        unsafe { self.base.add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Disarms the guard and returns how many values were written.
    pub(crate) fn commit(self) -> usize {
        let initialized = self.initialized;
        mem::forget(self);
        initialized
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        debug!(
            "unwinding partial construction of {} values",
            self.initialized
        );

        for index in (0..self.initialized).rev() {
            // SAFETY: slots [0, initialized) were written by push and are still live
            unsafe { ptr::drop_in_place(self.base.add(index)) };
        }
    }
}
