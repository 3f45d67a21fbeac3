// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::{fmt, ptr, slice};

use crate::raw_slots::RawSlots;

/// An owning iterator over the elements of a [`SimpleVector`](crate::SimpleVector).
///
/// Elements not yielded are dropped with the iterator, which then releases
/// the block.
pub struct IntoIter<T> {
    slots: RawSlots<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: RawSlots<T>, len: usize) -> Self {
        Self {
            slots,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is live and start <= end <= capacity
        unsafe { slice::from_raw_parts(self.slots.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;
        // SAFETY: slot `index` was live and is now outside [start, end)
        Some(unsafe { self.slots.slot(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: slot `end` was live and is now outside [start, end)
        Some(unsafe { self.slots.slot(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;

        // SAFETY: [start, end) is live and no longer reachable through the iterator
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.slots.slot(start), end - start);
            ptr::drop_in_place(rest);
        }
    }
}
