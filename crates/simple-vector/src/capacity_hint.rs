// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::simple_vector::SimpleVector;

/// Requested backing capacity for a container that starts with no elements.
///
/// ```rust
/// use simple_vector::{SimpleVector, reserve};
///
/// let vec: SimpleVector<u32> = SimpleVector::from(reserve(5));
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    /// Creates a hint for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Number of slots requested.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`CapacityHint::new`].
pub const fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}

impl<T> From<CapacityHint> for SimpleVector<T> {
    fn from(hint: CapacityHint) -> Self {
        SimpleVector::with_capacity(hint.capacity())
    }
}
