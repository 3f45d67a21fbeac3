// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simple-vector.
use thiserror::Error;

/// Errors that can occur when working with a [`SimpleVector`](crate::SimpleVector).
///
/// Construction failures raised by element constructors are panics, not
/// variants of this type: they unwind through the container, which cleans up
/// whatever it built during the failing call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVectorError {
    /// The requested slot count does not fit in a memory layout.
    #[error("capacity overflow: slot count exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The allocator could not provide a block for the requested slot count.
    #[error("allocation of {capacity} slots failed")]
    AllocationFailed {
        /// Number of slots that were requested.
        capacity: usize,
    },

    /// Checked access past the live range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the container at the time of access.
        len: usize,
    },
}
