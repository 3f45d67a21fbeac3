// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit slot lifetimes.
//!
//! `SimpleVector<T>` owns exactly one block of element slots. Slots `[0, len)`
//! hold live values; the rest of the block is allocated but uninitialized.
//!
//! # Core Guarantees
//!
//! - **Single owner**: the block belongs to one container at a time. Taking
//!   from a container (`take_from`, `assign_moved`) leaves it empty and
//!   unallocated, and still usable.
//! - **Amortized append**: a full block doubles (starting at one slot), so `n`
//!   appends cost `O(n)` in total with `O(log n)` reallocations.
//! - **One transfer routine**: reserve, append and insert all relocate through
//!   the same code path, which moves each live value exactly once.
//! - **Panic-safe bulk construction**: if an element constructor panics
//!   halfway through a fill, a copy or a resize, the values built by that call
//!   are destroyed in reverse order and any fresh block is released.
//! - **Copy-and-swap assignment**: replacements are built in full before they
//!   are exchanged with the target, so a failed assignment changes nothing.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use simple_vector::{SimpleVector, SimpleVectorError};
//!
//! fn example() -> Result<(), SimpleVectorError> {
//!     let mut vec = SimpleVector::from_slice(&[1, 2, 3]);
//!
//!     vec.insert(0, 0);
//!     vec.insert(vec.len(), 9);
//!     vec.insert(3, 99);
//!     assert_eq!(vec, [0, 1, 2, 99, 3, 9]);
//!
//!     let next = vec.erase(0);
//!     assert_eq!(vec[next], 1);
//!
//!     assert_eq!(*vec.at(0)?, 1);
//!     assert!(vec.at(vec.len()).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Ownership Transfer
//!
//! ```rust
//! use simple_vector::SimpleVector;
//!
//! let mut source: SimpleVector<u32> = (0..5).collect();
//! let target = SimpleVector::take_from(&mut source);
//!
//! assert_eq!(target, [0, 1, 2, 3, 4]);
//! assert_eq!(source.len(), 0);
//! assert_eq!(source.capacity(), 0);
//!
//! // The source is still a valid, empty container
//! source.push_back(7);
//! assert_eq!(source, [7]);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! simple-vector = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`SimpleVectorBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use simple_vector::{SimpleVector, SimpleVectorBehaviour};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut vec = SimpleVector::<u8>::new();
//!         vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);
//!
//!         assert!(vec.try_reserve(16).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod capacity_hint;
mod error;
mod into_iter;
mod raw_slots;
mod simple_vector;

#[cfg(test)]
mod tests;

pub use capacity_hint::{CapacityHint, reserve};
pub use error::SimpleVectorError;
pub use into_iter::IntoIter;
pub use simple_vector::{SimpleVector, swap};

#[cfg(any(test, feature = "test_utils"))]
pub use simple_vector::SimpleVectorBehaviour;

/// Creates a [`SimpleVector`] from a list of values or a `value; len` pair.
///
/// ```rust
/// use simple_vector::simple_vector;
///
/// let listed = simple_vector![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
///
/// let filled = simple_vector![7u8; 4];
/// assert_eq!(filled, [7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $len:expr) => {
        $crate::SimpleVector::from_elem($len, &$value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}
