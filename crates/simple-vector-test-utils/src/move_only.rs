// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::mem;

/// A value that can be moved but never cloned.
///
/// `take` mimics a moved-from state by leaving zero behind.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly {
    value: usize,
}

impl MoveOnly {
    /// Value produced by `Default`.
    pub const DEFAULT_VALUE: usize = 5;

    /// Creates a value.
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    /// The payload.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Moves the payload into a new value, leaving zero in `self`.
    pub fn take(&mut self) -> Self {
        Self::new(mem::take(&mut self.value))
    }
}

impl Default for MoveOnly {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VALUE)
    }
}
