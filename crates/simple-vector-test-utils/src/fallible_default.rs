// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

thread_local! {
    static DEFAULTS_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// A value whose `Default` impl can be armed to panic.
///
/// Failure injection and live counts are per thread, so tests running in
/// parallel do not observe each other.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FallibleDefault(u32);

impl FallibleDefault {
    /// Value produced by `Default`.
    pub const DEFAULT_VALUE: u32 = 5;

    /// Creates a value, counted as live.
    pub fn new(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self(value)
    }

    /// The payload.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for FallibleDefault {
    fn default() -> Self {
        DEFAULTS_LEFT.with(|left| match left.get() {
            Some(0) => panic!("injected default construction failure"),
            Some(n) => left.set(Some(n - 1)),
            None => {}
        });

        Self::new(Self::DEFAULT_VALUE)
    }
}

impl Clone for FallibleDefault {
    fn clone(&self) -> Self {
        Self::new(self.0)
    }
}

impl Drop for FallibleDefault {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// Lets the next `defaults` default constructions succeed on this thread,
/// then panics on the one after.
pub fn fail_default_after(defaults: usize) {
    DEFAULTS_LEFT.with(|left| left.set(Some(defaults)));
}

/// Stops injecting default construction failures on this thread.
pub fn reset_fallible_defaults() {
    DEFAULTS_LEFT.with(|left| left.set(None));
}

/// Number of [`FallibleDefault`] values alive on this thread.
pub fn live_fallible_defaults() -> usize {
    LIVE.with(Cell::get)
}
