// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct LedgerState {
    live: Cell<usize>,
    dropped: Cell<usize>,
    clones_left: Cell<Option<usize>>,
    drop_order: RefCell<Vec<u32>>,
}

/// Shared record of every [`Tracked`] value created from it.
///
/// Counts live values and drops, remembers the order in which values were
/// dropped, and can be armed to make a later clone panic.
#[derive(Clone, Default)]
pub struct DropLedger {
    state: Rc<LedgerState>,
}

impl DropLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracked value recorded by this ledger.
    pub fn track(&self, value: u32) -> Tracked {
        self.state.live.set(self.state.live.get() + 1);
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    /// Creates one tracked value per item of `values`.
    pub fn track_all<I>(&self, values: I) -> Vec<Tracked>
    where
        I: IntoIterator<Item = u32>,
    {
        values.into_iter().map(|value| self.track(value)).collect()
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> usize {
        self.state.live.get()
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.state.dropped.get()
    }

    /// Values in the order they were dropped.
    pub fn drop_order(&self) -> Vec<u32> {
        self.state.drop_order.borrow().clone()
    }

    /// Forgets the recorded drop order.
    pub fn clear_drop_order(&self) {
        self.state.drop_order.borrow_mut().clear();
    }

    /// Lets the next `clones` clones succeed, then panics on the one after.
    pub fn fail_clone_after(&self, clones: usize) {
        self.state.clones_left.set(Some(clones));
    }

    /// Stops injecting clone failures.
    pub fn disarm(&self) {
        self.state.clones_left.set(None);
    }
}

impl fmt::Debug for DropLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropLedger")
            .field("live", &self.live())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// A value whose clones and drops are recorded by a [`DropLedger`].
pub struct Tracked {
    value: u32,
    ledger: DropLedger,
}

impl Tracked {
    /// The payload.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let state = &self.ledger.state;

        match state.clones_left.get() {
            Some(0) => panic!("injected clone failure for value {}", self.value),
            Some(left) => state.clones_left.set(Some(left - 1)),
            None => {}
        }

        self.ledger.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let state = &self.ledger.state;
        state.live.set(state.live.get() - 1);
        state.dropped.set(state.dropped.get() + 1);
        state.drop_order.borrow_mut().push(self.value);
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialEq<u32> for Tracked {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
