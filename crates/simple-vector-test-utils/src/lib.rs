// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for simple-vector.
//!
//! Element types that record their own lifetimes or fail on demand, so tests
//! can check that a container constructs, moves and destroys exactly what it
//! should, including while unwinding from a panicking constructor.
//!
//! ## License
//!
//! GPL-3.0-only

mod fallible_default;
mod move_only;
mod tracked;

pub use fallible_default::{
    FallibleDefault, fail_default_after, live_fallible_defaults, reset_fallible_defaults,
};
pub use move_only::MoveOnly;
pub use tracked::{DropLedger, Tracked};
