// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Durable storage for playground action logs

mod clear_control;
mod index;
mod memory;
mod store;
pub mod wal;

pub use clear_control::{ClearControl, ClearError, ResetOutcome};
pub use memory::MemoryStore;
pub use store::{ActionStore, ClearOutcome, StoreError};
pub use wal::WalStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod flaky;
#[cfg(any(test, feature = "test-support"))]
pub use flaky::FlakyStore;
