// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the playground execution environment

pub mod evm;
pub mod traced;

pub use evm::{
    Account, AdapterError, AdapterOutput, Contract, ContractCall, Environment, EvmAdapter,
    SharedEnvironment, SimAdapter,
};
pub use traced::TracedEvmAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use evm::{EvmCall, EvmOp, FakeEvmAdapter};
