// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pgr-core: data model for playground action logs
//!
//! This crate provides:
//! - Playground identifiers and addresses
//! - The closed set of action types with typed payloads
//! - Persisted action records and clear-control markers
//! - A clock abstraction for testable timestamps

pub mod action;
pub mod address;
pub mod bytecode;
pub mod clear;
pub mod clock;
pub mod playground;
pub mod record;

pub use action::{
    Action, ActionType, CallFunction, CreateAccount, DeployContract, FundAccount,
    PayloadDecodeError, RegisterAccount, UnknownActionType,
};
pub use address::{Address, AddressError};
pub use bytecode::{Bytecode, BytecodeError};
pub use clear::{ClearMarker, ACTIONS_TABLE, LOG_SCHEMA_VERSION};
pub use clock::{Clock, FakeClock, SystemClock};
pub use playground::PlaygroundId;
pub use record::{ActionRecord, RecordDecodeError};
