// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution environment adapters
//!
//! Live actions and replayed actions go through the same trait, so an
//! implementation must reproduce the same state for the same ordered
//! sequence of calls.

mod sim;

pub use sim::{Account, Contract, ContractCall, Environment, SharedEnvironment, SimAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EvmCall, EvmOp, FakeEvmAdapter};

use async_trait::async_trait;
use pgr_core::{
    Address, CallFunction, CreateAccount, DeployContract, FundAccount, PlaygroundId,
    RegisterAccount,
};
use serde_json::Value;
use thiserror::Error;

/// Errors from environment operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("account not found: {0}")]
    AccountNotFound(Address),
    #[error("contract not found: {0}")]
    ContractNotFound(Address),
    #[error("insufficient balance for {address}: have {available}, need {required}")]
    InsufficientBalance {
        address: Address,
        available: u128,
        required: u128,
    },
    #[error("balance overflow for {0}")]
    BalanceOverflow(Address),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("environment unavailable: {0}")]
    Unavailable(String),
}

/// Data returned by a successful operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdapterOutput {
    pub data: Option<Value>,
}

impl AdapterOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_data(data: Value) -> Self {
        Self { data: Some(data) }
    }
}

/// Account and contract operations of a simulated execution environment
#[async_trait]
pub trait EvmAdapter: Clone + Send + Sync + 'static {
    async fn create_account(
        &self,
        playground_id: PlaygroundId,
        op: &CreateAccount,
    ) -> Result<AdapterOutput, AdapterError>;

    async fn fund_account(
        &self,
        playground_id: PlaygroundId,
        op: &FundAccount,
    ) -> Result<AdapterOutput, AdapterError>;

    async fn deploy_contract(
        &self,
        playground_id: PlaygroundId,
        op: &DeployContract,
    ) -> Result<AdapterOutput, AdapterError>;

    async fn call_function(
        &self,
        playground_id: PlaygroundId,
        op: &CallFunction,
    ) -> Result<AdapterOutput, AdapterError>;

    async fn register_account(
        &self,
        playground_id: PlaygroundId,
        op: &RegisterAccount,
    ) -> Result<AdapterOutput, AdapterError>;
}
