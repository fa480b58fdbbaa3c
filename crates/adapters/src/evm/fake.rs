// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake environment adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AdapterError, AdapterOutput, EvmAdapter};
use async_trait::async_trait;
use pgr_core::{
    Action, ActionType, CallFunction, CreateAccount, DeployContract, FundAccount, PlaygroundId,
    RegisterAccount,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Operation kinds that can be made to fail
pub type EvmOp = ActionType;

/// Recorded adapter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmCall {
    pub playground_id: PlaygroundId,
    pub action: Action,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<EvmCall>,
    failing: HashSet<EvmOp>,
    latency: Option<Duration>,
}

/// Fake adapter that records every call and succeeds unless told otherwise
#[derive(Clone, Default)]
pub struct FakeEvmAdapter {
    state: Arc<Mutex<FakeState>>,
}

impl FakeEvmAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<EvmCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Make every subsequent call of this kind fail
    pub fn fail_on(&self, op: EvmOp) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failing
            .insert(op);
    }

    /// Delay every call, to widen race windows in tests
    pub fn set_latency(&self, latency: Duration) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).latency = Some(latency);
    }

    async fn record(
        &self,
        playground_id: PlaygroundId,
        action: Action,
    ) -> Result<AdapterOutput, AdapterError> {
        let latency = self.state.lock().unwrap_or_else(|e| e.into_inner()).latency;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let op = action.action_type();
        state.calls.push(EvmCall {
            playground_id,
            action,
        });

        if state.failing.contains(&op) {
            return Err(AdapterError::Unavailable(format!("injected failure: {op}")));
        }
        Ok(AdapterOutput::empty())
    }
}

#[async_trait]
impl EvmAdapter for FakeEvmAdapter {
    async fn create_account(
        &self,
        playground_id: PlaygroundId,
        op: &CreateAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        self.record(playground_id, op.clone().into()).await
    }

    async fn fund_account(
        &self,
        playground_id: PlaygroundId,
        op: &FundAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        self.record(playground_id, op.clone().into()).await
    }

    async fn deploy_contract(
        &self,
        playground_id: PlaygroundId,
        op: &DeployContract,
    ) -> Result<AdapterOutput, AdapterError> {
        self.record(playground_id, op.clone().into()).await
    }

    async fn call_function(
        &self,
        playground_id: PlaygroundId,
        op: &CallFunction,
    ) -> Result<AdapterOutput, AdapterError> {
        self.record(playground_id, op.clone().into()).await
    }

    async fn register_account(
        &self,
        playground_id: PlaygroundId,
        op: &RegisterAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        self.record(playground_id, op.clone().into()).await
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
