// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::evm::{AdapterError, AdapterOutput, EvmAdapter};
use async_trait::async_trait;
use pgr_core::{
    CallFunction, CreateAccount, DeployContract, FundAccount, PlaygroundId, RegisterAccount,
};
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any EvmAdapter
#[derive(Clone)]
pub struct TracedEvmAdapter<A> {
    inner: A,
}

impl<A> TracedEvmAdapter<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

fn log_result(result: &Result<AdapterOutput, AdapterError>, start: Instant, done: &str) {
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::info!(elapsed_ms, "{done}"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "operation failed"),
    }
}

#[async_trait]
impl<A: EvmAdapter> EvmAdapter for TracedEvmAdapter<A> {
    async fn create_account(
        &self,
        playground_id: PlaygroundId,
        op: &CreateAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        let span = tracing::info_span!(
            "evm.create_account",
            playground_id = %playground_id,
            address = %op.address
        );
        async move {
            let start = Instant::now();
            let result = self.inner.create_account(playground_id, op).await;
            log_result(&result, start, "account created");
            result
        }
        .instrument(span)
        .await
    }

    async fn fund_account(
        &self,
        playground_id: PlaygroundId,
        op: &FundAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        let span = tracing::info_span!(
            "evm.fund_account",
            playground_id = %playground_id,
            address = %op.address
        );
        async move {
            tracing::debug!(amount = %op.amount, "funding");
            let start = Instant::now();
            let result = self.inner.fund_account(playground_id, op).await;
            log_result(&result, start, "account funded");
            result
        }
        .instrument(span)
        .await
    }

    async fn deploy_contract(
        &self,
        playground_id: PlaygroundId,
        op: &DeployContract,
    ) -> Result<AdapterOutput, AdapterError> {
        let span = tracing::info_span!(
            "evm.deploy_contract",
            playground_id = %playground_id,
            deployer = %op.deployer
        );
        async move {
            tracing::info!(
                bytecode_len = op.bytecode.len(),
                args = op.constructor_args.len(),
                "starting"
            );

            // Precondition: something to deploy
            if op.bytecode.is_empty() {
                tracing::error!("bytecode is empty");
                return Err(AdapterError::InvalidInput(
                    "bytecode is empty".to_string(),
                ));
            }

            let start = Instant::now();
            let result = self.inner.deploy_contract(playground_id, op).await;
            log_result(&result, start, "contract deployed");
            result
        }
        .instrument(span)
        .await
    }

    async fn call_function(
        &self,
        playground_id: PlaygroundId,
        op: &CallFunction,
    ) -> Result<AdapterOutput, AdapterError> {
        let span = tracing::info_span!(
            "evm.call_function",
            playground_id = %playground_id,
            contract = %op.contract,
            function = %op.function
        );
        async move {
            // Precondition: a function name to call
            if op.function.trim().is_empty() {
                tracing::error!("function name is empty");
                return Err(AdapterError::InvalidInput(
                    "function name is empty".to_string(),
                ));
            }

            let start = Instant::now();
            let result = self.inner.call_function(playground_id, op).await;
            log_result(&result, start, "function called");
            result
        }
        .instrument(span)
        .await
    }

    async fn register_account(
        &self,
        playground_id: PlaygroundId,
        op: &RegisterAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        let span = tracing::info_span!(
            "evm.register_account",
            playground_id = %playground_id,
            address = %op.address
        );
        async move {
            let start = Instant::now();
            let result = self.inner.register_account(playground_id, op).await;
            log_result(&result, start, "account registered");
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
