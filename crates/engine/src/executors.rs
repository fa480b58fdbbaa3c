// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in executors
//!
//! These run both for live actions and during replay, so what an action
//! does is defined in exactly one place.

use crate::error::ActionError;
use crate::registry::ActionExecutor;
use async_trait::async_trait;
use pgr_adapters::{AdapterError, AdapterOutput, EvmAdapter};
use pgr_core::{Action, ActionType, PlaygroundId};
use serde_json::Value;

/// Apply a typed action to an adapter
pub async fn apply<A: EvmAdapter>(
    adapter: &A,
    playground_id: PlaygroundId,
    action: &Action,
) -> Result<AdapterOutput, AdapterError> {
    match action {
        Action::CreateAccount(op) => adapter.create_account(playground_id, op).await,
        Action::FundAccount(op) => adapter.fund_account(playground_id, op).await,
        Action::DeployContract(op) => adapter.deploy_contract(playground_id, op).await,
        Action::CallFunction(op) => adapter.call_function(playground_id, op).await,
        Action::RegisterAccount(op) => adapter.register_account(playground_id, op).await,
    }
}

/// Decodes the payload for one action type and applies it
#[derive(Debug, Clone, Copy)]
pub struct StandardExecutor {
    action_type: ActionType,
}

impl StandardExecutor {
    pub fn new(action_type: ActionType) -> Self {
        Self { action_type }
    }
}

#[async_trait]
impl<A: EvmAdapter> ActionExecutor<A> for StandardExecutor {
    async fn execute(
        &self,
        adapter: &A,
        playground_id: PlaygroundId,
        payload: &Value,
    ) -> Result<AdapterOutput, ActionError> {
        let action = Action::decode(self.action_type, payload)?;
        Ok(apply(adapter, playground_id, &action).await?)
    }
}
