// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lookup from action type tag to executor

use crate::error::ActionError;
use crate::executors::StandardExecutor;
use async_trait::async_trait;
use pgr_adapters::{AdapterOutput, EvmAdapter};
use pgr_core::{ActionRecord, ActionType, PlaygroundId, UnknownActionType};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Runs one kind of action against an adapter
#[async_trait]
pub trait ActionExecutor<A: EvmAdapter>: Send + Sync + 'static {
    async fn execute(
        &self,
        adapter: &A,
        playground_id: PlaygroundId,
        payload: &Value,
    ) -> Result<AdapterOutput, ActionError>;
}

/// Maps every action type to the executor that performs it
pub struct ActionRegistry<A: EvmAdapter> {
    executors: BTreeMap<ActionType, Arc<dyn ActionExecutor<A>>>,
}

impl<A: EvmAdapter> ActionRegistry<A> {
    /// A registry with no executors
    pub fn empty() -> Self {
        Self {
            executors: BTreeMap::new(),
        }
    }

    /// A registry with the built-in executor for every action type
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for action_type in ActionType::ALL {
            registry.register(action_type, StandardExecutor::new(action_type));
        }
        registry
    }

    /// Add or replace the executor for an action type
    pub fn register<E: ActionExecutor<A>>(&mut self, action_type: ActionType, executor: E) {
        self.executors.insert(action_type, Arc::new(executor));
    }

    /// Find the executor for a persisted type tag
    pub fn resolve(&self, tag: &str) -> Result<Arc<dyn ActionExecutor<A>>, UnknownActionType> {
        let action_type: ActionType = tag.parse()?;
        self.executors
            .get(&action_type)
            .cloned()
            .ok_or_else(|| UnknownActionType {
                tag: tag.to_string(),
            })
    }

    /// Pair a record with its executor
    pub fn bind(&self, record: ActionRecord) -> BoundAction<A> {
        let executor = self.resolve(&record.tag);
        BoundAction { record, executor }
    }
}

impl<A: EvmAdapter> Default for ActionRegistry<A> {
    fn default() -> Self {
        Self::standard()
    }
}

/// A record with its executor already resolved
///
/// Records whose tag has no executor still bind; running them reports
/// [`ActionError::UnknownType`].
pub struct BoundAction<A: EvmAdapter> {
    pub record: ActionRecord,
    executor: Result<Arc<dyn ActionExecutor<A>>, UnknownActionType>,
}

impl<A: EvmAdapter> BoundAction<A> {
    pub async fn run(&self, adapter: &A) -> Result<AdapterOutput, ActionError> {
        let executor = self.executor.as_ref().map_err(|e| e.clone())?;
        executor
            .execute(adapter, self.record.playground_id, &self.record.payload)
            .await
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
