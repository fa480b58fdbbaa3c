// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live path for a playground: activate by replaying, then perform and
//! record new actions

use crate::error::{ActionError, PerformError, RecordError, SnapshotLoadError};
use crate::recorder::ActionRecorder;
use crate::registry::ActionRegistry;
use crate::replay::{ReplayEngine, ReplayOutcome};
use pgr_adapters::{AdapterOutput, EvmAdapter};
use pgr_core::{Action, ActionRecord, PlaygroundId};
use pgr_storage::ActionStore;
use std::sync::Arc;

/// Result of a live action that was applied and recorded
#[derive(Debug, Clone)]
pub struct Performed {
    pub output: AdapterOutput,
    pub record: ActionRecord,
}

pub struct PlaygroundSession<S, A: EvmAdapter> {
    recorder: ActionRecorder<S>,
    registry: Arc<ActionRegistry<A>>,
    adapter: A,
}

impl<S: ActionStore, A: EvmAdapter> PlaygroundSession<S, A> {
    pub fn new(store: S, registry: Arc<ActionRegistry<A>>, adapter: A) -> Self {
        Self {
            recorder: ActionRecorder::new(store),
            registry,
            adapter,
        }
    }

    pub fn recorder(&self) -> &ActionRecorder<S> {
        &self.recorder
    }

    pub fn registry(&self) -> &Arc<ActionRegistry<A>> {
        &self.registry
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Bind to a playground and rebuild its state from the log
    pub async fn activate(
        &self,
        playground_id: PlaygroundId,
    ) -> Result<ReplayOutcome, SnapshotLoadError> {
        self.recorder.set_playground_id(playground_id);
        let engine = ReplayEngine::new(
            playground_id,
            self.recorder.clone(),
            Arc::clone(&self.registry),
            self.adapter.clone(),
        );
        engine.run().await
    }

    /// Execute an action against the adapter and record it on success
    ///
    /// A failed execution records nothing. A failed record means the
    /// change was applied in memory but will not survive a reload.
    pub async fn perform(&self, action: &Action) -> Result<Performed, PerformError> {
        let Some(playground_id) = self.recorder.current_playground_id() else {
            return Err(RecordError::Unbound.into());
        };

        let action_type = action.action_type();
        let payload = action.encode();
        let executor = self
            .registry
            .resolve(action_type.as_str())
            .map_err(ActionError::from)?;
        let output = executor
            .execute(&self.adapter, playground_id, &payload)
            .await?;

        // Record into the playground the action ran against, even if the
        // recorder was rebound while it executed
        let record = self
            .recorder
            .record_for(playground_id, action_type, payload)
            .await?;
        Ok(Performed { output, record })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
