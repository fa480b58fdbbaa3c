// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential replay of action logs
//!
//! A replay never aborts part way: each record that cannot be decoded,
//! has no executor, or fails against the adapter is logged, added to the
//! report and skipped. Only a failure to load the snapshot itself stops
//! the pass, and in that case nothing has been applied.

use crate::error::{ActionError, SnapshotLoadError};
use crate::recorder::ActionRecorder;
use crate::registry::{ActionRegistry, BoundAction};
use crate::report::{FailureKind, ReplayFailure, ReplayReport, ReplayScope};
use pgr_adapters::EvmAdapter;
use pgr_core::PlaygroundId;
use pgr_storage::ActionStore;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Lifecycle of a [`ReplayEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReplayState {
    Idle = 0,
    Loading = 1,
    Replaying = 2,
    /// Every record was visited; individual records may have failed
    Done = 3,
    /// The snapshot could not be loaded
    Failed = 4,
}

impl ReplayState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ReplayState::Idle,
            1 => ReplayState::Loading,
            2 => ReplayState::Replaying,
            3 => ReplayState::Done,
            _ => ReplayState::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ReplayState::Done | ReplayState::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    Completed(ReplayReport),
    /// Another call already started this engine; nothing was done
    AlreadyTriggered,
}

/// Rebuilds one playground's state by re-applying its log
///
/// Runs at most once per instance; create a new engine for each
/// activation.
pub struct ReplayEngine<S, A: EvmAdapter> {
    playground_id: PlaygroundId,
    recorder: ActionRecorder<S>,
    registry: Arc<ActionRegistry<A>>,
    adapter: A,
    state: AtomicU8,
}

impl<S: ActionStore, A: EvmAdapter> ReplayEngine<S, A> {
    pub fn new(
        playground_id: PlaygroundId,
        recorder: ActionRecorder<S>,
        registry: Arc<ActionRegistry<A>>,
        adapter: A,
    ) -> Self {
        Self {
            playground_id,
            recorder,
            registry,
            adapter,
            state: AtomicU8::new(ReplayState::Idle as u8),
        }
    }

    pub fn playground_id(&self) -> PlaygroundId {
        self.playground_id
    }

    pub fn state(&self) -> ReplayState {
        ReplayState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, state: ReplayState) {
        self.state.store(state as u8, Ordering::Release);
    }

    /// Load the snapshot and apply every record in sequence order
    pub async fn run(&self) -> Result<ReplayOutcome, SnapshotLoadError> {
        // Idle -> Loading happens exactly once
        if self
            .state
            .compare_exchange(
                ReplayState::Idle as u8,
                ReplayState::Loading as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            tracing::debug!(
                playground_id = %self.playground_id,
                state = ?self.state(),
                "replay already triggered"
            );
            return Ok(ReplayOutcome::AlreadyTriggered);
        }

        let scope = ReplayScope::Playground(self.playground_id);
        let records = match self.recorder.load_snapshot(self.playground_id).await {
            Ok(records) => records,
            Err(source) => {
                self.set_state(ReplayState::Failed);
                tracing::error!(
                    playground_id = %self.playground_id,
                    error = %source,
                    "snapshot load failed"
                );
                return Err(SnapshotLoadError { scope, source });
            }
        };

        self.set_state(ReplayState::Replaying);
        let bound: Vec<_> = records
            .into_iter()
            .map(|record| self.registry.bind(record))
            .collect();
        let report = apply_all(scope, &bound, &self.adapter).await;
        self.set_state(ReplayState::Done);

        Ok(ReplayOutcome::Completed(report))
    }
}

/// Replay every playground's log in unified order
pub async fn replay_unified<S: ActionStore, A: EvmAdapter>(
    recorder: &ActionRecorder<S>,
    registry: &ActionRegistry<A>,
    adapter: &A,
) -> Result<ReplayReport, SnapshotLoadError> {
    let bound = recorder
        .load_unified_snapshot(registry)
        .await
        .map_err(|source| {
            tracing::error!(error = %source, "unified snapshot load failed");
            SnapshotLoadError {
                scope: ReplayScope::Unified,
                source,
            }
        })?;

    Ok(apply_all(ReplayScope::Unified, &bound, adapter).await)
}

async fn apply_all<A: EvmAdapter>(
    scope: ReplayScope,
    actions: &[BoundAction<A>],
    adapter: &A,
) -> ReplayReport {
    let span = tracing::info_span!("replay", %scope);
    async move {
        tracing::info!(total = actions.len(), "starting");
        let start = Instant::now();

        let mut report = ReplayReport::new(scope);
        report.total = actions.len();

        for action in actions {
            let record = &action.record;
            match action.run(adapter).await {
                Ok(_) => report.applied += 1,
                Err(err) => {
                    let kind = FailureKind::from(&err);
                    log_failure(record.playground_id, record.sequence, &record.tag, &err);
                    report.failures.push(ReplayFailure {
                        playground_id: record.playground_id,
                        sequence: record.sequence,
                        action_type: record.tag.clone(),
                        kind,
                        message: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            applied = report.applied,
            failed = report.failures.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "replay done"
        );
        report
    }
    .instrument(span)
    .await
}

fn log_failure(playground_id: PlaygroundId, sequence: u64, tag: &str, err: &ActionError) {
    match err {
        // A registry/version mismatch, never expected for persisted records
        ActionError::UnknownType(_) => tracing::error!(
            playground_id = %playground_id,
            sequence,
            action_type = tag,
            error = %err,
            "no executor for record, skipping"
        ),
        ActionError::Decode(_) | ActionError::Execution(_) => tracing::warn!(
            playground_id = %playground_id,
            sequence,
            action_type = tag,
            error = %err,
            "record failed to apply, skipping"
        ),
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
