// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writer-side API over an action store

use crate::error::RecordError;
use crate::registry::{ActionRegistry, BoundAction};
use chrono::{DateTime, Utc};
use pgr_adapters::EvmAdapter;
use pgr_core::{Action, ActionRecord, ActionType, PlaygroundId};
use pgr_storage::{ActionStore, StoreError};
use serde_json::Value;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Records actions for the bound playground and reads logs back
///
/// Clones share the binding.
#[derive(Clone)]
pub struct ActionRecorder<S> {
    store: S,
    bound: Arc<Mutex<Option<PlaygroundId>>>,
}

impl<S: ActionStore> ActionRecorder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            bound: Arc::new(Mutex::new(None)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bind subsequent `record()` calls to a playground
    ///
    /// Returns false when the recorder was already bound to `id`.
    pub fn set_playground_id(&self, id: PlaygroundId) -> bool {
        let mut bound = self.bound.lock().unwrap_or_else(|e| e.into_inner());
        if *bound == Some(id) {
            return false;
        }
        tracing::debug!(playground_id = %id, previous = ?*bound, "recorder bound");
        *bound = Some(id);
        true
    }

    pub fn current_playground_id(&self) -> Option<PlaygroundId> {
        *self.bound.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an action for the bound playground
    ///
    /// The playground is captured when this is called, so rebinding while
    /// the write is in flight does not redirect it.
    pub fn record(
        &self,
        action_type: ActionType,
        payload: Value,
    ) -> impl Future<Output = Result<ActionRecord, RecordError>> + Send + '_ {
        let bound = self.current_playground_id();
        async move {
            let playground_id = bound.ok_or(RecordError::Unbound)?;
            self.record_for(playground_id, action_type, payload).await
        }
    }

    /// Append an action for a playground captured earlier by the caller
    pub(crate) async fn record_for(
        &self,
        playground_id: PlaygroundId,
        action_type: ActionType,
        payload: Value,
    ) -> Result<ActionRecord, RecordError> {
        let record = self
            .store
            .append(playground_id, action_type, payload)
            .await
            .map_err(|e| {
                tracing::error!(
                    playground_id = %playground_id,
                    action_type = %action_type,
                    error = %e,
                    "record failed"
                );
                e
            })?;
        tracing::debug!(
            playground_id = %playground_id,
            sequence = record.sequence,
            action_type = %action_type,
            "recorded"
        );
        Ok(record)
    }

    /// Append a typed action for the bound playground
    pub fn record_action(
        &self,
        action: &Action,
    ) -> impl Future<Output = Result<ActionRecord, RecordError>> + Send + '_ {
        self.record(action.action_type(), action.encode())
    }

    /// Every record for a playground, oldest first
    pub async fn load_snapshot(
        &self,
        playground_id: PlaygroundId,
    ) -> Result<Vec<ActionRecord>, StoreError> {
        self.store.list_ordered(playground_id).await
    }

    /// Every record across all playgrounds, each bound to its executor
    ///
    /// Playground logs are merged by `recorded_at`, ties broken by
    /// playground id and then sequence. Each playground's own sequence
    /// order is always preserved.
    pub async fn load_unified_snapshot<A: EvmAdapter>(
        &self,
        registry: &ActionRegistry<A>,
    ) -> Result<Vec<BoundAction<A>>, StoreError> {
        let mut logs = Vec::new();
        for playground_id in self.store.playgrounds().await? {
            logs.push(VecDeque::from(self.store.list_ordered(playground_id).await?));
        }

        Ok(merge_logs(logs)
            .into_iter()
            .map(|record| registry.bind(record))
            .collect())
    }
}

type MergeKey = Reverse<(DateTime<Utc>, PlaygroundId, u64, usize)>;

fn merge_key(record: &ActionRecord, log: usize) -> MergeKey {
    Reverse((
        record.recorded_at,
        record.playground_id,
        record.sequence,
        log,
    ))
}

/// K-way merge of per-playground logs, taking only each log's head
fn merge_logs(mut logs: Vec<VecDeque<ActionRecord>>) -> Vec<ActionRecord> {
    let mut heap: BinaryHeap<MergeKey> = logs
        .iter()
        .enumerate()
        .filter_map(|(i, log)| log.front().map(|r| merge_key(r, i)))
        .collect();

    let mut merged = Vec::with_capacity(logs.iter().map(VecDeque::len).sum());
    while let Some(Reverse((_, _, _, i))) = heap.pop() {
        let Some(record) = logs[i].pop_front() else {
            continue;
        };
        merged.push(record);
        if let Some(next) = logs[i].front() {
            heap.push(merge_key(next, i));
        }
    }
    merged
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
