// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-local action store

use crate::index::LogIndex;
use crate::store::{ActionStore, ClearOutcome, StoreError};
use async_trait::async_trait;
use pgr_core::{
    ActionRecord, ActionType, ClearMarker, Clock, PlaygroundId, SystemClock, ACTIONS_TABLE,
};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryInner {
    index: LogIndex,
    markers: Vec<ClearMarker>,
}

/// Action store that lives only as long as the process
#[derive(Clone)]
pub struct MemoryStore<C: Clock = SystemClock> {
    inner: Arc<Mutex<MemoryInner>>,
    clock: C,
}

impl MemoryStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryInner::default())),
            clock,
        }
    }

    /// Total records across all playgrounds
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .index
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C: Clock> ActionStore for MemoryStore<C> {
    async fn append(
        &self,
        playground_id: PlaygroundId,
        action_type: ActionType,
        payload: Value,
    ) -> Result<ActionRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let sequence = inner.index.next_sequence(playground_id);
        let record = ActionRecord::new(
            playground_id,
            sequence,
            action_type,
            payload,
            self.clock.now(),
        );
        inner.index.push(record.clone());
        Ok(record)
    }

    async fn list_ordered(
        &self,
        playground_id: PlaygroundId,
    ) -> Result<Vec<ActionRecord>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.index.list(playground_id))
    }

    async fn playgrounds(&self) -> Result<Vec<PlaygroundId>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.index.playgrounds())
    }

    async fn clear(&self, tables: &BTreeSet<String>) -> ClearOutcome {
        let mut outcome = ClearOutcome::default();
        if tables.contains(ACTIONS_TABLE) {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.index.clear();
            outcome.cleared.insert(ACTIONS_TABLE.to_string());
        }
        outcome
    }

    async fn record_clear_marker(
        &self,
        tables: &BTreeSet<String>,
        version: u32,
    ) -> Result<ClearMarker, StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let marker = ClearMarker {
            id: inner.markers.len() as u64 + 1,
            version,
            cleared_at: self.clock.now(),
            tables_cleared: tables.clone(),
        };
        inner.markers.push(marker.clone());
        Ok(marker)
    }

    async fn clear_markers(&self) -> Result<Vec<ClearMarker>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.markers.clone())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
