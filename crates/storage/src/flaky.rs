// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store wrapper with switchable failures for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::store::{ActionStore, ClearOutcome, StoreError};
use async_trait::async_trait;
use pgr_core::{ActionRecord, ActionType, ClearMarker, PlaygroundId};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Switches {
    fail_appends: AtomicBool,
    fail_reads: AtomicBool,
    fail_clears: AtomicBool,
    fail_markers: AtomicBool,
    list_calls: AtomicUsize,
}

/// Wraps any store and fails the selected operations on demand
#[derive(Clone)]
pub struct FlakyStore<S> {
    inner: S,
    switches: Arc<Switches>,
}

impl<S> FlakyStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            switches: Arc::new(Switches::default()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn fail_appends(&self, fail: bool) {
        self.switches.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Fails `list_ordered`, `playgrounds` and `clear_markers`
    pub fn fail_reads(&self, fail: bool) {
        self.switches.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// `clear` wipes nothing and reports an error
    pub fn fail_clears(&self, fail: bool) {
        self.switches.fail_clears.store(fail, Ordering::SeqCst);
    }

    pub fn fail_markers(&self, fail: bool) {
        self.switches.fail_markers.store(fail, Ordering::SeqCst);
    }

    /// Number of `list_ordered` calls made so far
    pub fn list_calls(&self) -> usize {
        self.switches.list_calls.load(Ordering::SeqCst)
    }

    fn check(&self, switch: &AtomicBool, op: &str) -> Result<(), StoreError> {
        if switch.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("injected {} failure", op)));
        }
        Ok(())
    }
}

#[async_trait]
impl<S: ActionStore> ActionStore for FlakyStore<S> {
    async fn append(
        &self,
        playground_id: PlaygroundId,
        action_type: ActionType,
        payload: Value,
    ) -> Result<ActionRecord, StoreError> {
        self.check(&self.switches.fail_appends, "append")?;
        self.inner.append(playground_id, action_type, payload).await
    }

    async fn list_ordered(
        &self,
        playground_id: PlaygroundId,
    ) -> Result<Vec<ActionRecord>, StoreError> {
        self.switches.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&self.switches.fail_reads, "read")?;
        self.inner.list_ordered(playground_id).await
    }

    async fn playgrounds(&self) -> Result<Vec<PlaygroundId>, StoreError> {
        self.check(&self.switches.fail_reads, "read")?;
        self.inner.playgrounds().await
    }

    async fn clear(&self, tables: &BTreeSet<String>) -> ClearOutcome {
        if let Err(e) = self.check(&self.switches.fail_clears, "clear") {
            return ClearOutcome {
                cleared: BTreeSet::new(),
                error: Some(e),
            };
        }
        self.inner.clear(tables).await
    }

    async fn record_clear_marker(
        &self,
        tables: &BTreeSet<String>,
        version: u32,
    ) -> Result<ClearMarker, StoreError> {
        self.check(&self.switches.fail_markers, "marker")?;
        self.inner.record_clear_marker(tables, version).await
    }

    async fn clear_markers(&self) -> Result<Vec<ClearMarker>, StoreError> {
        self.check(&self.switches.fail_reads, "read")?;
        self.inner.clear_markers().await
    }
}
