// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The action store contract

use async_trait::async_trait;
use pgr_core::{ActionRecord, ActionType, ClearMarker, PlaygroundId};
use serde_json::Value;
use std::collections::BTreeSet;
use std::io;
use thiserror::Error;

/// Errors from store reads and writes
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupted {file} at line {line}: {reason}")]
    Corrupted {
        file: &'static str,
        line: u64,
        reason: String,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A failed write could not be rolled back; reopen to recover
    #[error("{0} has an unrecoverable partial write; reopen the store")]
    Unwritable(&'static str),
}

/// Result of a clear: what was actually wiped, and the failure that
/// stopped it, if any
#[derive(Debug, Default)]
pub struct ClearOutcome {
    pub cleared: BTreeSet<String>,
    pub error: Option<StoreError>,
}

/// Ordered, append-only storage for action logs, partitioned by playground
#[async_trait]
pub trait ActionStore: Clone + Send + Sync + 'static {
    /// Append a record, assigning the next sequence number for the playground
    async fn append(
        &self,
        playground_id: PlaygroundId,
        action_type: ActionType,
        payload: Value,
    ) -> Result<ActionRecord, StoreError>;

    /// All records for a playground in sequence order; empty if none
    async fn list_ordered(
        &self,
        playground_id: PlaygroundId,
    ) -> Result<Vec<ActionRecord>, StoreError>;

    /// Every playground with at least one record, ascending
    async fn playgrounds(&self) -> Result<Vec<PlaygroundId>, StoreError>;

    /// Wipe the named logical tables; tables the store does not own are
    /// left out of [`ClearOutcome::cleared`]
    async fn clear(&self, tables: &BTreeSet<String>) -> ClearOutcome;

    /// Append a clear-control row
    async fn record_clear_marker(
        &self,
        tables: &BTreeSet<String>,
        version: u32,
    ) -> Result<ClearMarker, StoreError>;

    /// All clear-control rows, oldest first
    async fn clear_markers(&self) -> Result<Vec<ClearMarker>, StoreError>;
}
