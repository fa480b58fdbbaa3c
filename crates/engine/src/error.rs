// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for recording, executing and replaying actions

use crate::report::ReplayScope;
use pgr_adapters::AdapterError;
use pgr_core::{PayloadDecodeError, UnknownActionType};
use pgr_storage::StoreError;
use thiserror::Error;

/// A failed `record()`; the action must be treated as not saved
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("no playground is bound to the recorder")]
    Unbound,
    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

/// A single action that could not be applied
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Decode(#[from] PayloadDecodeError),
    #[error(transparent)]
    UnknownType(#[from] UnknownActionType),
    #[error("execution error: {0}")]
    Execution(#[from] AdapterError),
}

/// The ordered fetch of a snapshot failed; nothing was applied
#[derive(Debug, Error)]
#[error("failed to load {scope} snapshot: {source}")]
pub struct SnapshotLoadError {
    pub scope: ReplayScope,
    #[source]
    pub source: StoreError,
}

/// A failed live action
#[derive(Debug, Error)]
pub enum PerformError {
    /// Execution failed; nothing was recorded
    #[error("action failed: {0}")]
    Action(#[from] ActionError),
    /// Execution succeeded but the record was not saved
    #[error("action applied but not recorded: {0}")]
    Record(#[from] RecordError),
}
