// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay results

use crate::error::ActionError;
use pgr_core::PlaygroundId;
use serde::Serialize;
use std::fmt;

/// What a replay covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayScope {
    Playground(PlaygroundId),
    Unified,
}

impl fmt::Display for ReplayScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayScope::Playground(id) => write!(f, "playground {id}"),
            ReplayScope::Unified => write!(f, "unified"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Decode,
    UnknownType,
    Execution,
}

impl From<&ActionError> for FailureKind {
    fn from(err: &ActionError) -> Self {
        match err {
            ActionError::Decode(_) => FailureKind::Decode,
            ActionError::UnknownType(_) => FailureKind::UnknownType,
            ActionError::Execution(_) => FailureKind::Execution,
        }
    }
}

/// One record that was skipped during replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayFailure {
    pub playground_id: PlaygroundId,
    pub sequence: u64,
    /// Raw tag as persisted
    pub action_type: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of a completed replay pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub scope: ReplayScope,
    pub total: usize,
    pub applied: usize,
    pub failures: Vec<ReplayFailure>,
}

impl ReplayReport {
    pub(crate) fn new(scope: ReplayScope) -> Self {
        Self {
            scope,
            total: 0,
            applied: 0,
            failures: Vec::new(),
        }
    }

    /// True when every record was applied
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
