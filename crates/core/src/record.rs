// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted action records

use crate::action::{Action, ActionType, PayloadDecodeError, UnknownActionType};
use crate::playground::PlaygroundId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a stored record could not be turned back into an [`Action`]
#[derive(Debug, Error)]
pub enum RecordDecodeError {
    #[error(transparent)]
    UnknownType(#[from] UnknownActionType),
    #[error(transparent)]
    Payload(#[from] PayloadDecodeError),
}

/// One immutable entry of a playground's action log
///
/// The type tag is kept as written so that records from a newer or older
/// build still load; [`ActionRecord::action_type`] does the checked
/// conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub playground_id: PlaygroundId,
    /// Assigned by the store; strictly increasing within a playground
    pub sequence: u64,
    #[serde(rename = "type")]
    pub tag: String,
    pub payload: Value,
    /// Informational only, never used for ordering within a playground
    pub recorded_at: DateTime<Utc>,
}

impl ActionRecord {
    pub fn new(
        playground_id: PlaygroundId,
        sequence: u64,
        action_type: ActionType,
        payload: Value,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            playground_id,
            sequence,
            tag: action_type.as_str().to_string(),
            payload,
            recorded_at,
        }
    }

    pub fn action_type(&self) -> Result<ActionType, UnknownActionType> {
        self.tag.parse()
    }

    /// Decode into a typed action; fails on an unknown tag or a payload
    /// that does not match the tag's schema
    pub fn decode(&self) -> Result<Action, RecordDecodeError> {
        let action_type = self.action_type()?;
        Ok(Action::decode(action_type, &self.payload)?)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
