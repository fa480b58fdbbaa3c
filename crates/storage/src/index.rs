// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory index of action logs shared by the store implementations

use pgr_core::{ActionRecord, PlaygroundId};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub(crate) struct LogIndex {
    logs: BTreeMap<PlaygroundId, Vec<ActionRecord>>,
}

impl LogIndex {
    /// Sequence numbers start at 1 and follow the last stored record
    pub fn next_sequence(&self, playground_id: PlaygroundId) -> u64 {
        self.logs
            .get(&playground_id)
            .and_then(|log| log.last())
            .map(|record| record.sequence + 1)
            .unwrap_or(1)
    }

    /// Insert a record whose sequence is above every stored one
    pub fn push(&mut self, record: ActionRecord) {
        self.logs
            .entry(record.playground_id)
            .or_default()
            .push(record);
    }

    pub fn list(&self, playground_id: PlaygroundId) -> Vec<ActionRecord> {
        self.logs.get(&playground_id).cloned().unwrap_or_default()
    }

    pub fn playgrounds(&self) -> Vec<PlaygroundId> {
        self.logs
            .iter()
            .filter(|(_, log)| !log.is_empty())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }
}
