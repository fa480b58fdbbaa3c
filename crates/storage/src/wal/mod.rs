// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log store for durable action logs
//!
//! A store directory holds two JSON-lines files:
//! - `actions.jsonl`: every action record, in append order
//! - `clear_control.jsonl`: one marker per clear operation
//!
//! Both are fully indexed in memory on open; every append is fsync'd
//! before it is acknowledged.

mod entry;
mod reader;

pub use entry::WalEntry;
pub use reader::{scan, Corruption, Scan};

use crate::index::LogIndex;
use crate::store::{ActionStore, ClearOutcome, StoreError};
use async_trait::async_trait;
use pgr_core::{
    ActionRecord, ActionType, ClearMarker, Clock, PlaygroundId, SystemClock, ACTIONS_TABLE,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const ACTIONS_FILE: &str = "actions.jsonl";
const MARKERS_FILE: &str = "clear_control.jsonl";

/// An append-only file plus its acknowledged length
struct LogFile {
    name: &'static str,
    file: File,
    len: u64,
    /// Set when a failed append could not be cut back
    broken: bool,
}

impl LogFile {
    fn open(dir: &Path, name: &'static str, valid_len: u64) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(name))?;
        // Drop anything past the last valid line (torn write or corruption)
        if file.metadata()?.len() != valid_len {
            file.set_len(valid_len)?;
            file.sync_all()?;
        }
        Ok(Self {
            name,
            file,
            len: valid_len,
            broken: false,
        })
    }

    /// Append one line durably; on failure the file is cut back so that
    /// no partial line is left behind
    fn append<T: Serialize>(&mut self, body: &T) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Unwritable(self.name));
        }

        let mut line = WalEntry::new(body)?.to_line()?;
        line.push('\n');

        let result = self
            .file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.sync_all());

        if let Err(e) = result {
            if let Err(rollback) = self.file.set_len(self.len) {
                tracing::warn!(
                    file = self.name,
                    len = self.len,
                    error = %rollback,
                    "could not cut back failed append, refusing further writes"
                );
                self.broken = true;
            }
            return Err(e.into());
        }

        self.len += line.len() as u64;
        Ok(())
    }

    fn truncate(&mut self) -> Result<(), StoreError> {
        self.file.set_len(0)?;
        self.file.sync_all()?;
        self.len = 0;
        self.broken = false;
        Ok(())
    }
}

struct WalInner {
    actions: LogFile,
    markers_file: LogFile,
    index: LogIndex,
    markers: Vec<ClearMarker>,
}

/// File-backed action store
#[derive(Clone)]
pub struct WalStore<C: Clock = SystemClock> {
    dir: PathBuf,
    inner: Arc<Mutex<WalInner>>,
    clock: C,
}

impl WalStore<SystemClock> {
    /// Open or create a store in the given directory
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        Self::open_with_clock(dir, SystemClock)
    }
}

impl<C: Clock> WalStore<C> {
    pub fn open_with_clock(dir: &Path, clock: C) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir)?;

        let actions_path = dir.join(ACTIONS_FILE);
        let mut last_sequence: BTreeMap<PlaygroundId, u64> = BTreeMap::new();
        let actions_scan = scan::<ActionRecord, _>(&actions_path, |record| {
            let last = last_sequence.entry(record.playground_id).or_insert(0);
            if record.sequence <= *last {
                return Err(format!(
                    "sequence {} for playground {} is not above {}",
                    record.sequence, record.playground_id, last
                ));
            }
            *last = record.sequence;
            Ok(())
        })?;
        if let Some(corruption) = &actions_scan.corruption {
            tracing::warn!(
                file = ACTIONS_FILE,
                line = corruption.line,
                reason = %corruption.reason,
                kept = actions_scan.bodies.len(),
                "truncating action log at first invalid line"
            );
        }

        let markers_path = dir.join(MARKERS_FILE);
        let markers_scan = scan::<ClearMarker, _>(&markers_path, |_| Ok(()))?;
        if let Some(corruption) = &markers_scan.corruption {
            tracing::warn!(
                file = MARKERS_FILE,
                line = corruption.line,
                reason = %corruption.reason,
                kept = markers_scan.bodies.len(),
                "truncating clear-control log at first invalid line"
            );
        }

        let mut index = LogIndex::default();
        for record in actions_scan.bodies {
            index.push(record);
        }

        let inner = WalInner {
            actions: LogFile::open(dir, ACTIONS_FILE, actions_scan.valid_len)?,
            markers_file: LogFile::open(dir, MARKERS_FILE, markers_scan.valid_len)?,
            index,
            markers: markers_scan.bodies,
        };

        tracing::debug!(
            dir = %dir.display(),
            records = inner.index.len(),
            markers = inner.markers.len(),
            "opened action store"
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            inner: Arc::new(Mutex::new(inner)),
            clock,
        })
    }

    /// Directory holding the log files
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl<C: Clock> ActionStore for WalStore<C> {
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

        inner.actions.append(&record)?;
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
            match inner.actions.truncate() {
                Ok(()) => {
                    inner.index.clear();
                    outcome.cleared.insert(ACTIONS_TABLE.to_string());
                }
                Err(e) => outcome.error = Some(e),
            }
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
            id: inner.markers.last().map(|m| m.id + 1).unwrap_or(1),
            version,
            cleared_at: self.clock.now(),
            tables_cleared: tables.clone(),
        };
        inner.markers_file.append(&marker)?;
        inner.markers.push(marker.clone());
        Ok(marker)
    }

    async fn clear_markers(&self) -> Result<Vec<ClearMarker>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.markers.clone())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
