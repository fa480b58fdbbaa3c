// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-stamped clear markers
//!
//! Every wipe of the action log is followed by exactly one marker naming
//! what was actually wiped. A marker at an older version than the running
//! build means the log predates the current layout.

use crate::store::{ActionStore, StoreError};
use pgr_core::ClearMarker;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClearError {
    /// The marker itself could not be written
    #[error("failed to record clear marker: {0}")]
    Marker(#[source] StoreError),
    /// Some tables could not be cleared; the marker names those that were
    #[error("clear partially failed (recorded marker {}): {source}", marker.id)]
    Partial {
        marker: ClearMarker,
        #[source]
        source: StoreError,
    },
    #[error("failed to read clear markers: {0}")]
    Read(#[source] StoreError),
}

/// Result of a version check against the clear-control log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The latest marker is at or above the requested version
    Current,
    /// Nothing was logged yet; a marker was written without clearing
    Stamped(ClearMarker),
    /// The log was stale and has been cleared
    Reset(ClearMarker),
}

/// Writer for clear-control markers
#[derive(Clone)]
pub struct ClearControl<S> {
    store: S,
}

impl<S: ActionStore> ClearControl<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record that `tables` were cleared under `version`
    pub async fn record_clear(
        &self,
        tables: &BTreeSet<String>,
        version: u32,
    ) -> Result<ClearMarker, StoreError> {
        let marker = self.store.record_clear_marker(tables, version).await?;
        tracing::info!(
            id = marker.id,
            version,
            tables = ?marker.tables_cleared,
            "recorded clear marker"
        );
        Ok(marker)
    }

    /// Clear tables, then record a marker for whatever was actually
    /// cleared, even when the clear failed part way
    pub async fn clear(
        &self,
        tables: &BTreeSet<String>,
        version: u32,
    ) -> Result<ClearMarker, ClearError> {
        let outcome = self.store.clear(tables).await;

        let skipped: Vec<_> = tables.difference(&outcome.cleared).collect();
        if !skipped.is_empty() && outcome.error.is_none() {
            tracing::debug!(?skipped, "tables not owned by the store were not cleared");
        }

        let marker = self
            .record_clear(&outcome.cleared, version)
            .await
            .map_err(ClearError::Marker)?;

        match outcome.error {
            Some(source) => {
                tracing::error!(error = %source, marker = marker.id, "clear partially failed");
                Err(ClearError::Partial { marker, source })
            }
            None => Ok(marker),
        }
    }

    /// The most recent marker, if any
    pub async fn latest(&self) -> Result<Option<ClearMarker>, StoreError> {
        Ok(self.store.clear_markers().await?.pop())
    }

    /// Clear `tables` if the log was written under an older version
    pub async fn reset_if_stale(
        &self,
        current_version: u32,
        tables: &BTreeSet<String>,
    ) -> Result<ResetOutcome, ClearError> {
        let latest = self.latest().await.map_err(ClearError::Read)?;

        match latest {
            Some(marker) if marker.version >= current_version => Ok(ResetOutcome::Current),
            Some(marker) => {
                tracing::warn!(
                    logged_version = marker.version,
                    current_version,
                    "action log is from an older version, clearing"
                );
                self.clear(tables, current_version)
                    .await
                    .map(ResetOutcome::Reset)
            }
            None => {
                let playgrounds = self.store.playgrounds().await.map_err(ClearError::Read)?;
                if playgrounds.is_empty() {
                    self.record_clear(&BTreeSet::new(), current_version)
                        .await
                        .map(ResetOutcome::Stamped)
                        .map_err(ClearError::Marker)
                } else {
                    tracing::warn!(
                        current_version,
                        playgrounds = playgrounds.len(),
                        "action log has no version marker, clearing"
                    );
                    self.clear(tables, current_version)
                        .await
                        .map(ResetOutcome::Reset)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "clear_control_tests.rs"]
mod tests;
