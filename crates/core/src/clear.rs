// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clear-control markers
//!
//! A marker is written once per clear operation and names every logical
//! table that operation actually wiped. Markers are never removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Logical table holding the action log
pub const ACTIONS_TABLE: &str = "actions";

/// Version stamp for the current action log layout
pub const LOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearMarker {
    pub id: u64,
    pub version: u32,
    pub cleared_at: DateTime<Utc>,
    pub tables_cleared: BTreeSet<String>,
}

impl ClearMarker {
    pub fn cleared(&self, table: &str) -> bool {
        self.tables_cleared.contains(table)
    }
}
