// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wipe logical tables and record a clear marker

use super::Context;
use crate::output;
use clap::Args;
use pgr_core::{ClearMarker, ACTIONS_TABLE};
use pgr_storage::{ClearControl, ClearError};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Args)]
pub struct ClearArgs {
    /// Table to clear; repeatable
    #[arg(long = "table", default_value = ACTIONS_TABLE)]
    pub tables: Vec<String>,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct MarkerLine(pub ClearMarker);

impl fmt::Display for MarkerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        let tables: Vec<&str> = m.tables_cleared.iter().map(String::as_str).collect();
        write!(
            f,
            "#{:<3} v{:<3} {}  [{}]",
            m.id,
            m.version,
            m.cleared_at.format("%Y-%m-%dT%H:%M:%SZ"),
            tables.join(", ")
        )
    }
}

pub async fn handle(ctx: &Context, args: ClearArgs) -> anyhow::Result<()> {
    let requested: BTreeSet<String> = args.tables.into_iter().collect();
    let control = ClearControl::new(ctx.store.clone());

    match control.clear(&requested, ctx.config.schema_version).await {
        Ok(marker) => {
            for table in requested.iter().filter(|t| !marker.cleared(t)) {
                tracing::warn!(table = %table, "table not cleared");
            }
            output::print(&MarkerLine(marker), ctx.format);
            Ok(())
        }
        Err(ClearError::Partial { marker, source }) => {
            output::print(&MarkerLine(marker), ctx.format);
            Err(source.into())
        }
        Err(e) => Err(e.into()),
    }
}
