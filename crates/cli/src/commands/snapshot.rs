// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Print a playground's ordered action log

use super::Context;
use crate::output;
use clap::Args;
use pgr_core::{ActionRecord, PlaygroundId};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct SnapshotArgs {
    pub playground: PlaygroundId,
}

#[derive(Serialize)]
#[serde(transparent)]
struct RecordLine(ActionRecord);

impl fmt::Display for RecordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.0;
        write!(
            f,
            "{:>4}  {:<17} {}  {}",
            r.sequence,
            r.tag,
            r.recorded_at.format("%Y-%m-%dT%H:%M:%SZ"),
            r.payload
        )
    }
}

pub async fn handle(ctx: &Context, args: SnapshotArgs) -> anyhow::Result<()> {
    let records = ctx
        .session()
        .recorder()
        .load_snapshot(args.playground)
        .await?;

    let lines: Vec<_> = records.into_iter().map(RecordLine).collect();
    output::print_list(
        &lines,
        ctx.format,
        &format!("No actions recorded for playground {}", args.playground),
    );
    Ok(())
}
