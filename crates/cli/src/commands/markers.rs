// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List clear-control markers

use super::clear::MarkerLine;
use super::Context;
use crate::output;
use pgr_storage::ActionStore;

pub async fn handle(ctx: &Context) -> anyhow::Result<()> {
    let markers: Vec<_> = ctx
        .store
        .clear_markers()
        .await?
        .into_iter()
        .map(MarkerLine)
        .collect();

    output::print_list(&markers, ctx.format, "No clear markers");
    Ok(())
}
