// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuild state from the log and show it

use super::{Adapter, Context};
use crate::error::CliError;
use crate::output;
use anyhow::bail;
use clap::Args;
use pgr_adapters::{Account, Contract, SimAdapter, TracedEvmAdapter};
use pgr_core::PlaygroundId;
use pgr_engine::{replay_unified, ReplayReport};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ReplayArgs {
    /// Playground to replay
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub playground: Option<PlaygroundId>,
    /// Replay every playground in recorded order
    #[arg(long)]
    pub all: bool,
}

#[derive(Serialize)]
struct ReplayView {
    report: ReplayReport,
    accounts: Vec<Account>,
    contracts: Vec<Contract>,
}

impl fmt::Display for ReplayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.report;
        writeln!(
            f,
            "Replayed {}: {} of {} actions applied",
            report.scope, report.applied, report.total
        )?;
        for failure in &report.failures {
            writeln!(
                f,
                "  failed #{} {} (playground {}): {}",
                failure.sequence, failure.action_type, failure.playground_id, failure.message
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Accounts:")?;
        if self.accounts.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for account in &self.accounts {
            write!(f, "  {}  balance {}", account.address, account.balance)?;
            if let Some(label) = &account.label {
                write!(f, "  ({})", label)?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        write!(f, "Contracts:")?;
        if self.contracts.is_empty() {
            write!(f, "\n  (none)")?;
        }
        for contract in &self.contracts {
            write!(
                f,
                "\n  {}  {}  deployer {}  balance {}  calls {}",
                contract.address,
                contract.name.as_deref().unwrap_or("-"),
                contract.deployer,
                contract.balance,
                contract.calls.len()
            )?;
        }
        Ok(())
    }
}

pub async fn handle(ctx: &Context, args: ReplayArgs) -> anyhow::Result<()> {
    let view = match (args.playground, args.all) {
        (_, true) => replay_all(ctx).await?,
        (Some(playground_id), false) => replay_one(ctx, playground_id).await?,
        (None, false) => bail!("a playground id or --all is required"),
    };
    output::print(&view, ctx.format);
    Ok(())
}

async fn replay_one(ctx: &Context, playground_id: PlaygroundId) -> anyhow::Result<ReplayView> {
    let (session, report) = ctx.activate(playground_id).await?;
    let env = session.adapter().inner().snapshot();

    Ok(ReplayView {
        report,
        accounts: env.accounts_in(playground_id).into_iter().cloned().collect(),
        contracts: env.contracts_in(playground_id).into_iter().cloned().collect(),
    })
}

async fn replay_all(ctx: &Context) -> anyhow::Result<ReplayView> {
    let session = ctx.session();
    let adapter: Adapter = TracedEvmAdapter::new(SimAdapter::new());
    let report = replay_unified(session.recorder(), ctx.registry(), &adapter)
        .await
        .map_err(|e| CliError::snapshot_unavailable(e.scope, e))?;
    let env = adapter.inner().snapshot();

    Ok(ReplayView {
        report,
        accounts: env.accounts.into_values().collect(),
        contracts: env.contracts.into_values().collect(),
    })
}
