// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pgr - playground action log and replay CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{account, clear, contract, replay, snapshot, Context};
use pgr_core::ACTIONS_TABLE;
use pgr_storage::{ClearControl, ResetOutcome};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "pgr",
    version,
    about = "Playground recorder - record, inspect and replay playground actions"
)]
struct Cli {
    /// Directory holding the action log (default: platform data dir)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account actions
    Account(account::AccountArgs),
    /// Contract actions
    Contract(contract::ContractArgs),
    /// Print a playground's ordered action log
    Snapshot(snapshot::SnapshotArgs),
    /// Rebuild state from the log
    Replay(replay::ReplayArgs),
    /// Clear logical tables and record a clear marker
    Clear(clear::ClearArgs),
    /// List clear markers
    Markers,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.state_dir)?;
    let _log_guard = logging::setup(&config)?;

    tracing::debug!(state_dir = %config.state_dir.display(), "starting");
    let ctx = Context::open(config, cli.format)?;
    reset_if_stale(&ctx).await?;

    match cli.command {
        Commands::Account(args) => account::handle(&ctx, args).await,
        Commands::Contract(args) => contract::handle(&ctx, args).await,
        Commands::Snapshot(args) => snapshot::handle(&ctx, args).await,
        Commands::Replay(args) => replay::handle(&ctx, args).await,
        Commands::Clear(args) => clear::handle(&ctx, args).await,
        Commands::Markers => commands::markers::handle(&ctx).await,
    }
}

/// Drop a log written under an older schema version
async fn reset_if_stale(ctx: &Context) -> Result<()> {
    let tables = BTreeSet::from([ACTIONS_TABLE.to_string()]);
    let control = ClearControl::new(ctx.store.clone());

    match control
        .reset_if_stale(ctx.config.schema_version, &tables)
        .await?
    {
        ResetOutcome::Reset(marker) => eprintln!(
            "warning: action log predates schema version {}; cleared (marker #{})",
            marker.version, marker.id
        ),
        ResetOutcome::Current | ResetOutcome::Stamped(_) => {}
    }
    Ok(())
}
