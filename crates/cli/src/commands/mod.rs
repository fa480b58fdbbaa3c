// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod account;
pub mod clear;
pub mod contract;
pub mod markers;
pub mod replay;
pub mod snapshot;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use pgr_adapters::{SimAdapter, TracedEvmAdapter};
use pgr_core::{Action, PlaygroundId};
use pgr_engine::{ActionRegistry, PerformError, PlaygroundSession, ReplayOutcome, ReplayReport};
use pgr_storage::WalStore;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Adapter used by every command; state is rebuilt from the log on each run
pub type Adapter = TracedEvmAdapter<SimAdapter>;

/// Shared handles for one CLI invocation
pub struct Context {
    pub config: Config,
    pub store: WalStore,
    pub format: OutputFormat,
    registry: Arc<ActionRegistry<Adapter>>,
}

impl Context {
    pub fn open(config: Config, format: OutputFormat) -> Result<Self> {
        let store = WalStore::open(&config.state_dir)
            .map_err(|e| CliError::store_unavailable(&config.state_dir, e))?;
        Ok(Self {
            config,
            store,
            format,
            registry: Arc::new(ActionRegistry::standard()),
        })
    }

    pub fn registry(&self) -> &ActionRegistry<Adapter> {
        &self.registry
    }

    /// A session over a fresh, empty environment
    pub fn session(&self) -> PlaygroundSession<WalStore, Adapter> {
        PlaygroundSession::new(
            self.store.clone(),
            Arc::clone(&self.registry),
            TracedEvmAdapter::new(SimAdapter::new()),
        )
    }

    /// Activate a playground in a new session, rebuilding its state
    pub async fn activate(
        &self,
        playground_id: PlaygroundId,
    ) -> Result<(PlaygroundSession<WalStore, Adapter>, ReplayReport)> {
        let session = self.session();
        let outcome = session
            .activate(playground_id)
            .await
            .map_err(|e| CliError::snapshot_unavailable(e.scope, e))?;

        match outcome {
            ReplayOutcome::Completed(report) => {
                if !report.is_clean() {
                    tracing::warn!(
                        playground_id = %playground_id,
                        failed = report.failures.len(),
                        "some recorded actions could not be replayed"
                    );
                }
                Ok((session, report))
            }
            // A fresh session's engine has never run
            ReplayOutcome::AlreadyTriggered => {
                Err(anyhow::anyhow!("replay of playground {playground_id} already running"))
            }
        }
    }

    /// Replay a playground, then apply and record a live action
    pub async fn perform(&self, playground_id: PlaygroundId, action: Action) -> Result<()> {
        let (session, _) = self.activate(playground_id).await?;

        let performed = session.perform(&action).await.map_err(|e| match e {
            PerformError::Action(e) => CliError::action_rejected(playground_id, e),
            PerformError::Record(e) => CliError::not_recorded(playground_id, e),
        })?;

        let view = Recorded {
            playground_id,
            sequence: performed.record.sequence,
            action_type: performed.record.tag,
            output: performed.output.data,
        };
        output::print(&view, self.format);
        Ok(())
    }
}

/// A live action that was applied and recorded
#[derive(Serialize)]
struct Recorded {
    playground_id: PlaygroundId,
    sequence: u64,
    action_type: String,
    output: Option<Value>,
}

impl fmt::Display for Recorded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recorded {} #{} in playground {}",
            self.action_type, self.sequence, self.playground_id
        )?;
        if let Some(output) = &self.output {
            write!(f, "\n  {}", output)?;
        }
        Ok(())
    }
}

/// Parse a JSON argument, falling back to a plain string
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
