// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration resolution
//!
//! The state directory comes from `--state-dir`, then `PGR_STATE_DIR`, then
//! the platform data directory. Other settings are read from an optional
//! `pgr.toml` inside the state directory.

use anyhow::{Context, Result};
use pgr_core::LOG_SCHEMA_VERSION;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const STATE_DIR_ENV: &str = "PGR_STATE_DIR";
pub const CONFIG_FILE: &str = "pgr.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    log_file: Option<PathBuf>,
    schema_version: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the action log and clear-control log
    pub state_dir: PathBuf,
    /// Log file for tracing output, resolved against `state_dir`
    pub log_file: Option<PathBuf>,
    /// Version stamped on clear markers; a lower logged version resets the log
    pub schema_version: u32,
}

impl Config {
    pub fn resolve(state_dir_flag: Option<PathBuf>) -> Result<Self> {
        let env_dir = std::env::var_os(STATE_DIR_ENV).map(PathBuf::from);
        let default_dir = dirs::data_local_dir().map(|d| d.join("pgr"));
        let state_dir = state_dir_flag
            .or(env_dir)
            .or(default_dir)
            .context("could not determine a state directory; pass --state-dir")?;

        Self::load(state_dir)
    }

    /// Build a config for `state_dir`, reading `pgr.toml` if present
    pub fn load(state_dir: PathBuf) -> Result<Self> {
        let file = read_file_config(&state_dir.join(CONFIG_FILE))?;

        Ok(Self {
            log_file: file.log_file.map(|p| state_dir.join(p)),
            schema_version: file.schema_version.unwrap_or(LOG_SCHEMA_VERSION),
            state_dir,
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
