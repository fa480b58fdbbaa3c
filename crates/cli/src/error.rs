// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use pgr_core::PlaygroundId;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// The action log could not be opened.
    pub fn store_unavailable<E>(state_dir: &Path, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CliError::new(format!("Failed to open action log in {}", state_dir.display()))
            .with_context(source.to_string())
            .with_context("Another process may have the log open, or the directory is not writable")
            .with_suggestion("Check permissions on the state directory")
            .with_suggestion("Use a different directory: pgr --state-dir <DIR> ...")
            .with_source(source)
    }

    /// The snapshot for a replay could not be read.
    pub fn snapshot_unavailable<E>(scope: impl fmt::Display, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CliError::new(format!("Failed to load {} snapshot", scope))
            .with_context(source.to_string())
            .with_context("No actions were replayed")
            .with_suggestion("Inspect the raw log: pgr snapshot <PLAYGROUND>")
            .with_source(source)
    }

    /// A live action was rejected by the environment.
    pub fn action_rejected<E>(playground_id: PlaygroundId, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CliError::new(format!("Action rejected in playground {}", playground_id))
            .with_context(source.to_string())
            .with_context("Nothing was recorded")
            .with_suggestion(format!(
                "Check current state: pgr replay {}",
                playground_id
            ))
            .with_source(source)
    }

    /// A live action was applied but could not be saved.
    pub fn not_recorded<E>(playground_id: PlaygroundId, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CliError::new(format!(
            "Action in playground {} was not recorded",
            playground_id
        ))
        .with_context(source.to_string())
        .with_context("The change will not be present the next time the playground is replayed")
        .with_suggestion("Retry the command once the state directory is writable")
        .with_source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_action_rejected_error() {
        let source = std::io::Error::other("insufficient balance");
        let err = CliError::action_rejected(PlaygroundId(7), source);
        let output = format!("{}", err);
        assert!(output.contains("playground 7"));
        assert!(output.contains("insufficient balance"));
        assert!(output.contains("Nothing was recorded"));
        assert!(output.contains("pgr replay 7"));
    }
}
