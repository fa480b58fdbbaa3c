//! Behavioral specifications for the pgr CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes against a temporary state directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// actions/
#[path = "specs/actions/account.rs"]
mod actions_account;
#[path = "specs/actions/contract.rs"]
mod actions_contract;

// replay/
#[path = "specs/replay/playground.rs"]
mod replay_playground;
#[path = "specs/replay/unified.rs"]
mod replay_unified;

// clear/
#[path = "specs/clear/markers.rs"]
mod clear_markers;
