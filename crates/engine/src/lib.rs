// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Playground action recording and replay engine

mod error;
mod executors;
mod recorder;
mod registry;
mod replay;
mod report;
mod session;

pub use error::{ActionError, PerformError, RecordError, SnapshotLoadError};
pub use executors::{apply, StandardExecutor};
pub use recorder::ActionRecorder;
pub use registry::{ActionExecutor, ActionRegistry, BoundAction};
pub use replay::{replay_unified, ReplayEngine, ReplayOutcome, ReplayState};
pub use report::{FailureKind, ReplayFailure, ReplayReport, ReplayScope};
pub use session::{Performed, PlaygroundSession};
