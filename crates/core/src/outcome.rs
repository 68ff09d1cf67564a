// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command results and the aggregate outcome of a check task.
//!
//! A check task runs every check to completion and only then decides
//! whether it passed. [`StepOutcome`] holds the full list of results so the
//! decision is a fold over all of them, never an early return.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exit code recorded when a command could not be spawned at all.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code recorded when a process ended without one (killed by a signal).
pub const EXIT_NO_CODE: i32 = -1;

/// Exit status reported for a failed step or run.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code of one external command run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    pub fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn success() -> Self {
        Self::new(0)
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<i32> for CommandResult {
    fn from(exit_code: i32) -> Self {
        Self::new(exit_code)
    }
}

/// Result of one named check within a check task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub exit_code: i32,
    #[serde(rename = "duration_ms", with = "duration_ms")]
    pub duration: Duration,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, result: CommandResult, duration: Duration) -> Self {
        Self {
            name: name.into(),
            exit_code: result.exit_code,
            duration,
        }
    }

    pub fn result(&self) -> CommandResult {
        CommandResult::new(self.exit_code)
    }

    pub fn is_success(&self) -> bool {
        self.result().is_success()
    }
}

crate::builder! {
    pub struct CheckResultBuilder => CheckResult {
        into { name: String = "check" }
        set {
            exit_code: i32 = 0,
            duration: Duration = Duration::ZERO,
        }
    }
}

/// Aggregate outcome of a check task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub checks: Vec<CheckResult>,
}

impl StepOutcome {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        Self { checks }
    }

    pub fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// True only if every recorded check exited zero.
    pub fn is_success(&self) -> bool {
        aggregate(self.checks.iter().map(CheckResult::result)).is_success()
    }

    /// The step's own exit status: 0 on success, [`EXIT_FAILURE`] otherwise.
    pub fn exit_code(&self) -> i32 {
        aggregate(self.checks.iter().map(CheckResult::result)).exit_code
    }

    /// Checks that exited non-zero, in execution order.
    pub fn failed(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.is_success()).collect()
    }

    pub fn total_duration(&self) -> Duration {
        self.checks.iter().map(|c| c.duration).sum()
    }
}

/// Fold a set of command results into one.
///
/// Succeeds iff every input succeeded; any non-zero code yields
/// [`EXIT_FAILURE`]. An empty set succeeds.
pub fn aggregate(results: impl IntoIterator<Item = CommandResult>) -> CommandResult {
    let failed = results.into_iter().fold(false, |acc, r| acc | !r.is_success());
    if failed {
        CommandResult::new(EXIT_FAILURE)
    } else {
        CommandResult::success()
    }
}

/// Final status of one task in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Passed,
    Failed,
    /// Not run because an earlier task failed.
    Skipped,
}

impl TaskStatus {
    pub fn from_result(result: CommandResult) -> Self {
        if result.is_success() {
            TaskStatus::Passed
        } else {
            TaskStatus::Failed
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TaskStatus::Failed)
    }
}

crate::simple_display! {
    TaskStatus {
        Passed => "passed",
        Failed => "failed",
        Skipped => "skipped",
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
