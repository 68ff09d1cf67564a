// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable record of a finished run.

use std::time::Duration;

use gt_core::{aggregate, CheckResult, CommandResult, TaskStatus};
use serde::{Deserialize, Serialize};

/// Outcome of one planned task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    pub name: String,
    /// `shell` or `checks`
    pub kind: String,
    pub status: TaskStatus,
    /// Absent for skipped tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckResult>,
}

impl TaskReport {
    pub fn finished(name: &str, kind: &str, result: CommandResult, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            status: TaskStatus::from_result(result),
            exit_code: Some(result.exit_code),
            duration_ms: duration.as_millis() as u64,
            checks: Vec::new(),
        }
    }

    pub fn skipped(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            status: TaskStatus::Skipped,
            exit_code: None,
            duration_ms: 0,
            checks: Vec::new(),
        }
    }

    pub fn result(&self) -> Option<CommandResult> {
        self.exit_code.map(CommandResult::new)
    }
}

/// Everything a run produced, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Declared packages not found on `PATH`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_packages: Vec<String>,
    pub tasks: Vec<TaskReport>,
    /// 0 when every task passed, 1 otherwise.
    pub exit_code: i32,
    pub duration_ms: u64,
}

impl RunReport {
    /// Aggregate exit code over task results and the package check.
    pub fn compute_exit_code(tasks: &[TaskReport], missing_packages: &[String]) -> i32 {
        let packages = if missing_packages.is_empty() {
            CommandResult::success()
        } else {
            CommandResult::new(gt_core::EXIT_FAILURE)
        };
        let tasks = tasks.iter().filter_map(TaskReport::result);
        aggregate(std::iter::once(packages).chain(tasks)).exit_code
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn failed_tasks(&self) -> impl Iterator<Item = &TaskReport> {
        self.tasks.iter().filter(|t| t.status.is_failed())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
