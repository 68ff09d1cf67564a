// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured execution output.

use gt_core::CommandResult;
use std::time::Duration;

/// Outcome of running one script to completion.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code returned by the shell (`-1` if killed by a signal).
    pub exit_code: i32,
    /// Wall-clock duration.
    pub duration: Duration,
    /// First N bytes of captured stdout (only in capture mode).
    pub stdout_snippet: Option<String>,
    /// First N bytes of captured stderr (only in capture mode).
    pub stderr_snippet: Option<String>,
}

impl CommandOutput {
    pub fn result(&self) -> CommandResult {
        CommandResult::new(self.exit_code)
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
