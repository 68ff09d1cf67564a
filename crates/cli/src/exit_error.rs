// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

/// A run finished with at least one failing task or check.
pub const EXIT_RUN_FAILED: i32 = gt_core::EXIT_FAILURE;

/// Bad arguments or an unusable manifest.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl fmt::Display) -> Self {
        Self::new(EXIT_USAGE, message.to_string())
    }

    pub fn run_failed(message: impl Into<String>) -> Self {
        Self::new(EXIT_RUN_FAILED, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned from a command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExitError>() {
        Some(exit) => exit.code,
        None => EXIT_USAGE,
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
