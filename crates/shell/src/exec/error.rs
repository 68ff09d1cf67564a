// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use std::path::PathBuf;

/// Errors that prevent a script from running to completion.
///
/// A script that runs and exits non-zero is not an error; its exit code is
/// reported in [`CommandOutput`](super::CommandOutput).
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The shell could not be spawned or waited on.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// The working directory does not exist.
    #[error("working directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },
}

impl ExecError {
    /// Exit code to record in place of a real one.
    ///
    /// Follows the shell convention of 127 for "command not found".
    pub fn exit_code(&self) -> i32 {
        gt_core::EXIT_NOT_FOUND
    }
}
