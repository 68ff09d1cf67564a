// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log file layout under the log directory.

use std::path::{Path, PathBuf};

/// `<log_dir>/run/<run_id>.log`
pub fn run_log_path(log_dir: &Path, run_id: &str) -> PathBuf {
    log_dir.join("run").join(format!("{run_id}.log"))
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
