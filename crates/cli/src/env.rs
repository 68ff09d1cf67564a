// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use gt_shell::DEFAULT_SNIPPET_LIMIT;

/// Default tracing filter when `GT_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tracing filter directive: `GT_LOG`, default `warn`.
pub fn log_filter() -> String {
    std::env::var("GT_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Resolve log directory: GT_LOG_DIR > XDG_STATE_HOME/gauntlet/logs > ~/.local/state/gauntlet/logs
///
/// `None` when no home directory can be determined; runs then skip the log file.
pub fn log_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("GT_LOG_DIR").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    if let Some(xdg) = std::env::var_os("XDG_STATE_HOME").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(xdg).join("gauntlet/logs"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/gauntlet/logs"))
}

/// Bytes of captured output kept per stream in JSON mode.
pub fn snippet_limit() -> usize {
    std::env::var("GT_SNIPPET_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SNIPPET_LIMIT)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
