// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only logger for per-run activity logs.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use gt_core::format_utc_now;

use crate::log_paths;

/// Append-only logger for per-run activity logs.
///
/// Writes human-readable timestamped lines to:
///   `<log_dir>/run/<run_id>.log`
///
/// Each `append()` call opens, writes, and closes the file.
#[derive(Debug, Clone)]
pub struct RunLogger {
    log_dir: PathBuf,
}

impl RunLogger {
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn path_for(&self, run_id: &str) -> PathBuf {
        log_paths::run_log_path(&self.log_dir, run_id)
    }

    /// Append a log line for the given run.
    ///
    /// Format: `2026-01-30T08:14:09Z [task] message`
    ///
    /// Failures are logged via tracing but do not propagate.
    pub fn append(&self, run_id: &str, task: &str, message: &str) {
        let path = self.path_for(run_id);
        if let Err(e) = write_line(&path, task, message) {
            tracing::warn!(run_id, error = %e, "failed to write run log");
        }
    }

    /// Append a fenced block of captured output.
    ///
    /// Format:
    /// ```text
    /// {timestamp} [{task}] ```{label}
    /// {content}
    /// {timestamp} [{task}] ```
    /// ```
    pub fn append_fenced(&self, run_id: &str, task: &str, label: &str, content: &str) {
        let path = self.path_for(run_id);
        if let Err(e) = write_fenced(&path, task, label, content) {
            tracing::warn!(run_id, error = %e, "failed to write run log");
        }
    }
}

fn open_append(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn write_line(path: &Path, task: &str, message: &str) -> std::io::Result<()> {
    let mut file = open_append(path)?;
    writeln!(file, "{} [{}] {}", format_utc_now(), task, message)
}

fn write_fenced(path: &Path, task: &str, label: &str, content: &str) -> std::io::Result<()> {
    let mut file = open_append(path)?;
    writeln!(file, "{} [{}] ```{}", format_utc_now(), task, label)?;
    write!(file, "{}", content)?;
    if !content.ends_with('\n') {
        writeln!(file)?;
    }
    writeln!(file, "{} [{}] ```", format_utc_now(), task)
}

#[cfg(test)]
#[path = "run_logger_tests.rs"]
mod tests;
