// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod plan;
pub mod run;
pub mod validate;

use std::path::Path;

use anyhow::Result;
use gt_engine::{NoopObserver, Plan, RunLogger, RunReport, Runner, ShellCommandExecutor};
use gt_manifest::{resolve_manifest, LoadedManifest};
use gt_shell::OutputMode;

use crate::env;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, render_report, OutputFormat, TextProgress};

/// Load the manifest, turning any failure into a usage exit.
pub(crate) fn load(root: &Path, explicit: Option<&Path>) -> Result<LoadedManifest> {
    resolve_manifest(root, explicit).map_err(|e| ExitError::usage(e).into())
}

/// Runner for real commands; output is captured in JSON mode.
pub(crate) fn runner(format: OutputFormat) -> Runner<ShellCommandExecutor> {
    let mode = match format {
        OutputFormat::Text => OutputMode::Inherit,
        OutputFormat::Json => OutputMode::Capture {
            limit: env::snippet_limit(),
        },
    };
    let runner = Runner::new(ShellCommandExecutor::new(mode));
    match env::log_dir() {
        Some(dir) => runner.with_logger(RunLogger::new(dir)),
        None => runner,
    }
}

/// Execute `plan` and print the report.
pub(crate) async fn execute(plan: &Plan, format: OutputFormat) -> Result<()> {
    let runner = runner(format);
    let report = match format {
        OutputFormat::Text => runner.run(plan, &mut TextProgress).await,
        OutputFormat::Json => runner.run(plan, &mut NoopObserver).await,
    };
    let log_path = runner.logger().map(|l| l.path_for(&report.run_id));
    finish(&report, format, log_path.as_deref())
}

/// Print the report and map a failed run to its exit code.
pub(crate) fn finish(report: &RunReport, format: OutputFormat, log_path: Option<&Path>) -> Result<()> {
    format_or_json(format, report, || print!("{}", render_report(report)))?;
    if report.is_success() {
        return Ok(());
    }

    let mut message = match report.failed_tasks().map(|t| t.name.as_str()).collect::<Vec<_>>() {
        failed if failed.is_empty() => "run failed".to_string(),
        failed => format!("failed: {}", failed.join(", ")),
    };
    if let Some(path) = log_path {
        message.push_str(&format!(" (log: {})", path.display()));
    }
    Err(ExitError::run_failed(message).into())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
