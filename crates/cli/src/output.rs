// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering for reports and plans.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use gt_core::{format_duration, TaskStatus};
use gt_engine::{Plan, RunEvent, RunObserver, RunReport, TaskBody};
use serde::Serialize;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

fn ms(duration_ms: u64) -> String {
    format_duration(Duration::from_millis(duration_ms))
}

/// Summary table printed after a text-mode run.
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();
    if !report.missing_packages.is_empty() {
        let _ = writeln!(out, "missing packages: {}", report.missing_packages.join(", "));
    }

    let width = report.tasks.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for task in &report.tasks {
        let pad = " ".repeat(7usize.saturating_sub(task.status.to_string().len()));
        let status = format!("{pad}{}", color::status(task.status));
        let name = color::header(&format!("{:width$}", task.name));
        match (task.status, task.exit_code) {
            (TaskStatus::Skipped, _) | (_, None) => {
                let _ = writeln!(out, "{status} {name}");
            }
            (TaskStatus::Failed, Some(code)) if task.checks.is_empty() => {
                let _ = writeln!(
                    out,
                    "{status} {name}  exit {code}  {}",
                    color::context(&ms(task.duration_ms))
                );
            }
            _ => {
                let _ = writeln!(out, "{status} {name}  {}", color::context(&ms(task.duration_ms)));
            }
        }

        let check_width = task.checks.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for check in &task.checks {
            let mark = if check.is_success() { "ok" } else { "FAIL" };
            let exit = if check.is_success() {
                String::new()
            } else {
                format!("  exit {}", check.exit_code)
            };
            let _ = writeln!(
                out,
                "        {mark:<4} {:check_width$}{exit}  {}",
                check.name,
                color::context(&format_duration(check.duration))
            );
        }
    }

    let total = report.tasks.len();
    let failed = report.failed_tasks().count();
    let verdict = if report.is_success() {
        format!("{total} task(s) passed")
    } else if failed > 0 {
        format!("{failed} of {total} task(s) failed")
    } else {
        "run failed".to_string()
    };
    let _ = writeln!(out, "\n{verdict} in {}", ms(report.duration_ms));
    out
}

/// Human-readable execution plan.
pub fn render_plan(plan: &Plan, manifest: &Path, description: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "{}", color::context(description));
    }
    let _ = writeln!(out, "manifest: {}", manifest.display());
    if let Some(image) = &plan.image {
        let _ = writeln!(out, "image: {image}");
    }
    if !plan.packages.is_empty() {
        let _ = writeln!(out, "packages: {}", plan.packages.join(", "));
    }

    for task in &plan.tasks {
        let _ = writeln!(
            out,
            "\n{} ({}) in {}",
            color::header(&task.name),
            task.body.label(),
            task.cwd.display()
        );
        if let Some(description) = &task.description {
            let _ = writeln!(out, "  {}", color::context(description));
        }
        for (key, value) in &task.env {
            let _ = writeln!(out, "  env {key}={value}");
        }
        match &task.body {
            TaskBody::Shell(script) => {
                for line in script.lines() {
                    let _ = writeln!(out, "  {}", color::literal(line));
                }
            }
            TaskBody::Checks(checks) => {
                for check in checks {
                    let _ = writeln!(out, "  {}: {}", check.name, color::literal(&check.run));
                }
            }
        }
    }
    out
}

/// JSON view of a plan.
pub fn plan_json(plan: &Plan, manifest: &Path) -> serde_json::Value {
    let tasks: Vec<serde_json::Value> = plan
        .tasks
        .iter()
        .map(|task| {
            let mut value = serde_json::json!({
                "name": task.name,
                "kind": task.body.label(),
                "dir": task.cwd,
                "env": task
                    .env
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v.as_str())))
                    .collect::<serde_json::Map<_, _>>(),
            });
            match &task.body {
                TaskBody::Shell(script) => value["run"] = serde_json::json!(script),
                TaskBody::Checks(checks) => {
                    value["checks"] = checks
                        .iter()
                        .map(|c| serde_json::json!({ "name": c.name, "run": c.run }))
                        .collect();
                }
            }
            value
        })
        .collect();
    serde_json::json!({
        "manifest": manifest,
        "image": plan.image,
        "packages": plan.packages,
        "tasks": tasks,
    })
}

/// Prints progress lines to stderr while a text-mode run executes.
#[derive(Debug, Default)]
pub struct TextProgress;

impl TextProgress {
    pub fn line(event: &RunEvent<'_>) -> Option<String> {
        match event {
            RunEvent::PackagesMissing { names } => {
                Some(format!("==> missing packages: {}", names.join(", ")))
            }
            RunEvent::TaskStarted { task } => Some(format!(
                "==> {} {}",
                color::header(&task.name),
                color::context(&format!("({})", task.cwd.display()))
            )),
            RunEvent::CheckStarted { check, .. } => {
                Some(format!("--> {}: {}", check.name, color::literal(&check.run)))
            }
            RunEvent::CheckFinished { result, .. } if !result.is_success() => Some(format!(
                "--> {} {} (exit {})",
                result.name,
                color::status(TaskStatus::Failed),
                result.exit_code
            )),
            RunEvent::TaskSkipped { name } => Some(format!(
                "==> {} {}",
                color::muted(name),
                color::status(TaskStatus::Skipped)
            )),
            _ => None,
        }
    }
}

impl RunObserver for TextProgress {
    fn on_event(&mut self, event: &RunEvent<'_>) {
        if let Some(line) = Self::line(event) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
