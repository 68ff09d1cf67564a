// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress events emitted while a run executes.

use gt_core::{format_duration, CheckResult};
use gt_manifest::CheckDef;

use crate::executor::Completed;
use crate::plan::PlannedTask;
use crate::report::TaskReport;
use crate::run_logger::RunLogger;

/// Task name used in the run log for the package check.
pub const PACKAGES_LOG_TASK: &str = "packages";

/// Something that happened during a run.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    RunStarted {
        run_id: &'a str,
        image: Option<&'a str>,
        tasks: usize,
    },
    PackagesMissing {
        names: &'a [String],
    },
    TaskStarted {
        task: &'a PlannedTask,
    },
    CheckStarted {
        task: &'a str,
        check: &'a CheckDef,
    },
    CheckFinished {
        task: &'a str,
        result: &'a CheckResult,
        completed: &'a Completed,
    },
    ScriptFinished {
        task: &'a str,
        completed: &'a Completed,
    },
    TaskFinished {
        report: &'a TaskReport,
    },
    /// Not run because an earlier task failed.
    TaskSkipped {
        name: &'a str,
    },
}

/// Receives [`RunEvent`]s in the order they happen.
pub trait RunObserver: Send {
    fn on_event(&mut self, event: &RunEvent<'_>);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {
    fn on_event(&mut self, _event: &RunEvent<'_>) {}
}

/// Forwards events to an outer observer and mirrors them into the run log.
pub(crate) struct LoggingObserver<'a, 'o> {
    pub(crate) logger: Option<&'a RunLogger>,
    pub(crate) run_id: &'a str,
    pub(crate) outer: &'o mut dyn RunObserver,
}

impl RunObserver for LoggingObserver<'_, '_> {
    fn on_event(&mut self, event: &RunEvent<'_>) {
        if let Some(logger) = self.logger {
            log_event(logger, self.run_id, event);
        }
        self.outer.on_event(event);
    }
}

fn log_event(logger: &RunLogger, run_id: &str, event: &RunEvent<'_>) {
    match *event {
        RunEvent::RunStarted { image, tasks, .. } => {
            let image = image.unwrap_or("none");
            logger.append(run_id, "run", &format!("started: {tasks} task(s), image {image}"));
        }
        RunEvent::PackagesMissing { names } => {
            logger.append(run_id, PACKAGES_LOG_TASK, &format!("missing: {}", names.join(", ")));
        }
        RunEvent::TaskStarted { task } => {
            let message = format!("started {} in {}", task.body.label(), task.cwd.display());
            logger.append(run_id, &task.name, &message);
        }
        RunEvent::CheckStarted { task, check } => {
            logger.append(run_id, task, &format!("check {}: {}", check.name, check.run));
        }
        RunEvent::CheckFinished {
            task,
            result,
            completed,
        } => {
            let message = format!(
                "check {} exited {} after {}",
                result.name,
                result.exit_code,
                format_duration(result.duration)
            );
            logger.append(run_id, task, &message);
            log_output(logger, run_id, task, completed);
        }
        RunEvent::ScriptFinished { task, completed } => {
            log_output(logger, run_id, task, completed);
        }
        RunEvent::TaskFinished { report } => {
            let message = match report.exit_code {
                Some(code) => format!("{} (exit {code}) after {}ms", report.status, report.duration_ms),
                None => report.status.to_string(),
            };
            logger.append(run_id, &report.name, &message);
        }
        RunEvent::TaskSkipped { name } => {
            logger.append(run_id, name, "skipped");
        }
    }
}

fn log_output(logger: &RunLogger, run_id: &str, task: &str, completed: &Completed) {
    if let Some(stdout) = &completed.stdout {
        logger.append_fenced(run_id, task, "stdout", stdout);
    }
    if let Some(stderr) = &completed.stderr {
        logger.append_fenced(run_id, task, "stderr", stderr);
    }
}
