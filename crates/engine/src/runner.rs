// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-run orchestration.
//!
//! Tasks run in plan order. A failed task stops the run: the tasks after it
//! are reported as skipped. Inside a check task every check still runs.

use std::ffi::OsString;
use std::time::Instant;

use gt_core::{CommandResult, RunId};
use gt_shell::find_executable;
use tracing::Instrument;

use crate::checks::{run_checks, CheckContext};
use crate::executor::{CommandExecutor, CommandRequest};
use crate::observer::{LoggingObserver, RunEvent, RunObserver};
use crate::plan::{Plan, PlannedTask, TaskBody};
use crate::report::{RunReport, TaskReport};
use crate::run_logger::RunLogger;

/// Executes plans with a [`CommandExecutor`].
pub struct Runner<E> {
    executor: E,
    logger: Option<RunLogger>,
    path_env: Option<OsString>,
}

impl<E: CommandExecutor> Runner<E> {
    /// Runner that resolves packages against this process's `PATH`.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            logger: None,
            path_env: std::env::var_os("PATH"),
        }
    }

    pub fn with_logger(mut self, logger: RunLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Resolve packages against `path` instead of `PATH`.
    pub fn with_path_env(mut self, path: impl Into<OsString>) -> Self {
        self.path_env = Some(path.into());
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn logger(&self) -> Option<&RunLogger> {
        self.logger.as_ref()
    }

    /// Run `plan` under a fresh [`RunId`].
    pub async fn run(&self, plan: &Plan, observer: &mut dyn RunObserver) -> RunReport {
        self.run_with_id(&RunId::new(), plan, observer).await
    }

    pub async fn run_with_id(
        &self,
        run_id: &RunId,
        plan: &Plan,
        observer: &mut dyn RunObserver,
    ) -> RunReport {
        let start = Instant::now();
        let span = tracing::info_span!("run", run_id = %run_id);
        let mut sink = LoggingObserver {
            logger: self.logger.as_ref(),
            run_id: run_id.as_str(),
            outer: observer,
        };

        let (missing_packages, tasks) = async {
            sink.on_event(&RunEvent::RunStarted {
                run_id: run_id.as_str(),
                image: plan.image.as_deref(),
                tasks: plan.tasks.len(),
            });

            let missing = self.missing_packages(&plan.packages);
            if !missing.is_empty() {
                tracing::warn!(packages = ?missing, "required packages not found on PATH");
                sink.on_event(&RunEvent::PackagesMissing { names: &missing });
            }

            let mut stopped = !missing.is_empty();
            let mut reports = Vec::with_capacity(plan.tasks.len());
            for task in &plan.tasks {
                if stopped {
                    sink.on_event(&RunEvent::TaskSkipped { name: &task.name });
                    reports.push(TaskReport::skipped(&task.name, task.body.label()));
                    continue;
                }
                let report = self.run_task(task, &mut sink).await;
                stopped = report.status.is_failed();
                reports.push(report);
            }
            (missing, reports)
        }
        .instrument(span)
        .await;

        let exit_code = RunReport::compute_exit_code(&tasks, &missing_packages);
        tracing::info!(run_id = %run_id, exit_code, "run finished");
        RunReport {
            run_id: run_id.to_string(),
            image: plan.image.clone(),
            missing_packages,
            tasks,
            exit_code,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Declared packages that are not executables on the search path.
    pub fn missing_packages(&self, packages: &[String]) -> Vec<String> {
        packages
            .iter()
            .filter(|name| find_executable(name, self.path_env.as_deref()).is_none())
            .cloned()
            .collect()
    }

    async fn run_task(&self, task: &PlannedTask, sink: &mut dyn RunObserver) -> TaskReport {
        let span = tracing::info_span!("task", task = %task.name, kind = task.body.label());
        async {
            sink.on_event(&RunEvent::TaskStarted { task });
            let start = Instant::now();
            let report = match &task.body {
                TaskBody::Shell(script) => {
                    let completed = self
                        .executor
                        .execute(CommandRequest {
                            script,
                            cwd: &task.cwd,
                            env: &task.env,
                            fail_fast: true,
                        })
                        .await;
                    sink.on_event(&RunEvent::ScriptFinished {
                        task: &task.name,
                        completed: &completed,
                    });
                    TaskReport::finished(&task.name, task.body.label(), completed.result, completed.duration)
                }
                TaskBody::Checks(checks) => {
                    let ctx = CheckContext {
                        task: &task.name,
                        cwd: &task.cwd,
                        env: &task.env,
                    };
                    let outcome = run_checks(&self.executor, ctx, checks, sink).await;
                    let mut report = TaskReport::finished(
                        &task.name,
                        task.body.label(),
                        CommandResult::new(outcome.exit_code()),
                        start.elapsed(),
                    );
                    report.checks = outcome.checks;
                    report
                }
            };
            sink.on_event(&RunEvent::TaskFinished { report: &report });
            report
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
