// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The check task: run every check, then decide.
//!
//! Checks run one after another in declared order. A failing check never
//! stops the ones after it; each is invoked exactly once and its result
//! recorded. Only when all have finished is the outcome folded into a
//! single pass/fail.

use std::path::Path;

use gt_core::{CheckResult, StepOutcome};
use gt_manifest::CheckDef;
use tracing::Instrument;

use crate::executor::{CommandExecutor, CommandRequest};
use crate::observer::{RunEvent, RunObserver};

/// Where and how the checks of one task run.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub task: &'a str,
    pub cwd: &'a Path,
    pub env: &'a [(String, String)],
}

/// Run all `checks` and collect their results.
pub async fn run_checks<E>(
    executor: &E,
    ctx: CheckContext<'_>,
    checks: &[CheckDef],
    observer: &mut dyn RunObserver,
) -> StepOutcome
where
    E: CommandExecutor + ?Sized,
{
    let mut outcome = StepOutcome::default();
    for check in checks {
        observer.on_event(&RunEvent::CheckStarted {
            task: ctx.task,
            check,
        });

        let span = tracing::info_span!("check", task = ctx.task, check = %check.name);
        let completed = executor
            .execute(CommandRequest {
                script: &check.run,
                cwd: ctx.cwd,
                env: ctx.env,
                fail_fast: true,
            })
            .instrument(span)
            .await;

        let result = CheckResult::new(&check.name, completed.result, completed.duration);
        if !result.is_success() {
            tracing::info!(task = ctx.task, check = %check.name, exit_code = result.exit_code, "check failed");
        }
        observer.on_event(&RunEvent::CheckFinished {
            task: ctx.task,
            result: &result,
            completed: &completed,
        });
        outcome.push(result);
    }
    outcome
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
