// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Gauntlet engine: plans a manifest and runs it.

mod checks;
mod error;
mod executor;
pub mod log_paths;
mod observer;
mod plan;
mod report;
mod run_logger;
mod runner;

pub use checks::{run_checks, CheckContext};
pub use error::RunError;
#[cfg(any(test, feature = "test-support"))]
pub use executor::{ExecCall, FakeExecutor};
pub use executor::{CommandExecutor, CommandRequest, Completed, ShellCommandExecutor};
pub use observer::{NoopObserver, RunEvent, RunObserver, PACKAGES_LOG_TASK};
pub use plan::{
    build_plan, template_vars, Plan, PlanOptions, PlannedTask, TaskBody, CHECK_TASK, SOURCES_TASK,
    TOOLCHAIN_TASK,
};
pub use report::{RunReport, TaskReport};
pub use run_logger::RunLogger;
pub use runner::Runner;
