// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt-core: Core types for the Gauntlet (gt) CI step runner

pub mod macros;

pub mod id;
pub mod outcome;
pub mod time_fmt;

pub use id::{short, RunId};
#[cfg(any(test, feature = "test-support"))]
pub use outcome::CheckResultBuilder;
pub use outcome::{
    aggregate, CheckResult, CommandResult, StepOutcome, TaskStatus, EXIT_FAILURE, EXIT_NOT_FOUND,
    EXIT_NO_CODE,
};
pub use time_fmt::{format_duration, format_elapsed, format_utc_now};
