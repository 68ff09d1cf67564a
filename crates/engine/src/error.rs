// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine errors

use thiserror::Error;

/// Errors raised before any command runs.
///
/// Failing commands are not errors; they are recorded in the report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("unknown task '{name}' (available: {})", .available.join(", "))]
    UnknownTask { name: String, available: Vec<String> },
}
