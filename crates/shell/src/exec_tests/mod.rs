// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the script executor.

use super::*;

mod basic;
mod builder;

/// Executor that captures output so tests can assert on it.
pub(crate) fn executor() -> ShellExecutor {
    ShellExecutor::new().output(OutputMode::Capture {
        limit: DEFAULT_SNIPPET_LIMIT,
    })
}

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
