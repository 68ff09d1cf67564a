// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::env;

/// Filter from a directive string, falling back to the default on parse errors.
pub fn filter_from(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Filter comes from `GT_LOG`.
pub fn init() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    let _ = tracing_subscriber::registry()
        .with(filter_from(&env::log_filter()))
        .with(layer)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
