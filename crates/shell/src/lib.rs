// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt-shell: run shell scripts to completion and report their exit codes.
//!
//! Scripts are handed to the system `sh`; this crate does not interpret
//! shell syntax itself. It owns process spawning, working directory and
//! environment setup, output capture, and PATH lookups.

pub mod exec;
pub mod path;

pub use exec::{CommandOutput, ExecError, OutputMode, ShellExecutor, DEFAULT_SNIPPET_LIMIT};
pub use path::find_executable;
