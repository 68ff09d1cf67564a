// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn gt_no_args_shows_usage_and_exits_two() {
    cli().exits(2);
}

#[test]
fn gt_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("run")
        .stdout_has("check")
        .stdout_has("plan")
        .stdout_has("validate");
}

#[test]
fn gt_run_help_shows_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--task")
        .stdout_has("--skip-provision")
        .stdout_has("--manifest");
}

#[test]
fn gt_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn unknown_output_format_is_usage_error() {
    cli().args(&["check", "-o", "yaml"]).exits(2);
}
