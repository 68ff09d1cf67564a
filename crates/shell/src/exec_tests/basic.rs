// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for exit codes, output capture, and fail-fast behavior.

use super::{executor, run_async};
use crate::exec::{ExecError, OutputMode, ShellExecutor};

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[yare::parameterized(
    true_cmd    = { "true",    0 },
    false_cmd   = { "false",   1 },
    exit_three  = { "exit 3",  3 },
    missing_cmd = { "definitely-not-a-real-command-gt", 127 },
)]
fn exit_code_is_reported(script: &str, expected: i32) {
    run_async(async {
        let out = executor().execute_str(script).await.unwrap();
        assert_eq!(out.exit_code, expected);
        assert_eq!(out.is_success(), expected == 0);
        assert_eq!(out.result().exit_code, expected);
    });
}

#[tokio::test]
async fn killed_process_has_no_exit_code() {
    let out = executor().execute_str("kill -9 $$").await.unwrap();
    assert_eq!(out.exit_code, gt_core::EXIT_NO_CODE);
    assert!(!out.is_success());
}

// ---------------------------------------------------------------------------
// Output capture
// ---------------------------------------------------------------------------

#[tokio::test]
async fn captures_stdout_and_stderr() {
    let out = executor()
        .execute_str("echo hello; echo oops >&2")
        .await
        .unwrap();
    assert_eq!(out.stdout_snippet.as_deref(), Some("hello\n"));
    assert_eq!(out.stderr_snippet.as_deref(), Some("oops\n"));
}

#[tokio::test]
async fn empty_output_is_none() {
    let out = executor().execute_str("true").await.unwrap();
    assert!(out.stdout_snippet.is_none());
    assert!(out.stderr_snippet.is_none());
}

#[tokio::test]
async fn capture_respects_limit() {
    let out = ShellExecutor::new()
        .output(OutputMode::Capture { limit: 4 })
        .execute_str("echo abcdefgh")
        .await
        .unwrap();
    assert_eq!(out.stdout_snippet.as_deref(), Some("abcd"));
}

#[tokio::test]
async fn inherit_mode_captures_nothing() {
    let out = ShellExecutor::new().execute_str("true").await.unwrap();
    assert_eq!(out.exit_code, 0);
    assert!(out.stdout_snippet.is_none());
}

// ---------------------------------------------------------------------------
// Fail-fast
// ---------------------------------------------------------------------------

#[tokio::test]
async fn without_fail_fast_script_continues_after_failure() {
    let out = executor().execute_str("false; echo after").await.unwrap();
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout_snippet.as_deref(), Some("after\n"));
}

#[tokio::test]
async fn fail_fast_stops_at_first_failure() {
    let out = executor()
        .fail_fast(true)
        .execute_str("false; echo after")
        .await
        .unwrap();
    assert_eq!(out.exit_code, 1);
    assert!(out.stdout_snippet.is_none());
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_working_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = executor().cwd(&missing).execute_str("true").await.unwrap_err();
    assert!(matches!(err, ExecError::MissingDirectory { ref path } if *path == missing));
    assert_eq!(err.exit_code(), 127);
}
