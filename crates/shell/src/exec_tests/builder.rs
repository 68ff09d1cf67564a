// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for ShellExecutor builder methods.

use super::executor;

#[tokio::test]
async fn cwd_changes_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    // Canonicalize to resolve symlinks (e.g., /var -> /private/var on macOS)
    let canonical_dir = dir.path().canonicalize().unwrap();

    let out = executor().cwd(dir.path()).execute_str("pwd -P").await.unwrap();

    assert_eq!(out.exit_code, 0);
    let printed = out.stdout_snippet.as_deref().unwrap().trim();
    assert_eq!(printed, canonical_dir.to_str().unwrap());
}

#[tokio::test]
async fn env_passes_variable_to_process() {
    let out = executor()
        .env("GT_TEST_VAR", "test_value")
        .execute_str("printenv GT_TEST_VAR")
        .await
        .unwrap();

    assert_eq!(out.stdout_snippet.as_deref(), Some("test_value\n"));
}

#[tokio::test]
async fn envs_passes_multiple_variables_to_process() {
    let out = executor()
        .envs([("VAR_A", "alpha"), ("VAR_B", "beta")])
        .execute_str("echo $VAR_A $VAR_B")
        .await
        .unwrap();

    assert_eq!(out.stdout_snippet.as_deref(), Some("alpha beta\n"));
}

#[yare::parameterized(
    plain     = { false, &["sh", "-c", "cargo test"] },
    fail_fast = { true,  &["sh", "-e", "-c", "cargo test"] },
)]
fn argv_reflects_fail_fast(fail_fast: bool, expected: &[&str]) {
    assert_eq!(executor().fail_fast(fail_fast).argv("cargo test"), expected);
}
