// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt check` specs
//!
//! A stub `cargo` on `PATH` records each invocation and exits with the code
//! configured for its subcommand.

use crate::prelude::*;

const FAKE_CARGO: &str = r#"#!/bin/sh
echo "$*" >> "$CARGO_CALLS"
case "$1" in
  fmt) exit "${FMT_EXIT:-0}" ;;
  clippy) exit "${CLIPPY_EXIT:-0}" ;;
  test) exit "${TEST_EXIT:-0}" ;;
esac
exit 0
"#;

fn project() -> Project {
    let temp = Project::empty();
    temp.script("bin/cargo", FAKE_CARGO);
    temp.file("crate/Cargo.toml", "[package]\nname = \"demo\"\n");
    temp
}

fn check(temp: &Project, fmt: i32, clippy: i32, test: i32) -> CliBuilder {
    temp.gt()
        .args(&["check", "--dir", "crate"])
        .path_prepend(&temp.path().join("bin"))
        .env("CARGO_CALLS", temp.path().join("calls.txt"))
        .env("FMT_EXIT", fmt.to_string())
        .env("CLIPPY_EXIT", clippy.to_string())
        .env("TEST_EXIT", test.to_string())
}

fn calls(temp: &Project) -> Vec<String> {
    temp.read("calls.txt").lines().map(String::from).collect()
}

const EXPECTED_CALLS: [&str; 3] = [
    "fmt -- --check",
    "clippy --all-targets --all-features -- -D warnings",
    "test --verbose",
];

#[test]
fn all_pass_exits_zero() {
    let temp = project();

    check(&temp, 0, 0, 0).passes();

    assert_eq!(calls(&temp), EXPECTED_CALLS);
}

#[test]
fn fmt_failure_still_runs_clippy_and_test() {
    let temp = project();

    check(&temp, 1, 0, 0).fails();

    assert_eq!(calls(&temp), EXPECTED_CALLS);
}

#[test]
fn test_failure_alone_fails() {
    let temp = project();

    let report = check(&temp, 0, 0, 1).args(&["-o", "json"]).fails().json();

    assert_eq!(report["tasks"][0]["name"], "check");
    assert_eq!(report["tasks"][0]["checks"][0]["exit_code"], 0);
    assert_eq!(report["tasks"][0]["checks"][1]["exit_code"], 0);
    assert_eq!(report["tasks"][0]["checks"][2]["exit_code"], 1);
}

#[test]
fn all_failing_exits_one() {
    let temp = project();

    check(&temp, 1, 1, 1).fails().stdout_has("1 of 1 task(s) failed");

    assert_eq!(calls(&temp).len(), 3);
}

#[test]
fn checks_run_inside_the_crate_dir() {
    let temp = project();
    temp.script(
        "bin/cargo",
        "#!/bin/sh\npwd >> \"$CARGO_CALLS\"\n",
    );

    check(&temp, 0, 0, 0).passes();

    let dirs = calls(&temp);
    assert_eq!(dirs.len(), 3);
    assert!(dirs.iter().all(|d| d.ends_with("/crate")), "got {dirs:?}");
}

#[test]
fn missing_dir_is_usage_error() {
    let temp = Project::empty();

    temp.gt()
        .args(&["check", "--dir", "nope"])
        .exits(2)
        .stderr_has("not a directory");
}
