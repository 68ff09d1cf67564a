// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt run` specs
//!
//! Check tasks run every check and fail if any failed; shell tasks stop
//! the run.

use crate::prelude::*;

/// Check task whose three checks touch a marker then exit with the given codes.
fn trio(fmt: i32, lint: i32, test: i32) -> String {
    format!(
        r#"
[task.ci.check.fmt]
run = "touch fmt.ran; exit {fmt}"

[task.ci.check.lint]
run = "touch lint.ran; exit {lint}"

[task.ci.check.test]
run = "touch test.ran; exit {test}"
"#
    )
}

fn assert_all_ran(temp: &Project) {
    for marker in ["fmt.ran", "lint.ran", "test.ran"] {
        assert!(temp.exists(marker), "{marker} was not created");
    }
}

#[test]
fn all_checks_passing_exits_zero() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", &trio(0, 0, 0));

    temp.gt().args(&["run"]).passes().stdout_has("1 task(s) passed");
    assert_all_ran(&temp);
}

#[test]
fn format_failure_still_runs_lint_and_test() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", &trio(1, 0, 0));

    temp.gt()
        .args(&["run"])
        .fails()
        .stdout_has("FAIL fmt")
        .stderr_has("failed: ci");
    assert_all_ran(&temp);
}

#[test]
fn test_failure_is_attributed_to_test_only() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", &trio(0, 0, 1));

    let run = temp.gt().args(&["run", "-o", "json"]).fails();
    let report = run.json();

    let checks = report["tasks"][0]["checks"].as_array().unwrap();
    let failing: Vec<&str> = checks
        .iter()
        .filter(|c| c["exit_code"] != 0)
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(failing, vec!["test"]);
    assert_eq!(report["tasks"][0]["status"], "failed");
    assert_eq!(report["exit_code"], 1);
}

#[test]
fn every_check_failing_exits_non_zero() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", &trio(1, 1, 1));

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    let codes: Vec<i64> = report["tasks"][0]["checks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["exit_code"].as_i64().unwrap())
        .collect();
    assert_eq!(codes, vec![1, 1, 1]);
    assert_all_ran(&temp);
}

#[test]
fn original_exit_codes_are_kept_per_check() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", &trio(0, 101, 0));

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    assert_eq!(report["tasks"][0]["checks"][1]["exit_code"], 101);
    assert_eq!(report["tasks"][0]["exit_code"], 1);
}

#[test]
fn killed_check_counts_as_failure() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[task.ci.check.crash]
run = "kill -9 $$"

[task.ci.check.after]
run = "touch after.ran"
"#,
    );

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    assert_eq!(report["tasks"][0]["checks"][0]["exit_code"], -1);
    assert!(temp.exists("after.ran"));
}

#[test]
fn failing_shell_task_skips_later_tasks() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[task.build]
run = """
touch build.ran
false
touch build.after
"""

[task.deploy]
run = "touch deploy.ran"
"#,
    );

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    assert_eq!(report["tasks"][0]["status"], "failed");
    assert_eq!(report["tasks"][1]["status"], "skipped");
    assert!(temp.exists("build.ran"));
    assert!(!temp.exists("build.after"), "sh -e should stop at the first failure");
    assert!(!temp.exists("deploy.ran"));
}

#[test]
fn task_filter_runs_only_named_tasks() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[task.one]
run = "touch one.ran"

[task.two]
run = "touch two.ran"
"#,
    );

    temp.gt().args(&["run", "--task", "two"]).passes();

    assert!(!temp.exists("one.ran"));
    assert!(temp.exists("two.ran"));
}

#[test]
fn unknown_task_is_usage_error() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", "[task.one]\nrun = \"true\"\n");

    temp.gt()
        .args(&["run", "--task", "nope"])
        .exits(2)
        .stderr_has("unknown task 'nope' (available: one)");
}

#[test]
fn task_dir_and_env_apply_to_commands() {
    let temp = Project::empty();
    temp.file("app/.keep", "");
    temp.file(
        "gauntlet.toml",
        r#"
[task.ci]
dir = "app"
env = { GREETING = "hello" }

[task.ci.check.greet]
run = "printf '%s' \"$GREETING\" > greeting.txt"
"#,
    );

    temp.gt().args(&["run"]).passes();

    assert_eq!(temp.read("app/greeting.txt"), "hello");
}

#[test]
fn missing_task_dir_fails_the_check() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[task.ci]
dir = "missing"

[task.ci.check.a]
run = "true"
"#,
    );

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    assert_eq!(report["tasks"][0]["checks"][0]["exit_code"], 127);
}

#[test]
fn missing_package_fails_before_running() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
packages = ["gt-definitely-not-installed"]

[task.build]
run = "touch build.ran"
"#,
    );

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    assert_eq!(report["missing_packages"], serde_json::json!(["gt-definitely-not-installed"]));
    assert_eq!(report["tasks"][0]["status"], "skipped");
    assert!(!temp.exists("build.ran"));
}

#[test]
fn skip_provision_ignores_packages() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
packages = ["gt-definitely-not-installed"]

[task.build]
run = "touch build.ran"
"#,
    );

    temp.gt().args(&["run", "--skip-provision"]).passes();

    assert!(temp.exists("build.ran"));
}

#[test]
fn templates_expand_in_scripts() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[task.where]
run = "printf '%s' \"${root}\" > root.txt; printf '%s' \"${GT_SPEC_VALUE:-fallback}\" > env.txt"
"#,
    );

    temp.gt().args(&["run"]).env("GT_SPEC_VALUE", "given").passes();

    assert_eq!(temp.read("root.txt"), temp.path().display().to_string());
    assert_eq!(temp.read("env.txt"), "given");
}

#[test]
fn run_writes_log_file() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", &trio(0, 1, 0));

    let report = temp.gt().args(&["run", "-o", "json"]).fails().json();

    let run_id = report["run_id"].as_str().unwrap();
    let log = std::fs::read_to_string(temp.log_dir().join(format!("run/{run_id}.log"))).unwrap();
    assert!(log.contains("[ci] check lint exited 1"), "log was:\n{log}");
}

#[test]
fn json_mode_captures_command_output_in_log() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", "[task.hello]\nrun = \"echo hello-from-task\"\n");

    let run = temp.gt().args(&["run", "-o", "json"]).passes();
    let report = run.json();
    run.stdout_lacks("hello-from-task");

    let run_id = report["run_id"].as_str().unwrap();
    let log = std::fs::read_to_string(temp.log_dir().join(format!("run/{run_id}.log"))).unwrap();
    assert!(log.contains("hello-from-task"));
}
