// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt validate` specs

use crate::prelude::*;

fn validate(manifest: &str) -> RunAssert {
    let temp = Project::empty();
    temp.file("gauntlet.toml", manifest);
    temp.gt().args(&["validate"]).exits(2)
}

#[test]
fn valid_manifest_prints_ok() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", "[task.ci]\npreset = \"rust\"\n");

    temp.gt().args(&["validate"]).passes().stdout_eq("ok\n");
}

#[test]
fn valid_manifest_json() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.json",
        r#"{ "task": { "ci": { "check": { "unit": { "run": "make test" } } } } }"#,
    );

    let summary = temp.gt().args(&["validate", "-o", "json"]).passes().json();

    assert_eq!(summary["valid"], true);
    assert_eq!(summary["format"], "json");
    assert_eq!(summary["tasks"], serde_json::json!(["ci"]));
}

#[test]
fn rejects_manifest_without_tasks() {
    validate("packages = [\"rustup\"]\n").stderr_has("no tasks defined");
}

#[test]
fn rejects_run_and_checks_together() {
    validate(
        r#"
[task.ci]
run = "make"

[task.ci.check.unit]
run = "make test"
"#,
    )
    .stderr_has("mutually exclusive");
}

#[test]
fn rejects_task_without_body() {
    validate("[task.ci]\ndir = \"app\"\n").stderr_has("task.ci: needs one of");
}

#[test]
fn rejects_empty_run() {
    validate("[task.ci]\nrun = \"  \"\n").stderr_has("task.ci.run: must not be empty");
}

#[test]
fn rejects_escaping_dir() {
    validate("[task.ci]\ndir = \"../elsewhere\"\nrun = \"true\"\n").stderr_has("must not contain '..'");
}

#[test]
fn rejects_absolute_dir() {
    validate("[task.ci]\ndir = \"/tmp\"\nrun = \"true\"\n").stderr_has("must be relative");
}

#[test]
fn rejects_empty_toolchain_channel() {
    validate("[toolchain]\nchannel = \"\"\n\n[task.ci]\nrun = \"true\"\n")
        .stderr_has("toolchain.channel: must not be empty");
}

#[test]
fn rejects_reserved_task_name() {
    validate("[task.sources]\nrun = \"true\"\n").stderr_has("task name is reserved");
}

#[test]
fn rejects_duplicate_source_dirs() {
    validate(
        r#"
[source.a]
url = "https://example.com/a.git"
dir = "vendor"

[source.b]
url = "https://example.com/b.git"
dir = "vendor"

[task.ci]
run = "true"
"#,
    )
    .stderr_has("used by another source");
}

#[test]
fn rejects_unknown_fields() {
    validate("[task.ci]\nrun = \"true\"\nretries = 3\n").stderr_has("unknown field");
}
