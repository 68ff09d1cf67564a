// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest discovery specs

use crate::prelude::*;

#[test]
fn no_manifest_is_usage_error() {
    let temp = Project::empty();

    temp.gt().args(&["run"]).exits(2).stderr_has("no manifest found");
}

#[test]
fn finds_manifest_in_dot_gauntlet_dir() {
    let temp = Project::empty();
    temp.file(".gauntlet/ci.toml", "[task.build]\nrun = \"touch build.ran\"\n");

    temp.gt().args(&["run"]).passes();

    assert!(temp.exists("build.ran"));
}

#[test]
fn duplicate_manifests_are_rejected() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", "[task.a]\nrun = \"true\"\n");
    temp.file("gauntlet.hcl", "task \"a\" {\n  run = \"true\"\n}\n");

    temp.gt()
        .args(&["validate"])
        .exits(2)
        .stderr_has("multiple manifests found")
        .stderr_has("gauntlet.toml")
        .stderr_has("gauntlet.hcl");
}

#[test]
fn explicit_manifest_skips_discovery() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", "[task.a]\nrun = \"true\"\n");
    temp.file("gauntlet.hcl", "task \"a\" {\n  run = \"true\"\n}\n");
    temp.file("ci/other.hcl", "task \"b\" {\n  run = \"touch b.ran\"\n}\n");

    temp.gt().args(&["run", "--manifest", "ci/other.hcl"]).passes();

    assert!(temp.exists("b.ran"));
}

#[test]
fn hcl_manifest_runs() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.hcl",
        r#"
task "ci" {
  check "one" {
    run = "touch one.ran; exit 1"
  }
  check "two" {
    run = "touch two.ran"
  }
}
"#,
    );

    temp.gt().args(&["run"]).fails();

    assert!(temp.exists("one.ran"));
    assert!(temp.exists("two.ran"));
}
