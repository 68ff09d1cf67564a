// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt plan` specs
//!
//! Plans print provisioning and task commands in execution order without
//! running anything.

use crate::prelude::*;

const MANIFEST: &str = r#"# Build and check the app

image {
  name = "rust:1-slim"
}

packages = ["rustup"]

toolchain {
  channel    = "stable"
  components = ["rustfmt", "clippy"]
}

source "app" {
  url = "https://example.com/app.git"
}

task "ci" {
  dir    = "app"
  preset = "rust"
}
"#;

#[test]
fn plan_lists_commands_in_order() {
    let temp = Project::empty();
    temp.file("gauntlet.hcl", MANIFEST);
    let root = temp.path().display().to_string();

    temp.gt().args(&["plan"]).passes().stdout_eq(&format!(
        "Build and check the app\n\
         manifest: {root}/gauntlet.hcl\n\
         image: rust:1-slim\n\
         packages: rustup\n\
         \n\
         toolchain (shell) in {root}\n\
         \x20 rustup toolchain install stable --profile minimal -c rustfmt -c clippy\n\
         \x20 rustup default stable\n\
         \n\
         sources (shell) in {root}\n\
         \x20 test -d app || git clone https://example.com/app.git app\n\
         \n\
         ci (checks) in {root}/app\n\
         \x20 fmt: cargo fmt -- --check\n\
         \x20 clippy: cargo clippy --all-targets --all-features -- -D warnings\n\
         \x20 test: cargo test --verbose\n"
    ));
}

#[test]
fn plan_runs_nothing() {
    let temp = Project::empty();
    temp.file("gauntlet.toml", "[task.build]\nrun = \"touch build.ran\"\n");

    temp.gt().args(&["plan"]).passes().stdout_has("touch build.ran");

    assert!(!temp.exists("build.ran"));
}

#[test]
fn plan_skip_provision_leaves_out_synthetic_tasks() {
    let temp = Project::empty();
    temp.file("gauntlet.hcl", MANIFEST);

    temp.gt()
        .args(&["plan", "--skip-provision"])
        .passes()
        .stdout_lacks("rustup")
        .stdout_lacks("git clone")
        .stdout_has("ci (checks)");
}

#[test]
fn plan_json_lists_tasks() {
    let temp = Project::empty();
    temp.file("gauntlet.hcl", MANIFEST);

    let plan = temp.gt().args(&["plan", "-o", "json"]).passes().json();

    let names: Vec<&str> = plan["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["toolchain", "sources", "ci"]);
    assert_eq!(plan["tasks"][2]["checks"][0]["run"], "cargo fmt -- --check");
    assert_eq!(plan["image"], "rust:1-slim");
}
