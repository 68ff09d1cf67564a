// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The same manifest expressed in each supported format.

use crate::{parse_manifest, parse_manifest_with_format, Format, Preset, TaskKind, RUST_TEST};
use std::path::Path;

const HCL: &str = r#"
image    = "archlinux"
packages = ["rustup"]

source "ruma-events" {
  url = "https://github.com/ruma/ruma-events"
}

toolchain {
  channel    = "nightly"
  components = ["rustfmt", "clippy"]
}

task "test" {
  dir = "ruma-events"

  check "fmt" {
    run = "cargo fmt -- --check"
  }
  check "clippy" {
    run = "cargo clippy --all-targets --all-features -- -D warnings"
  }
  check "test" {
    run = "cargo test --verbose"
  }
}
"#;

const TOML: &str = r#"
image = "archlinux"
packages = ["rustup"]

[source.ruma-events]
url = "https://github.com/ruma/ruma-events"

[toolchain]
channel = "nightly"
components = ["rustfmt", "clippy"]

[task.test]
dir = "ruma-events"

[task.test.check.fmt]
run = "cargo fmt -- --check"

[task.test.check.clippy]
run = "cargo clippy --all-targets --all-features -- -D warnings"

[task.test.check.test]
run = "cargo test --verbose"
"#;

const JSON: &str = r#"{
  "image": "archlinux",
  "packages": ["rustup"],
  "source": { "ruma-events": { "url": "https://github.com/ruma/ruma-events" } },
  "toolchain": { "channel": "nightly", "components": ["rustfmt", "clippy"] },
  "task": {
    "test": {
      "dir": "ruma-events",
      "check": {
        "fmt": { "run": "cargo fmt -- --check" },
        "clippy": { "run": "cargo clippy --all-targets --all-features -- -D warnings" },
        "test": { "run": "cargo test --verbose" }
      }
    }
  }
}"#;

#[yare::parameterized(
    hcl  = { HCL,  Format::Hcl },
    toml = { TOML, Format::Toml },
    json = { JSON, Format::Json },
)]
fn parses_ci_manifest(content: &str, format: Format) {
    let manifest = parse_manifest_with_format(content, format).unwrap();

    assert_eq!(manifest.image.as_ref().unwrap().name, "archlinux");
    assert_eq!(manifest.packages, vec!["rustup"]);

    let source = &manifest.sources["ruma-events"];
    assert_eq!(source.name, "ruma-events");
    assert_eq!(source.checkout_dir(), "ruma-events");

    let toolchain = manifest.toolchain.as_ref().unwrap();
    assert_eq!(toolchain.channel, "nightly");
    assert_eq!(toolchain.profile, "minimal");
    assert_eq!(toolchain.components, vec!["rustfmt", "clippy"]);

    let task = manifest.get_task("test").unwrap();
    assert_eq!(task.name, "test");
    assert_eq!(task.dir.as_deref(), Some("ruma-events"));
    let TaskKind::Checks(checks) = task.kind() else {
        panic!("expected a check task");
    };
    let names: Vec<&str> = checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["fmt", "clippy", "test"]);
    assert_eq!(checks[2].run, RUST_TEST);
}

#[test]
fn task_order_follows_file_order() {
    let toml = r#"
[task.zeta]
run = "echo z"

[task.alpha]
run = "echo a"

[task.mid]
run = "echo m"
"#;
    let manifest = parse_manifest(toml).unwrap();
    assert_eq!(manifest.task_names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn hcl_task_order_follows_file_order() {
    let hcl = r#"
task "install" { run = "echo install" }
task "build"   { run = "echo build" }
task "check"   { preset = "rust" }
"#;
    let manifest = parse_manifest_with_format(hcl, Format::Hcl).unwrap();
    assert_eq!(
        manifest.task_names().collect::<Vec<_>>(),
        vec!["install", "build", "check"]
    );
}

#[test]
fn preset_expands_to_rust_checks() {
    let manifest = parse_manifest("[task.ci]\npreset = \"rust\"\n").unwrap();
    let task = manifest.get_task("ci").unwrap();
    assert_eq!(task.preset, Some(Preset::Rust));
    assert_eq!(task.kind(), TaskKind::Checks(crate::rust_checks()));
}

#[test]
fn shell_task_kind() {
    let manifest = parse_manifest("[task.build]\nrun = \"make all\"\n").unwrap();
    assert_eq!(
        manifest.get_task("build").unwrap().kind(),
        TaskKind::Shell("make all".to_string())
    );
}

#[test]
fn task_env_is_ordered() {
    let toml = r#"
[task.build]
run = "make"
env = { RUSTFLAGS = "-D warnings", CARGO_TERM_COLOR = "always" }
"#;
    let manifest = parse_manifest(toml).unwrap();
    let env: Vec<(&str, &str)> = manifest.tasks["build"]
        .env
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(env, vec![("RUSTFLAGS", "-D warnings"), ("CARGO_TERM_COLOR", "always")]);
}

#[test]
fn source_with_dir_and_branch() {
    let toml = r#"
[source.events]
url = "https://example.org/events.git"
dir = "vendor/events"
branch = "main"

[task.build]
run = "make"
"#;
    let manifest = parse_manifest(toml).unwrap();
    let source = &manifest.sources["events"];
    assert_eq!(source.checkout_dir(), "vendor/events");
    assert_eq!(source.branch.as_deref(), Some("main"));
}

#[yare::parameterized(
    hcl     = { "a/gauntlet.hcl",  Some(Format::Hcl) },
    toml    = { "gauntlet.toml",   Some(Format::Toml) },
    json    = { "x.json",          Some(Format::Json) },
    yaml    = { "ci.yml",          None },
    no_ext  = { "Makefile",        None },
)]
fn format_from_path(path: &str, expected: Option<Format>) {
    assert_eq!(Format::from_path(Path::new(path)), expected);
}

#[test]
fn syntax_errors_name_the_format() {
    let err = parse_manifest("[task.build\nrun = 1").unwrap_err();
    assert!(err.to_string().starts_with("TOML parse error"), "{err}");

    let err = parse_manifest_with_format("{", Format::Json).unwrap_err();
    assert!(err.to_string().starts_with("JSON parse error"), "{err}");
}
