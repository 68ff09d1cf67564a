// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validation errors.

use crate::{parse_manifest, ParseError};

fn invalid(toml: &str) -> String {
    match parse_manifest(toml) {
        Err(ParseError::Invalid { location, message }) => format!("{location}: {message}"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn rejects_manifest_without_tasks() {
    assert_eq!(invalid("packages = [\"rustup\"]\n"), "manifest: no tasks defined");
}

#[yare::parameterized(
    run_and_check = {
        "[task.t]\nrun = \"make\"\n[task.t.check.a]\nrun = \"true\"\n",
        "task.t: `run`, `check` blocks, and `preset` are mutually exclusive"
    },
    run_and_preset = {
        "[task.t]\nrun = \"make\"\npreset = \"rust\"\n",
        "task.t: `run`, `check` blocks, and `preset` are mutually exclusive"
    },
    neither = {
        "[task.t]\ndir = \"x\"\n",
        "task.t: needs one of `run`, `check` blocks, or `preset`"
    },
    empty_run = {
        "[task.t]\nrun = \"  \"\n",
        "task.t.run: must not be empty"
    },
    empty_check_run = {
        "[task.t.check.fmt]\nrun = \"\"\n",
        "task.t.check.fmt.run: must not be empty"
    },
    absolute_dir = {
        "[task.t]\nrun = \"make\"\ndir = \"/etc\"\n",
        "task.t.dir: '/etc' must be relative"
    },
    parent_dir = {
        "[task.t]\nrun = \"make\"\ndir = \"src/../../x\"\n",
        "task.t.dir: 'src/../../x' must not contain '..'"
    },
    reserved_toolchain = {
        "[task.toolchain]\nrun = \"make\"\n",
        "task.toolchain: task name is reserved"
    },
    reserved_sources = {
        "[task.sources]\nrun = \"make\"\n",
        "task.sources: task name is reserved"
    },
    empty_channel = {
        "[toolchain]\nchannel = \"\"\n[task.t]\nrun = \"make\"\n",
        "toolchain.channel: must not be empty"
    },
    empty_component = {
        "[toolchain]\nchannel = \"stable\"\ncomponents = [\"\"]\n[task.t]\nrun = \"make\"\n",
        "toolchain.components: empty component name"
    },
    empty_package = {
        "packages = [\"rustup\", \"\"]\n[task.t]\nrun = \"make\"\n",
        "packages[1]: empty package name"
    },
    empty_source_url = {
        "[source.a]\nurl = \"\"\n[task.t]\nrun = \"make\"\n",
        "source.a.url: must not be empty"
    },
    duplicate_source_dir = {
        "[source.a]\nurl = \"u1\"\ndir = \"x\"\n[source.b]\nurl = \"u2\"\ndir = \"x\"\n[task.t]\nrun = \"make\"\n",
        "source.b.dir: directory 'x' is used by another source"
    },
    escaping_source_dir = {
        "[source.a]\nurl = \"u\"\ndir = \"../a\"\n[task.t]\nrun = \"make\"\n",
        "source.a.dir: '../a' must not contain '..'"
    },
)]
fn rejects(toml: &str, expected: &str) {
    assert_eq!(invalid(toml), expected);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = parse_manifest("[task.t]\nrun = \"make\"\ncommand = \"oops\"\n").unwrap_err();
    assert!(matches!(err, ParseError::Toml(_)), "{err:?}");
    assert!(err.to_string().contains("command"), "{err}");
}

#[test]
fn unknown_preset_is_rejected() {
    let err = parse_manifest("[task.t]\npreset = \"python\"\n").unwrap_err();
    assert!(matches!(err, ParseError::Toml(_)), "{err:?}");
}

#[test]
fn nested_relative_dir_is_allowed() {
    let manifest = parse_manifest("[task.t]\nrun = \"make\"\ndir = \"crates/./core\"\n").unwrap();
    assert_eq!(manifest.tasks["t"].dir.as_deref(), Some("crates/./core"));
}
