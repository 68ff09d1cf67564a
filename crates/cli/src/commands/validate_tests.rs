// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exit_error::exit_code_for;

#[test]
fn summary_lists_tasks_in_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("gauntlet.toml"),
        "[task.build]\nrun = \"make\"\n\n[task.ci]\npreset = \"rust\"\n",
    )
    .unwrap();

    let loaded = super::super::load(dir.path(), None).unwrap();
    let json = summary(&loaded);

    assert_eq!(json["valid"], true);
    assert_eq!(json["format"], "toml");
    assert_eq!(json["tasks"], serde_json::json!(["build", "ci"]));
}

#[test]
fn invalid_manifest_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gauntlet.toml"), "[task.ci]\n").unwrap();
    let args = ValidateArgs {
        manifest: None,
        output: OutputFormat::Text,
    };

    let err = handle(args, dir.path()).unwrap_err();

    assert_eq!(exit_code_for(&err), 2);
    assert!(err.to_string().contains("task.ci"), "got: {err}");
}
