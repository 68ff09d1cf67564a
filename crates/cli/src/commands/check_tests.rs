// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exit_error::exit_code_for;
use gt_engine::{TaskBody, CHECK_TASK};

#[test]
fn check_plan_runs_rust_preset_in_dir() {
    let plan = check_plan(Path::new("/work"), Path::new("crates/app"));

    assert_eq!(plan.task_names(), vec![CHECK_TASK]);
    assert_eq!(plan.tasks[0].cwd, Path::new("/work/crates/app"));
    match &plan.tasks[0].body {
        TaskBody::Checks(checks) => {
            let runs: Vec<&str> = checks.iter().map(|c| c.run.as_str()).collect();
            assert_eq!(
                runs,
                vec![
                    "cargo fmt -- --check",
                    "cargo clippy --all-targets --all-features -- -D warnings",
                    "cargo test --verbose",
                ]
            );
        }
        other => panic!("expected checks, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_dir_is_a_usage_error() {
    let root = tempfile::tempdir().unwrap();
    let args = CheckArgs {
        dir: PathBuf::from("nope"),
        output: OutputFormat::Json,
    };

    let err = handle(args, root.path()).await.unwrap_err();

    assert_eq!(exit_code_for(&err), 2);
    assert!(err.to_string().starts_with("not a directory: "));
}
