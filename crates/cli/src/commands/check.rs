// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt check`: fmt, clippy, and test in one directory, no manifest needed.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use gt_engine::Plan;
use gt_manifest::rust_checks;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Crate directory, relative to the project root
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,
    #[arg(long = "output", short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Single-task plan running the Rust checks in `root/dir`.
pub fn check_plan(root: &Path, dir: &Path) -> Plan {
    Plan::single_check_task(root.join(dir), rust_checks())
}

pub async fn handle(args: CheckArgs, root: &Path) -> Result<()> {
    let cwd = root.join(&args.dir);
    if !cwd.is_dir() {
        return Err(ExitError::usage(format!("not a directory: {}", cwd.display())).into());
    }
    super::execute(&check_plan(root, &args.dir), args.output).await
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
