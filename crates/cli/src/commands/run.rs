// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt run`: provision, then run manifest tasks in order.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use gt_engine::{build_plan, PlanOptions};

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Manifest file (default: discover gauntlet.{hcl,toml,json})
    #[arg(long, short = 'm', value_name = "PATH")]
    pub manifest: Option<PathBuf>,
    /// Only run this task; repeatable. Selected tasks keep manifest order
    #[arg(long = "task", short = 't', value_name = "NAME")]
    pub tasks: Vec<String>,
    /// Skip the package check, toolchain install, and source clones
    #[arg(long)]
    pub skip_provision: bool,
    #[arg(long = "output", short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

impl RunArgs {
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            tasks: self.tasks.clone(),
            skip_provision: self.skip_provision,
        }
    }
}

pub async fn handle(args: RunArgs, root: &Path) -> Result<()> {
    let loaded = super::load(root, args.manifest.as_deref())?;
    let plan = build_plan(&loaded.manifest, root, &args.plan_options()).map_err(ExitError::usage)?;
    tracing::info!(manifest = %loaded.path.display(), tasks = plan.tasks.len(), "running manifest");
    super::execute(&plan, args.output).await
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
