// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt plan`: print what `gt run` would execute.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use gt_engine::{build_plan, PlanOptions};

use crate::exit_error::ExitError;
use crate::output::{plan_json, render_plan, OutputFormat};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Manifest file (default: discover gauntlet.{hcl,toml,json})
    #[arg(long, short = 'm', value_name = "PATH")]
    pub manifest: Option<PathBuf>,
    /// Only plan this task; repeatable
    #[arg(long = "task", short = 't', value_name = "NAME")]
    pub tasks: Vec<String>,
    /// Leave out provisioning
    #[arg(long)]
    pub skip_provision: bool,
    #[arg(long = "output", short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn handle(args: PlanArgs, root: &Path) -> Result<()> {
    let loaded = super::load(root, args.manifest.as_deref())?;
    let options = PlanOptions {
        tasks: args.tasks,
        skip_provision: args.skip_provision,
    };
    let plan = build_plan(&loaded.manifest, root, &options).map_err(ExitError::usage)?;
    match args.output {
        OutputFormat::Text => {
            let description = loaded.comment.as_ref().map(|c| c.short.as_str());
            print!("{}", render_plan(&plan, &loaded.path, description));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan_json(&plan, &loaded.path))?);
        }
    }
    Ok(())
}
