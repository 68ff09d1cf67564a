// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt validate`: parse and validate a manifest without running it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use gt_manifest::LoadedManifest;

use crate::output::{format_or_json, OutputFormat};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest file (default: discover gauntlet.{hcl,toml,json})
    #[arg(long, short = 'm', value_name = "PATH")]
    pub manifest: Option<PathBuf>,
    #[arg(long = "output", short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// JSON summary of a valid manifest.
pub fn summary(loaded: &LoadedManifest) -> serde_json::Value {
    serde_json::json!({
        "valid": true,
        "manifest": loaded.path,
        "format": loaded.format.extension(),
        "tasks": loaded.manifest.task_names().collect::<Vec<_>>(),
    })
}

pub fn handle(args: ValidateArgs, root: &Path) -> Result<()> {
    let loaded = super::load(root, args.manifest.as_deref())?;
    format_or_json(args.output, &summary(&loaded), || println!("ok"))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
