// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt: run a project's build, check, and test tasks from a manifest.

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{check, plan, run, validate};

#[derive(Parser)]
#[command(name = "gt", version, about = "Gauntlet: run CI tasks from a manifest")]
#[command(styles = color::styles())]
struct Cli {
    /// Project root (default: current directory)
    #[arg(short = 'C', global = true, value_name = "DIR")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Provision, then run manifest tasks in order
    Run(run::RunArgs),
    /// Run cargo fmt, clippy, and test without a manifest
    Check(check::CheckArgs),
    /// Print the commands a run would execute
    Plan(plan::PlanArgs),
    /// Parse and validate the manifest
    Validate(validate::ValidateArgs),
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();
    if let Err(err) = dispatch(cli).await {
        let code = exit_error::exit_code_for(&err);
        let message = format!("{err:#}");
        if !message.is_empty() {
            eprintln!("gt: {message}");
        }
        std::process::exit(code);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = match cli.directory {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    if !root.is_dir() {
        return Err(exit_error::ExitError::usage(format!(
            "project root is not a directory: {}",
            root.display()
        ))
        .into());
    }
    tracing::debug!(root = %root.display(), "resolved project root");

    match cli.command {
        Command::Run(args) => run::handle(args, &root).await,
        Command::Check(args) => check::handle(args, &root).await,
        Command::Plan(args) => plan::handle(args, &root),
        Command::Validate(args) => validate::handle(args, &root),
    }
}
