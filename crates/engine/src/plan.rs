// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve a manifest into the ordered list of tasks to execute.
//!
//! Planning does all template interpolation and provisioning expansion up
//! front, so `gt plan` prints exactly what `gt run` would execute.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use gt_manifest::{
    interpolate_shell_with_env, interpolate_with_env, quote, CheckDef, Manifest, TaskKind,
};

use crate::error::RunError;

/// Name of the synthetic task that installs the toolchain.
pub const TOOLCHAIN_TASK: &str = "toolchain";

/// Name of the synthetic task that clones sources.
pub const SOURCES_TASK: &str = "sources";

/// Name of the single task built by [`Plan::single_check_task`].
pub const CHECK_TASK: &str = "check";

/// Options narrowing what a plan contains.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Only these manifest tasks, kept in manifest order. Empty means all.
    pub tasks: Vec<String>,
    /// Leave out package checks, toolchain install, and source clones.
    pub skip_provision: bool,
}

/// What a planned task executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskBody {
    /// One fail-fast script.
    Shell(String),
    /// Every check runs, then the results are aggregated.
    Checks(Vec<CheckDef>),
}

impl TaskBody {
    pub fn label(&self) -> &'static str {
        match self {
            TaskBody::Shell(_) => "shell",
            TaskBody::Checks(_) => "checks",
        }
    }
}

/// A task with scripts interpolated and its directory resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub name: String,
    pub description: Option<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
    pub body: TaskBody,
}

/// Ordered tasks for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub image: Option<String>,
    /// Executables that must be on `PATH` before anything runs.
    pub packages: Vec<String>,
    pub tasks: Vec<PlannedTask>,
}

impl Plan {
    /// A plan with one check task running `checks` in `cwd`.
    pub fn single_check_task(cwd: impl Into<PathBuf>, checks: Vec<CheckDef>) -> Self {
        Self {
            image: None,
            packages: Vec::new(),
            tasks: vec![PlannedTask {
                name: CHECK_TASK.to_string(),
                description: None,
                cwd: cwd.into(),
                env: Vec::new(),
                body: TaskBody::Checks(checks),
            }],
        }
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Variables available to `${...}` references in scripts.
pub fn template_vars(manifest: &Manifest, root: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("root".to_string(), root.display().to_string());
    if let Some(toolchain) = &manifest.toolchain {
        vars.insert("channel".to_string(), toolchain.channel.clone());
        vars.insert("profile".to_string(), toolchain.profile.clone());
    }
    for source in manifest.sources.values() {
        vars.insert(
            format!("source.{}.dir", source.name),
            root.join(source.checkout_dir()).display().to_string(),
        );
    }
    vars
}

/// Build the run plan for `manifest` rooted at `root`.
pub fn build_plan(manifest: &Manifest, root: &Path, options: &PlanOptions) -> Result<Plan, RunError> {
    for name in &options.tasks {
        if manifest.get_task(name).is_none() {
            return Err(RunError::UnknownTask {
                name: name.clone(),
                available: manifest.task_names().map(String::from).collect(),
            });
        }
    }

    let vars = template_vars(manifest, root);
    let mut plan = Plan {
        image: manifest.image.as_ref().map(|i| i.name.clone()),
        ..Plan::default()
    };

    if !options.skip_provision {
        plan.packages = manifest.packages.clone();
        if let Some(toolchain) = &manifest.toolchain {
            plan.tasks.push(provision_task(
                TOOLCHAIN_TASK,
                root,
                toolchain.install_script(),
            ));
        }
        if let Some(script) = sources_script(manifest) {
            plan.tasks.push(provision_task(SOURCES_TASK, root, script));
        }
    }

    for task in manifest.tasks.values() {
        if !options.tasks.is_empty() && !options.tasks.contains(&task.name) {
            continue;
        }
        let task_env: HashMap<String, String> =
            task.env.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        // cwd is a filesystem path, not shell text
        let cwd = match &task.dir {
            Some(dir) => root.join(interpolate_with_env(dir, &vars, &task_env)),
            None => root.to_path_buf(),
        };
        let script = |s: &str| interpolate_shell_with_env(s, &vars, &task_env);
        let body = match task.kind() {
            TaskKind::Shell(run) => TaskBody::Shell(script(&run)),
            TaskKind::Checks(checks) => TaskBody::Checks(
                checks
                    .into_iter()
                    .map(|c| CheckDef::new(c.name, script(&c.run)))
                    .collect(),
            ),
        };
        plan.tasks.push(PlannedTask {
            name: task.name.clone(),
            description: task.description.clone(),
            cwd,
            env: task.env.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            body,
        });
    }

    tracing::debug!(tasks = ?plan.task_names(), "built plan");
    Ok(plan)
}

fn provision_task(name: &str, root: &Path, script: String) -> PlannedTask {
    PlannedTask {
        name: name.to_string(),
        description: None,
        cwd: root.to_path_buf(),
        env: Vec::new(),
        body: TaskBody::Shell(script),
    }
}

/// One `test -d <dir> || git clone ...` line per source.
fn sources_script(manifest: &Manifest) -> Option<String> {
    if manifest.sources.is_empty() {
        return None;
    }
    let lines: Vec<String> = manifest
        .sources
        .values()
        .map(|source| {
            let dir = quote(source.checkout_dir());
            let branch = match &source.branch {
                Some(b) => format!("--branch {} ", quote(b)),
                None => String::new(),
            };
            format!("test -d {dir} || git clone {branch}{} {dir}", quote(&source.url))
        })
        .collect();
    Some(lines.join("\n"))
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
