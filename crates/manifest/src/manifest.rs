// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest model: image, packages, sources, toolchain, and ordered tasks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::image::ImageConfig;
use crate::preset::Preset;
use crate::toolchain::ToolchainDef;

/// Names the runner uses for its own provisioning tasks.
pub const RESERVED_TASK_NAMES: &[&str] = &["toolchain", "sources"];

/// A parsed build manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub image: Option<ImageConfig>,
    /// Host packages the image is expected to provide.
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default, rename = "source")]
    pub sources: IndexMap<String, SourceDef>,
    #[serde(default)]
    pub toolchain: Option<ToolchainDef>,
    #[serde(default, rename = "task")]
    pub tasks: IndexMap<String, TaskDef>,
}

impl Manifest {
    pub fn get_task(&self, name: &str) -> Option<&TaskDef> {
        self.tasks.get(name)
    }

    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Fill `name` fields from their map keys.
    pub(crate) fn inject_names(&mut self) {
        for (name, source) in &mut self.sources {
            source.name = name.clone();
        }
        for (name, task) in &mut self.tasks {
            task.name = name.clone();
            for (check_name, check) in &mut task.checks {
                check.name = check_name.clone();
            }
        }
    }
}

/// A repository to clone before tasks run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDef {
    /// Source name (injected from map key)
    #[serde(skip)]
    pub name: String,
    pub url: String,
    /// Checkout directory relative to the project root; defaults to the name.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

impl SourceDef {
    pub fn checkout_dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(&self.name)
    }
}

/// One task in the manifest.
///
/// Exactly one of `run`, `check` blocks, or `preset` is set (enforced at
/// parse time).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDef {
    /// Task name (injected from map key)
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Working directory relative to the project root.
    #[serde(default)]
    pub dir: Option<String>,
    /// Extra environment variables for every command in the task.
    #[serde(default)]
    pub env: IndexMap<String, String>,
    /// Shell script, run with `sh -e`.
    #[serde(default)]
    pub run: Option<String>,
    #[serde(default, rename = "check")]
    pub checks: IndexMap<String, CheckDef>,
    #[serde(default)]
    pub preset: Option<Preset>,
}

impl TaskDef {
    /// What this task executes.
    ///
    /// Only meaningful on a validated manifest; an invalid task with
    /// nothing set reads as an empty check list.
    pub fn kind(&self) -> TaskKind {
        if let Some(script) = &self.run {
            return TaskKind::Shell(script.clone());
        }
        if let Some(preset) = self.preset {
            return TaskKind::Checks(preset.checks());
        }
        TaskKind::Checks(self.checks.values().cloned().collect())
    }
}

/// Resolved body of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// A fail-fast shell script.
    Shell(String),
    /// Independent checks, all run, then aggregated.
    Checks(Vec<CheckDef>),
}

/// One command inside a check task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckDef {
    /// Check name (injected from map key)
    #[serde(skip)]
    pub name: String,
    pub run: String,
}

impl CheckDef {
    pub fn new(name: impl Into<String>, run: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run: run.into(),
        }
    }
}
