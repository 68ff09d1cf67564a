// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest parsing and validation

use std::collections::HashSet;
use std::path::{Component, Path};

use thiserror::Error;

use crate::manifest::{Manifest, RESERVED_TASK_NAMES};

/// Manifest file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Hcl,
    Toml,
    Json,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("hcl") => Some(Format::Hcl),
            Some("toml") => Some(Format::Toml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Hcl => "hcl",
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }
}

/// Errors from parsing or validating a manifest
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{location}: {message}")]
    Invalid { location: String, message: String },
}

impl ParseError {
    fn invalid(location: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::Invalid {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Parse a TOML manifest.
pub fn parse_manifest(content: &str) -> Result<Manifest, ParseError> {
    parse_manifest_with_format(content, Format::Toml)
}

/// Parse and validate a manifest in the given format.
pub fn parse_manifest_with_format(content: &str, format: Format) -> Result<Manifest, ParseError> {
    let mut manifest: Manifest = match format {
        Format::Hcl => hcl::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    manifest.inject_names();
    validate(&manifest)?;
    Ok(manifest)
}

/// Check the structural rules serde cannot express.
pub fn validate(manifest: &Manifest) -> Result<(), ParseError> {
    if manifest.tasks.is_empty() {
        return Err(ParseError::invalid("manifest", "no tasks defined"));
    }

    for (i, package) in manifest.packages.iter().enumerate() {
        if package.trim().is_empty() {
            return Err(ParseError::invalid(format!("packages[{i}]"), "empty package name"));
        }
    }

    if let Some(image) = &manifest.image {
        if image.name.trim().is_empty() {
            return Err(ParseError::invalid("image", "empty image name"));
        }
    }

    if let Some(toolchain) = &manifest.toolchain {
        if toolchain.channel.trim().is_empty() {
            return Err(ParseError::invalid("toolchain.channel", "must not be empty"));
        }
        if toolchain.profile.trim().is_empty() {
            return Err(ParseError::invalid("toolchain.profile", "must not be empty"));
        }
        if toolchain.components.iter().any(|c| c.trim().is_empty()) {
            return Err(ParseError::invalid("toolchain.components", "empty component name"));
        }
    }

    let mut checkout_dirs = HashSet::new();
    for source in manifest.sources.values() {
        let location = format!("source.{}", source.name);
        if source.url.trim().is_empty() {
            return Err(ParseError::invalid(format!("{location}.url"), "must not be empty"));
        }
        validate_relative_dir(&format!("{location}.dir"), source.checkout_dir())?;
        if !checkout_dirs.insert(source.checkout_dir()) {
            return Err(ParseError::invalid(
                format!("{location}.dir"),
                format!("directory '{}' is used by another source", source.checkout_dir()),
            ));
        }
    }

    for task in manifest.tasks.values() {
        let location = format!("task.{}", task.name);
        if RESERVED_TASK_NAMES.contains(&task.name.as_str()) {
            return Err(ParseError::invalid(location, "task name is reserved"));
        }
        if let Some(dir) = &task.dir {
            validate_relative_dir(&format!("{location}.dir"), dir)?;
        }

        let bodies = [
            task.run.is_some(),
            !task.checks.is_empty(),
            task.preset.is_some(),
        ];
        match bodies.iter().filter(|set| **set).count() {
            0 => {
                return Err(ParseError::invalid(
                    location,
                    "needs one of `run`, `check` blocks, or `preset`",
                ))
            }
            1 => {}
            _ => {
                return Err(ParseError::invalid(
                    location,
                    "`run`, `check` blocks, and `preset` are mutually exclusive",
                ))
            }
        }

        if let Some(run) = &task.run {
            if run.trim().is_empty() {
                return Err(ParseError::invalid(format!("{location}.run"), "must not be empty"));
            }
        }
        for check in task.checks.values() {
            if check.run.trim().is_empty() {
                return Err(ParseError::invalid(
                    format!("{location}.check.{}.run", check.name),
                    "must not be empty",
                ));
            }
        }
    }

    Ok(())
}

/// Directories must stay inside the project root.
fn validate_relative_dir(location: &str, dir: &str) -> Result<(), ParseError> {
    if dir.trim().is_empty() {
        return Err(ParseError::invalid(location, "must not be empty"));
    }
    let path = Path::new(dir);
    if path.is_absolute() {
        return Err(ParseError::invalid(location, format!("'{dir}' must be relative")));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ParseError::invalid(location, format!("'{dir}' must not contain '..'")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
