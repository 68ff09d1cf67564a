// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest file discovery

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::Manifest;
use crate::parser::{parse_manifest_with_format, Format, ParseError};

/// File stem searched for in the project root.
pub const MANIFEST_STEM: &str = "gauntlet";

/// Directory searched for additional manifests.
pub const MANIFEST_DIR: &str = ".gauntlet";

/// Leading comment block extracted from a manifest file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComment {
    /// Text up to the first blank comment line (short description).
    pub short: String,
    /// Remaining comment text after the blank line.
    pub long: String,
}

/// Extract the leading comment block from a manifest file's raw content.
///
/// Reads lines starting with `#`, strips the `# ` prefix, and returns:
/// - `short`: text up to the first blank comment line
/// - `long`: remaining comment text after the blank line
///
/// Returns `None` if the file has no leading comment block.
pub fn extract_file_comment(content: &str) -> Option<FileComment> {
    let mut lines = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            let text = trimmed
                .strip_prefix("# ")
                .unwrap_or(trimmed.strip_prefix('#').unwrap_or(""));
            lines.push(text.to_string());
        } else if trimmed.is_empty() && lines.is_empty() {
            continue;
        } else {
            break;
        }
    }

    if lines.is_empty() {
        return None;
    }

    let split_pos = lines.iter().position(|l| l.is_empty());
    let (short_lines, long_lines) = match split_pos {
        Some(pos) => (&lines[..pos], &lines[pos + 1..]),
        None => (lines.as_slice(), &[][..]),
    };

    Some(FileComment {
        short: short_lines.join("\n"),
        long: long_lines.join("\n"),
    })
}

/// Errors from locating or loading a manifest
#[derive(Debug, Error)]
pub enum FindError {
    #[error("no manifest found in {}; expected gauntlet.hcl, gauntlet.toml or gauntlet.json", .0.display())]
    NotFound(PathBuf),
    #[error("multiple manifests found; use --manifest <file>:\n{}", list_paths(.0))]
    Duplicate(Vec<PathBuf>),
    #[error("unsupported manifest extension: {}", .0.display())]
    UnknownFormat(PathBuf),
    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A manifest together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub format: Format,
    pub manifest: Manifest,
    pub comment: Option<FileComment>,
}

/// Find the single manifest for `root`.
///
/// Candidates are `gauntlet.{hcl,toml,json}` in `root` and any file with
/// those extensions directly under `root/.gauntlet/`.
pub fn find_manifest(root: &Path) -> Result<(PathBuf, Format), FindError> {
    let mut found = Vec::new();
    for format in [Format::Hcl, Format::Toml, Format::Json] {
        let path = root.join(format!("{MANIFEST_STEM}.{}", format.extension()));
        if path.is_file() {
            found.push((path, format));
        }
    }

    let dir = root.join(MANIFEST_DIR);
    if dir.is_dir() {
        let mut nested = Vec::new();
        for entry in std::fs::read_dir(&dir)?.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(format) = Format::from_path(&path) {
                nested.push((path, format));
            }
        }
        nested.sort_by(|a, b| a.0.cmp(&b.0));
        found.extend(nested);
    }

    match found.len() {
        0 => Err(FindError::NotFound(root.to_path_buf())),
        1 => Ok(found.remove(0)),
        _ => Err(FindError::Duplicate(found.into_iter().map(|(p, _)| p).collect())),
    }
}

/// Read and parse the manifest at `path`, detecting the format from its extension.
pub fn load_manifest(path: &Path) -> Result<LoadedManifest, FindError> {
    let format = Format::from_path(path).ok_or_else(|| FindError::UnknownFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path)?;
    let manifest =
        parse_manifest_with_format(&content, format).map_err(|source| FindError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), tasks = manifest.tasks.len(), "loaded manifest");
    Ok(LoadedManifest {
        path: path.to_path_buf(),
        format,
        manifest,
        comment: extract_file_comment(&content),
    })
}

/// Load an explicit manifest, or discover one under `root`.
pub fn resolve_manifest(root: &Path, explicit: Option<&Path>) -> Result<LoadedManifest, FindError> {
    match explicit {
        Some(path) if path.is_absolute() => load_manifest(path),
        Some(path) => load_manifest(&root.join(path)),
        None => {
            let (path, _) = find_manifest(root)?;
            load_manifest(&path)
        }
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
