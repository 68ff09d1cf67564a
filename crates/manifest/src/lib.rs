// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt-manifest: build manifest model, parsing, and discovery.
//!
//! A manifest declares an image, host packages, sources to clone, a
//! toolchain to install, and an ordered list of tasks. Manifests may be
//! written in HCL, TOML, or JSON.

pub mod find;
pub mod image;
pub mod manifest;
pub mod parser;
pub mod preset;
pub mod template;
pub mod toolchain;

pub use find::{
    extract_file_comment, find_manifest, load_manifest, resolve_manifest, FileComment, FindError,
    LoadedManifest, MANIFEST_DIR, MANIFEST_STEM,
};
pub use image::ImageConfig;
pub use manifest::{CheckDef, Manifest, SourceDef, TaskDef, TaskKind, RESERVED_TASK_NAMES};
pub use parser::{parse_manifest, parse_manifest_with_format, validate, Format, ParseError};
pub use preset::{rust_checks, Preset, RUST_CLIPPY, RUST_FMT, RUST_TEST};
pub use template::{
    escape_for_shell, interpolate, interpolate_shell, interpolate_shell_with_env,
    interpolate_with_env, quote,
};
pub use toolchain::{ToolchainDef, DEFAULT_PROFILE};
