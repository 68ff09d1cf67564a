// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in check sets.

use serde::{Deserialize, Serialize};

use crate::manifest::CheckDef;

/// Format check; fails if reformatting would be needed.
pub const RUST_FMT: &str = "cargo fmt -- --check";
/// Lint with warnings treated as errors.
pub const RUST_CLIPPY: &str = "cargo clippy --all-targets --all-features -- -D warnings";
/// Test suite with verbose output.
pub const RUST_TEST: &str = "cargo test --verbose";

/// A named, built-in list of checks usable as `preset = "rust"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `cargo fmt`, `cargo clippy`, `cargo test`
    Rust,
}

impl Preset {
    pub fn checks(self) -> Vec<CheckDef> {
        match self {
            Preset::Rust => rust_checks(),
        }
    }
}

/// The format / lint / test trio for a Cargo project.
pub fn rust_checks() -> Vec<CheckDef> {
    vec![
        CheckDef::new("fmt", RUST_FMT),
        CheckDef::new("clippy", RUST_CLIPPY),
        CheckDef::new("test", RUST_TEST),
    ]
}
