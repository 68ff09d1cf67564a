// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toolchain provisioning through `rustup`.
//!
//! ```hcl
//! toolchain {
//!   channel    = "nightly"
//!   components = ["rustfmt", "clippy"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::template::quote;

pub const DEFAULT_PROFILE: &str = "minimal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainDef {
    /// Release channel, e.g. "stable", "nightly", "1.75.0"
    pub channel: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Add-on components installed with the toolchain.
    #[serde(default)]
    pub components: Vec<String>,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

impl ToolchainDef {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            profile: default_profile(),
            components: Vec::new(),
        }
    }

    pub fn with_components<S: Into<String>>(mut self, components: impl IntoIterator<Item = S>) -> Self {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }

    /// Commands that install the toolchain and make it the default.
    pub fn install_commands(&self) -> Vec<String> {
        let mut install = format!(
            "rustup toolchain install {} --profile {}",
            quote(&self.channel),
            quote(&self.profile)
        );
        for component in &self.components {
            install.push_str(" -c ");
            install.push_str(&quote(component));
        }
        vec![install, format!("rustup default {}", quote(&self.channel))]
    }

    /// [`install_commands`](Self::install_commands) joined into one script.
    pub fn install_script(&self) -> String {
        self.install_commands().join("\n")
    }
}

#[cfg(test)]
#[path = "toolchain_tests.rs"]
mod tests;
