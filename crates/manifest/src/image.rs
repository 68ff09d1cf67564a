// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build image declaration.
//!
//! Supports two forms in manifests:
//!
//! Short form (name only):
//! ```hcl
//! image = "archlinux"
//! ```
//!
//! Block form:
//! ```hcl
//! image {
//!   name = "archlinux"
//! }
//! ```
//!
//! The image is recorded in plans and reports. Tasks run on the current
//! host; nothing starts a container.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageConfig {
    /// Image name (e.g., "archlinux")
    pub name: String,
}

impl ImageConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<'de> Deserialize<'de> for ImageConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Short(String),
            Block { name: String },
        }

        match Helper::deserialize(deserializer)? {
            Helper::Short(name) | Helper::Block { name } => Ok(ImageConfig { name }),
        }
    }
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
