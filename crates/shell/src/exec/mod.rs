// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script executor with a builder for working directory, environment, and
//! output handling.

mod error;
mod result;
mod run;

pub use error::ExecError;
pub use result::CommandOutput;

use std::path::{Path, PathBuf};

/// Default number of bytes kept from each captured stream.
pub const DEFAULT_SNIPPET_LIMIT: usize = 4096;

/// Where a script's stdout and stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Pass through to this process's terminal.
    #[default]
    Inherit,
    /// Pipe and keep the first `limit` bytes of each stream.
    Capture { limit: usize },
}

/// Runs scripts through `sh`, one at a time, to completion.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    pub(crate) cwd: Option<PathBuf>,
    pub(crate) env: Vec<(String, String)>,
    pub(crate) fail_fast: bool,
    pub(crate) output: OutputMode,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run scripts in `dir` instead of the current directory.
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn envs<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Stop a script at its first failing command (`sh -e`).
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// The argv that [`execute_str`](Self::execute_str) would spawn.
    pub fn argv(&self, script: &str) -> Vec<String> {
        run::shell_argv(script, self.fail_fast)
    }

    /// Run `script` to completion.
    ///
    /// A non-zero exit is reported in the output, not as an error.
    pub async fn execute_str(&self, script: &str) -> Result<CommandOutput, ExecError> {
        run::execute_script(self, script).await
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
