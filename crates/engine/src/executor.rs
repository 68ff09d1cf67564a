// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution seam between the engine and real processes.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use gt_core::CommandResult;
use gt_shell::{OutputMode, ShellExecutor};

/// One script to run to completion.
#[derive(Debug, Clone, Copy)]
pub struct CommandRequest<'a> {
    pub script: &'a str,
    pub cwd: &'a Path,
    pub env: &'a [(String, String)],
    /// Stop the script at its first failing command.
    pub fail_fast: bool,
}

/// What came back from running a [`CommandRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub result: CommandResult,
    pub duration: Duration,
    /// Captured output, when the executor captures instead of inheriting.
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl Completed {
    pub fn new(result: CommandResult, duration: Duration) -> Self {
        Self {
            result,
            duration,
            stdout: None,
            stderr: None,
        }
    }
}

/// Runs scripts for the engine.
///
/// Implementations never fail: a script that cannot be started is reported
/// as a non-zero exit so the caller's aggregation sees it like any other
/// failing command.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, request: CommandRequest<'_>) -> Completed;
}

/// Executor backed by `sh` through [`ShellExecutor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandExecutor {
    output: OutputMode,
}

impl ShellCommandExecutor {
    pub fn new(output: OutputMode) -> Self {
        Self { output }
    }
}

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    async fn execute(&self, request: CommandRequest<'_>) -> Completed {
        let shell = ShellExecutor::new()
            .cwd(request.cwd)
            .envs(request.env.iter().cloned())
            .fail_fast(request.fail_fast)
            .output(self.output);

        match shell.execute_str(request.script).await {
            Ok(output) => Completed {
                result: output.result(),
                duration: output.duration,
                stdout: output.stdout_snippet,
                stderr: output.stderr_snippet,
            },
            Err(e) => {
                tracing::error!(script = request.script, error = %e, "command did not start");
                Completed {
                    stderr: Some(e.to_string()),
                    ..Completed::new(CommandResult::new(e.exit_code()), Duration::ZERO)
                }
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{CommandExecutor, CommandRequest, Completed};
    use async_trait::async_trait;
    use gt_core::CommandResult;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ExecCall {
        pub script: String,
        pub cwd: PathBuf,
        pub env: Vec<(String, String)>,
        pub fail_fast: bool,
    }

    #[derive(Default)]
    struct FakeExecState {
        calls: Vec<ExecCall>,
        exit_codes: HashMap<String, i32>,
    }

    /// Fake executor for testing.
    ///
    /// Every script exits 0 unless an exit code was set for it with
    /// [`FakeExecutor::exit_with`].
    #[derive(Clone, Default)]
    pub struct FakeExecutor {
        inner: Arc<Mutex<FakeExecState>>,
    }

    impl FakeExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make `script` exit with `code`.
        pub fn exit_with(self, script: &str, code: i32) -> Self {
            self.inner.lock().exit_codes.insert(script.to_string(), code);
            self
        }

        /// Get all recorded invocations, in order.
        pub fn calls(&self) -> Vec<ExecCall> {
            self.inner.lock().calls.clone()
        }

        /// Scripts run so far, in order.
        pub fn scripts(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|c| c.script.clone()).collect()
        }
    }

    #[async_trait]
    impl CommandExecutor for FakeExecutor {
        async fn execute(&self, request: CommandRequest<'_>) -> Completed {
            let mut state = self.inner.lock();
            state.calls.push(ExecCall {
                script: request.script.to_string(),
                cwd: request.cwd.to_path_buf(),
                env: request.env.to_vec(),
                fail_fast: request.fail_fast,
            });
            let code = state.exit_codes.get(request.script).copied().unwrap_or(0);
            Completed::new(CommandResult::new(code), Duration::from_millis(1))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecCall, FakeExecutor};

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
