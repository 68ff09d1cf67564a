// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process spawning for a single script.

use std::process::Stdio;
use std::time::Instant;

use tracing::Instrument;

use super::error::ExecError;
use super::result::CommandOutput;
use super::{OutputMode, ShellExecutor};

/// Program used to interpret scripts.
pub(crate) const SHELL: &str = "sh";

/// Build the argv used to run `script`.
pub(crate) fn shell_argv(script: &str, fail_fast: bool) -> Vec<String> {
    let mut argv = vec![SHELL.to_string()];
    if fail_fast {
        argv.push("-e".to_string());
    }
    argv.push("-c".to_string());
    argv.push(script.to_string());
    argv
}

/// Spawn `sh -c <script>` and wait for it to exit.
pub(crate) async fn execute_script(
    exec: &ShellExecutor,
    script: &str,
) -> Result<CommandOutput, ExecError> {
    if let Some(cwd) = &exec.cwd {
        if !cwd.is_dir() {
            return Err(ExecError::MissingDirectory { path: cwd.clone() });
        }
    }

    let start = Instant::now();
    let argv = shell_argv(script, exec.fail_fast);

    let cmd_span = tracing::info_span!(
        "shell.cmd",
        script = %script,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(&argv[0]);
    process.args(&argv[1..]);
    if let Some(cwd) = &exec.cwd {
        process.current_dir(cwd);
    }
    process.envs(exec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    process.stdin(Stdio::null());

    let (exit_code, stdout_snippet, stderr_snippet) = spawn_and_wait(&mut process, exec.output)
        .instrument(cmd_span.clone())
        .await?;

    let duration = start.elapsed();
    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", duration.as_millis() as u64);
    tracing::debug!(parent: &cmd_span, exit_code, "script finished");

    Ok(CommandOutput {
        exit_code,
        duration,
        stdout_snippet,
        stderr_snippet,
    })
}

type Collected = (i32, Option<String>, Option<String>);

async fn spawn_and_wait(
    process: &mut tokio::process::Command,
    mode: OutputMode,
) -> Result<Collected, ExecError> {
    let spawn_err = |source| ExecError::SpawnFailed {
        command: SHELL.to_string(),
        source,
    };

    match mode {
        OutputMode::Inherit => {
            process.stdout(Stdio::inherit());
            process.stderr(Stdio::inherit());
            let status = process.spawn().map_err(spawn_err)?.wait().await.map_err(spawn_err)?;
            Ok((status.code().unwrap_or(gt_core::EXIT_NO_CODE), None, None))
        }
        OutputMode::Capture { limit } => {
            process.stdout(Stdio::piped());
            process.stderr(Stdio::piped());
            let output = process
                .spawn()
                .map_err(spawn_err)?
                .wait_with_output()
                .await
                .map_err(spawn_err)?;
            Ok((
                output.status.code().unwrap_or(gt_core::EXIT_NO_CODE),
                truncate_snippet(&output.stdout, limit),
                truncate_snippet(&output.stderr, limit),
            ))
        }
    }
}

/// Truncate captured output to at most `limit` bytes on a char boundary.
fn truncate_snippet(bytes: &[u8], limit: usize) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let s = String::from_utf8_lossy(bytes);
    if s.len() <= limit {
        return Some(s.into_owned());
    }
    let mut end = limit;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Some(s[..end].to_string())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
