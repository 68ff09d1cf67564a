// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template variable interpolation for task scripts

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex pattern for ${variable_name} or ${namespace.variable_name}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_-]*)*)\}")
        .expect("constant regex pattern is valid")
});

// Regex pattern for ${VAR:-default} environment variable expansion
#[allow(clippy::expect_used)]
static ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+):-([^}]*)\}").expect("constant regex pattern is valid"));

// Words that need no quoting in a shell command line
#[allow(clippy::expect_used)]
static BARE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_./:@%+=,-]+$").expect("constant regex pattern is valid")
});

/// Escape a string for use inside a double-quoted shell string.
///
/// Backslash, `$`, backtick and `"` are backslash-escaped. Scripts should
/// reference variables as `"${name}"`.
pub fn escape_for_shell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '$' | '`' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Quote a single shell word, leaving plain words untouched.
pub fn quote(word: &str) -> String {
    if BARE_WORD.is_match(word) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}

/// Interpolate `${name}` placeholders with values from the vars map
///
/// Also expands `${VAR:-default}` patterns from environment variables.
/// Environment variables are expanded first, then template variables.
///
/// Unknown template variables are left as-is.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    interpolate_inner(template, vars, &HashMap::new(), false)
}

/// Interpolate `${name}` placeholders with shell-safe escaping.
///
/// Like [`interpolate`], but escapes substituted values for double-quoted
/// shell contexts. Use this for task scripts.
pub fn interpolate_shell(template: &str, vars: &HashMap<String, String>) -> String {
    interpolate_inner(template, vars, &HashMap::new(), true)
}

/// [`interpolate`] with `env` layered over the process environment.
pub fn interpolate_with_env(
    template: &str,
    vars: &HashMap<String, String>,
    env: &HashMap<String, String>,
) -> String {
    interpolate_inner(template, vars, env, false)
}

/// [`interpolate_shell`] with `env` layered over the process environment.
///
/// `${VAR:-default}` resolves against the same variables the command will
/// see: `env` first, then the process environment.
pub fn interpolate_shell_with_env(
    template: &str,
    vars: &HashMap<String, String>,
    env: &HashMap<String, String>,
) -> String {
    interpolate_inner(template, vars, env, true)
}

fn interpolate_inner(
    template: &str,
    vars: &HashMap<String, String>,
    env: &HashMap<String, String>,
    shell_escape: bool,
) -> String {
    let result = ENV_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            let var_name = &caps[1];
            let default_value = &caps[2];
            let value = match env.get(var_name) {
                Some(value) => value.clone(),
                None => std::env::var(var_name).unwrap_or_else(|_| default_value.to_string()),
            };
            if shell_escape {
                escape_for_shell(&value)
            } else {
                value
            }
        })
        .to_string();

    VAR_PATTERN
        .replace_all(&result, |caps: &regex::Captures| {
            let name = &caps[1];
            match vars.get(name) {
                Some(val) if shell_escape => escape_for_shell(val),
                Some(val) => val.clone(),
                None => caps[0].to_string(),
            }
        })
        .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
