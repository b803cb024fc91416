//! Environment-variable indirection for configured directories
//!
//! A directory value starting with `$` or `%` names an environment variable:
//! `$RECORDINGS`, `%USERPROFILE%`, or `$HOME/rec` (which names `HOME`).

use std::path::Path;

use tracing::{debug, warn};

const SIGILS: [char; 2] = ['$', '%'];

/// Returns true when the value uses the `$NAME` / `%NAME%` convention
pub fn has_sigil(value: &str) -> bool {
    value.starts_with(SIGILS)
}

/// Extract the variable name referenced by a sigil-prefixed value.
///
/// Leading sigils are stripped, then the name runs until the first character
/// that cannot appear in a variable name (a trailing `%` or a path separator).
pub fn variable_name(value: &str) -> Option<&str> {
    if !has_sigil(value) {
        return None;
    }
    let rest = value.trim_start_matches(SIGILS);
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// Resolve a configured directory against the environment.
///
/// Substitution happens only when the literal value does not exist on disk.
/// NOTE: this gate looks inverted next to ordinary variable expansion, and
/// older releases disagreed on it. It is kept as-is because existing configs
/// depend on it.
pub fn resolve_dir<E, X>(value: &str, lookup: E, exists: X) -> String
where
    E: Fn(&str) -> Option<String>,
    X: Fn(&Path) -> bool,
{
    let Some(name) = variable_name(value) else {
        return value.to_string();
    };

    if exists(Path::new(value)) {
        debug!(value, "literal directory exists, skipping substitution");
        return value.to_string();
    }

    match lookup(name).filter(|v| !v.is_empty()) {
        Some(resolved) => {
            debug!(value, variable = name, %resolved, "substituted environment variable");
            resolved
        }
        None => {
            warn!(value, variable = name, "environment variable is not set, keeping literal value");
            value.to_string()
        }
    }
}

/// Resolve against the real process environment and filesystem
pub fn resolve_dir_from_env(value: &str) -> String {
    resolve_dir(value, |name| std::env::var(name).ok(), Path::exists)
}
