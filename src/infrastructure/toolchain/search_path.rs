//! Search-path executable lookup adapter

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::ports::{ToolError, ToolLocator};

/// Finds executables the way a shell would, by walking `PATH`
pub struct SearchPathLocator {
    path_var: Option<OsString>,
}

impl SearchPathLocator {
    /// Use the process `PATH`
    pub fn new() -> Self {
        Self {
            path_var: env::var_os("PATH"),
        }
    }

    /// Use an explicit `PATH` value
    pub fn with_path(path_var: impl Into<OsString>) -> Self {
        Self {
            path_var: Some(path_var.into()),
        }
    }

    /// File names tried for a tool inside one directory
    fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
        #[cfg(windows)]
        {
            let exts = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
            let mut out = vec![dir.join(tool)];
            out.extend(
                exts.split(';')
                    .filter(|e| !e.is_empty())
                    .map(|ext| dir.join(format!("{}{}", tool, ext))),
            );
            out
        }

        #[cfg(not(windows))]
        {
            vec![dir.join(tool)]
        }
    }
}

impl Default for SearchPathLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolLocator for SearchPathLocator {
    fn locate(&self, tool: &str) -> Result<PathBuf, ToolError> {
        let not_found = || ToolError::NotFound {
            tool: tool.to_string(),
        };
        let path_var = self.path_var.as_ref().ok_or_else(not_found)?;

        env::split_paths(path_var)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| Self::candidates(&dir, tool))
            .find(|candidate| is_executable(candidate))
            .ok_or_else(not_found)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
