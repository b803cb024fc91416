//! Encoder executable lookup port

use std::path::PathBuf;

use thiserror::Error;

/// Tool lookup errors
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    #[error("Could not find {tool} in PATH")]
    NotFound { tool: String },
}

/// Port for locating external executables
pub trait ToolLocator: Send + Sync {
    /// Resolve a tool name to the executable that would be run.
    fn locate(&self, tool: &str) -> Result<PathBuf, ToolError>;
}
