//! Domain error types

use thiserror::Error;

/// Error when loading configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("No config.yaml found. Searched: {searched}")]
    NotFound { searched: String },

    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Unable to map config file onto settings: {0}")]
    MapError(String),
}

impl ConfigError {
    /// Build a `NotFound` error listing every directory that was searched
    pub fn not_found<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<std::path::Path>,
    {
        let searched = dirs
            .into_iter()
            .map(|d| d.as_ref().display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::NotFound { searched }
    }
}
