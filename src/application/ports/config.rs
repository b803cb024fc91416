//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::EncodeConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the encoding configuration.
    ///
    /// # Returns
    /// The parsed config, or an error if the file is missing or malformed
    async fn load(&self) -> Result<EncodeConfig, ConfigError>;

    /// Path of the config file that would be loaded, if one was found.
    fn path(&self) -> Option<PathBuf>;
}
