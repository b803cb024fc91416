//! YAML config store adapter

use std::env;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use figment::error::Kind;
use figment::providers::{Format, Yaml};
use figment::value::{Dict, Value};
use figment::Figment;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::EncodeConfig;
use crate::domain::error::ConfigError;

/// File names tried in each search directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml"];

/// Config store reading `config.yaml` from a list of directories
pub struct YamlConfigStore {
    search_dirs: Vec<PathBuf>,
}

impl YamlConfigStore {
    /// Search beside the executable, then in the working directory
    pub fn new() -> Self {
        let mut search_dirs = Vec::new();
        if let Some(dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            search_dirs.push(dir);
        }
        if let Ok(cwd) = env::current_dir() {
            if !search_dirs.contains(&cwd) {
                search_dirs.push(cwd);
            }
        }
        Self { search_dirs }
    }

    /// Search only the given directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dirs: vec![dir.into()],
        }
    }

    /// Directories searched for the config file
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Parse YAML content into EncodeConfig.
    ///
    /// Top-level keys are matched without regard to case. Syntax errors are
    /// `ParseError`; values of the wrong type are `MapError`.
    fn parse_yaml(content: &str) -> Result<EncodeConfig, ConfigError> {
        let dict = Figment::from(Yaml::string(content))
            .extract::<Dict>()
            .map_err(classify)?;

        Value::from(fold_key_case(dict))
            .deserialize::<EncodeConfig>()
            .map_err(classify)
    }
}

fn classify(e: figment::Error) -> ConfigError {
    match e.kind {
        Kind::Message(_) => ConfigError::ParseError(e.to_string()),
        _ => ConfigError::MapError(e.to_string()),
    }
}

/// Lowercase every top-level key. When two keys differ only in case, the
/// one sorting last (the lowercase spelling) wins.
fn fold_key_case(dict: Dict) -> Dict {
    dict.into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}

impl Default for YamlConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for YamlConfigStore {
    async fn load(&self) -> Result<EncodeConfig, ConfigError> {
        let path = self
            .path()
            .ok_or_else(|| ConfigError::not_found(&self.search_dirs))?;
        debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        Self::parse_yaml(&content)
    }

    fn path(&self) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }
}
