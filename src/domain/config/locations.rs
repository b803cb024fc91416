//! Input and output locations after overrides and environment resolution

use std::path::{Path, PathBuf};

use super::encode_config::EncodeConfig;
use super::env_path::resolve_dir;

/// Where the WAV file is read from and where encoded files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// Configured recording directory (not consulted with a direct input)
    pub record_dir: PathBuf,
    /// Directory receiving `.opus` and `.mp3` files
    pub output_dir: PathBuf,
    /// Explicit input file, bypassing `record_dir`
    pub direct_input: Option<PathBuf>,
}

impl Locations {
    /// Resolve configured directories, letting command-line paths win outright.
    ///
    /// Environment indirection only applies to values taken from the config.
    /// A direct input leaves `record_dir` as configured.
    pub fn resolve<E, X>(
        config: &EncodeConfig,
        direct_in: Option<&Path>,
        direct_out: Option<&Path>,
        lookup: E,
        exists: X,
    ) -> Self
    where
        E: Fn(&str) -> Option<String>,
        X: Fn(&Path) -> bool,
    {
        let record_dir = PathBuf::from(resolve_dir(&config.record_directory, &lookup, &exists));
        let output_dir = match direct_out {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(resolve_dir(&config.output_directory, &lookup, &exists)),
        };

        Self {
            record_dir,
            output_dir,
            direct_input: direct_in.map(Path::to_path_buf),
        }
    }

    /// Resolve against the real process environment and filesystem
    pub fn resolve_from_env(
        config: &EncodeConfig,
        direct_in: Option<&Path>,
        direct_out: Option<&Path>,
    ) -> Self {
        Self::resolve(
            config,
            direct_in,
            direct_out,
            |name| std::env::var(name).ok(),
            Path::exists,
        )
    }

    /// The WAV file to encode, or `None` when neither a direct input nor a
    /// file name was given.
    pub fn input_file(&self, file_name: Option<&str>) -> Option<PathBuf> {
        if let Some(ref direct) = self.direct_input {
            return Some(direct.clone());
        }
        file_name.map(|name| self.record_dir.join(name))
    }
}
