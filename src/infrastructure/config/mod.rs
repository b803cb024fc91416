//! Configuration infrastructure module

mod yaml;

pub use yaml::{YamlConfigStore, CONFIG_FILE_NAMES};
