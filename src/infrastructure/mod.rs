//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the search path and child processes.

pub mod config;
pub mod process;
pub mod toolchain;

// Re-export adapters
pub use config::YamlConfigStore;
pub use process::ProcessRunner;
pub use toolchain::SearchPathLocator;
