//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod runner;
pub mod toolchain;

// Re-export common types
pub use config::ConfigStore;
pub use runner::{EncoderRunner, RunError};
pub use toolchain::{ToolError, ToolLocator};
