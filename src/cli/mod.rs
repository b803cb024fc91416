//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, run_with, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, USAGE};
pub use logging::init_logging;
pub use presenter::Presenter;
