//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod encoding;
pub mod error;

// Re-export common types
pub use config::{EncodeConfig, Locations};
pub use encoding::{Encoder, EncoderInvocation, RunDate};
pub use error::*;
