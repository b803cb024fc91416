//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod encode;
pub mod ports;
pub mod system_check;

// Re-export use cases
pub use encode::{
    plan, EncodeCallbacks, EncodeError, EncodeInput, EncodeOutput, EncodeUseCase,
    EncoderOutcome, EncoderStatus,
};
pub use system_check::Toolchain;
