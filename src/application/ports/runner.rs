//! Encoder execution port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::encoding::{Encoder, EncoderInvocation};

/// Subprocess errors. These are reported, never fatal.
#[derive(Debug, Clone, Error)]
pub enum RunError {
    #[error("I couldn't run {encoder}: {message}")]
    LaunchFailed { encoder: Encoder, message: String },

    #[error("{encoder} exited with {status}")]
    ExitStatus { encoder: Encoder, status: String },
}

impl RunError {
    pub fn encoder(&self) -> Encoder {
        match self {
            RunError::LaunchFailed { encoder, .. } | RunError::ExitStatus { encoder, .. } => {
                *encoder
            }
        }
    }
}

/// Port for running one encoder to completion
#[async_trait]
pub trait EncoderRunner: Send + Sync {
    /// Run the invocation with inherited stdout/stderr and wait for it to exit.
    ///
    /// # Returns
    /// `Ok(())` on a zero exit status
    async fn run(&self, invocation: &EncoderInvocation) -> Result<(), RunError>;
}
