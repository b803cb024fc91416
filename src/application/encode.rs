//! Encode recording use case

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::config::EncodeConfig;
use crate::domain::encoding::{output_stem, Encoder, EncoderInvocation, RunDate};

use super::ports::{EncoderRunner, RunError};
use super::system_check::Toolchain;

/// Fatal errors from the encode use case
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("The file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),
}

/// Input parameters for the encode use case
#[derive(Debug, Clone)]
pub struct EncodeInput {
    /// WAV file to encode
    pub input_file: PathBuf,
    /// Directory receiving the encoded files
    pub output_dir: PathBuf,
    /// Instant the run started; drives the date tags and file names
    pub date: RunDate,
    /// Print commands instead of running them
    pub simulate: bool,
}

/// What happened to one encoder
#[derive(Debug, Clone)]
pub enum EncoderStatus {
    Simulated,
    Succeeded,
    Failed(RunError),
}

/// Result for one encoder invocation
#[derive(Debug, Clone)]
pub struct EncoderOutcome {
    pub invocation: EncoderInvocation,
    pub status: EncoderStatus,
}

/// Output from the encode use case, one outcome per encoder in run order
#[derive(Debug, Clone)]
pub struct EncodeOutput {
    pub outcomes: Vec<EncoderOutcome>,
}

impl EncodeOutput {
    /// Errors from encoders that failed
    pub fn failures(&self) -> impl Iterator<Item = &RunError> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            EncoderStatus::Failed(e) => Some(e),
            _ => None,
        })
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, EncoderStatus::Succeeded))
    }

    pub fn is_simulation(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, EncoderStatus::Simulated))
    }
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct EncodeCallbacks {
    /// Called in simulate mode with each command instead of running it
    pub on_simulated: Option<Box<dyn Fn(&EncoderInvocation) + Send + Sync>>,
    /// Called before an encoder starts
    pub on_encoder_start: Option<Box<dyn Fn(&EncoderInvocation) + Send + Sync>>,
    /// Called when an encoder fails to start or exits non-zero
    pub on_encoder_failed: Option<Box<dyn Fn(&RunError) + Send + Sync>>,
}

/// Build the commands for every encoder, in run order
pub fn plan(
    config: &EncodeConfig,
    toolchain: &Toolchain,
    input: &EncodeInput,
) -> Vec<EncoderInvocation> {
    let stem = output_stem(&input.output_dir, config, &input.date);
    Encoder::ALL
        .iter()
        .map(|&encoder| {
            EncoderInvocation::build(
                encoder,
                toolchain.program(encoder),
                config,
                &input.date,
                &input.input_file,
                &stem,
            )
        })
        .collect()
}

/// Runs opusenc then lame on one recording
pub struct EncodeUseCase<R>
where
    R: EncoderRunner,
{
    runner: R,
}

impl<R> EncodeUseCase<R>
where
    R: EncoderRunner,
{
    /// Create a new use case instance
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Execute the encode run.
    ///
    /// Encoder failures are recorded in the output and never stop the next
    /// encoder. Only a missing input file is an error, and it is checked
    /// before anything runs. Simulation skips that check.
    pub async fn execute(
        &self,
        config: &EncodeConfig,
        toolchain: &Toolchain,
        input: EncodeInput,
        callbacks: EncodeCallbacks,
    ) -> Result<EncodeOutput, EncodeError> {
        let invocations = plan(config, toolchain, &input);

        if input.simulate {
            let outcomes = invocations
                .into_iter()
                .map(|invocation| {
                    if let Some(ref cb) = callbacks.on_simulated {
                        cb(&invocation);
                    }
                    EncoderOutcome {
                        invocation,
                        status: EncoderStatus::Simulated,
                    }
                })
                .collect();
            return Ok(EncodeOutput { outcomes });
        }

        if !input.input_file.is_file() {
            return Err(EncodeError::InputNotFound(input.input_file));
        }

        let mut outcomes = Vec::with_capacity(invocations.len());
        for invocation in invocations {
            if let Some(ref cb) = callbacks.on_encoder_start {
                cb(&invocation);
            }
            info!(encoder = %invocation.encoder, output = %invocation.output.display(), "encoding");

            let status = match self.runner.run(&invocation).await {
                Ok(()) => EncoderStatus::Succeeded,
                Err(e) => {
                    debug!(encoder = %invocation.encoder, error = %e, "encoder failed");
                    if let Some(ref cb) = callbacks.on_encoder_failed {
                        cb(&e);
                    }
                    EncoderStatus::Failed(e)
                }
            };
            outcomes.push(EncoderOutcome { invocation, status });
        }

        Ok(EncodeOutput { outcomes })
    }
}
