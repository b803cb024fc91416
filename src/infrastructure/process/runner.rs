//! Child-process encoder runner adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{EncoderRunner, RunError};
use crate::domain::encoding::EncoderInvocation;

/// Runs encoders as child processes sharing this process's terminal
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EncoderRunner for ProcessRunner {
    async fn run(&self, invocation: &EncoderInvocation) -> Result<(), RunError> {
        debug!(command = %invocation.command_line(), "spawning encoder");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| RunError::LaunchFailed {
                encoder: invocation.encoder,
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(RunError::ExitStatus {
                encoder: invocation.encoder,
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::encoding::Encoder;
    use std::path::PathBuf;

    fn shell(script: &str) -> EncoderInvocation {
        EncoderInvocation {
            encoder: Encoder::Opus,
            program: PathBuf::from("/bin/sh"),
            args: vec!["-c".to_string(), script.to_string()],
            input: PathBuf::from("in.wav"),
            output: PathBuf::from("out.opus"),
        }
    }

    #[tokio::test]
    async fn zero_exit_is_ok() {
        assert!(ProcessRunner::new().run(&shell("exit 0")).await.is_ok());
    }

    #[tokio::test]
    async fn non_zero_exit_is_reported() {
        let err = ProcessRunner::new().run(&shell("exit 3")).await.unwrap_err();
        assert!(matches!(err, RunError::ExitStatus { encoder: Encoder::Opus, .. }));
        assert!(err.to_string().contains('3'), "got {}", err);
    }

    #[tokio::test]
    async fn missing_program_is_launch_failure() {
        let mut inv = shell("exit 0");
        inv.program = PathBuf::from("/nonexistent/opusenc");
        let err = ProcessRunner::new().run(&inv).await.unwrap_err();
        assert!(matches!(err, RunError::LaunchFailed { .. }));
    }

    #[tokio::test]
    async fn arguments_arrive_as_single_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.log");
        let inv = EncoderInvocation {
            args: vec![
                "-c".to_string(),
                "printf '%s\\n' \"$@\" > \"$0\"".to_string(),
                log.to_string_lossy().to_string(),
                "My Session".to_string(),
                "it's \"quoted\"".to_string(),
            ],
            ..shell("")
        };
        ProcessRunner::new().run(&inv).await.unwrap();
        let logged = std::fs::read_to_string(&log).unwrap();
        assert_eq!(logged, "My Session\nit's \"quoted\"\n");
    }
}
