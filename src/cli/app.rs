//! Main app runner

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, EncoderRunner, RunError, ToolLocator};
use crate::application::{EncodeCallbacks, EncodeInput, EncodeUseCase, Toolchain};
use crate::domain::config::Locations;
use crate::domain::encoding::{EncoderInvocation, RunDate};
use crate::infrastructure::{ProcessRunner, SearchPathLocator, YamlConfigStore};

use super::args::{Cli, USAGE};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run with the real filesystem, search path and child processes
pub async fn run(cli: Cli) -> ExitCode {
    let store = match cli.config_dir {
        Some(ref dir) => YamlConfigStore::with_dir(dir),
        None => YamlConfigStore::new(),
    };

    let code = run_with(
        cli,
        &store,
        &SearchPathLocator::new(),
        ProcessRunner::new(),
        RunDate::now(),
    )
    .await;
    ExitCode::from(code)
}

/// Startup checks followed by the encode run, returning the exit code.
///
/// Every fatal check happens before an encoder is started. Encoder failures
/// are reported but still exit with success.
pub async fn run_with<S, L, R>(
    cli: Cli,
    store: &S,
    locator: &L,
    runner: R,
    date: RunDate,
) -> u8
where
    S: ConfigStore,
    L: ToolLocator,
    R: EncoderRunner,
{
    let presenter = Presenter::new();

    let config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&format!("Read Error: {}", e));
            return EXIT_ERROR;
        }
    };

    let toolchain = match system_check(locator, &presenter) {
        Some(toolchain) => toolchain,
        None => return EXIT_ERROR,
    };

    let locations =
        Locations::resolve_from_env(&config, cli.input.as_deref(), cli.output.as_deref());

    let Some(input_file) = locations.input_file(cli.file.as_deref()) else {
        presenter.error("No file given. Exiting...");
        presenter.usage(USAGE);
        return EXIT_ERROR;
    };

    let input = EncodeInput {
        input_file,
        output_dir: locations.output_dir,
        date,
        simulate: cli.simulate,
    };

    if input.simulate {
        presenter.info("SIMULATION MODE, PRINTING ARGUMENTS INSTEAD");
    }

    let callbacks = EncodeCallbacks {
        on_simulated: Some(Box::new(move |invocation: &EncoderInvocation| {
            presenter.simulated(invocation)
        })),
        on_encoder_start: Some(Box::new(move |invocation: &EncoderInvocation| {
            presenter.info(&Presenter::format_start(invocation));
        })),
        on_encoder_failed: Some(Box::new(move |e: &RunError| presenter.error(&e.to_string()))),
    };

    let use_case = EncodeUseCase::new(runner);
    match use_case.execute(&config, &toolchain, input, callbacks).await {
        Ok(output) => {
            if output.all_succeeded() {
                let written: Vec<_> = output
                    .outcomes
                    .iter()
                    .map(|o| o.invocation.output.display().to_string())
                    .collect();
                presenter.success(&format!("Wrote {}", written.join(", ")));
            } else if !output.is_simulation() {
                let failed: Vec<_> = output.failures().map(|e| e.encoder().to_string()).collect();
                presenter.warn(&format!("Finished with failures: {}", failed.join(", ")));
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

/// Print the pre-run check and locate both encoders
fn system_check<L: ToolLocator + ?Sized>(locator: &L, presenter: &Presenter) -> Option<Toolchain> {
    presenter.heading("WAV2LOSS PRE-RUN CHECK");
    presenter.info(&format!("I am running on: {}", std::env::consts::OS));

    match Toolchain::discover(locator) {
        Ok(toolchain) => {
            presenter.success("Configuration check passed");
            Some(toolchain)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            presenter.error("Configuration check failed. Exiting...");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ToolError;
    use crate::domain::config::EncodeConfig;
    use crate::domain::error::ConfigError;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use clap::Parser;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct MockStore(Result<EncodeConfig, ConfigError>);

    #[async_trait]
    impl ConfigStore for MockStore {
        async fn load(&self) -> Result<EncodeConfig, ConfigError> {
            self.0.clone()
        }

        fn path(&self) -> Option<PathBuf> {
            None
        }
    }

    struct MockLocator {
        missing: Option<&'static str>,
        lookups: Arc<Mutex<Vec<String>>>,
    }

    impl ToolLocator for MockLocator {
        fn locate(&self, tool: &str) -> Result<PathBuf, ToolError> {
            self.lookups.lock().unwrap().push(tool.to_string());
            if self.missing == Some(tool) {
                return Err(ToolError::NotFound {
                    tool: tool.to_string(),
                });
            }
            Ok(PathBuf::from(format!("/usr/bin/{}", tool)))
        }
    }

    #[derive(Default, Clone)]
    struct MockRunner {
        calls: Arc<Mutex<Vec<EncoderInvocation>>>,
        fail_all: bool,
    }

    #[async_trait]
    impl EncoderRunner for MockRunner {
        async fn run(&self, invocation: &EncoderInvocation) -> Result<(), RunError> {
            self.calls.lock().unwrap().push(invocation.clone());
            if self.fail_all {
                return Err(RunError::ExitStatus {
                    encoder: invocation.encoder,
                    status: "exit status: 2".to_string(),
                });
            }
            Ok(())
        }
    }

    fn config(record_dir: &str) -> EncodeConfig {
        EncodeConfig {
            album: "Album".to_string(),
            artist: "Artist".to_string(),
            title: "My Session".to_string(),
            record_directory: record_dir.to_string(),
            output_directory: "/out".to_string(),
            lame_bitrate: "V0".to_string(),
            opus_bitrate: "96".to_string(),
        }
    }

    fn locator(missing: Option<&'static str>) -> MockLocator {
        MockLocator {
            missing,
            lookups: Arc::default(),
        }
    }

    fn date() -> RunDate {
        RunDate::from(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap())
    }

    async fn run_args(
        args: &[&str],
        store: MockStore,
        locator: &MockLocator,
        runner: MockRunner,
    ) -> u8 {
        let cli = Cli::parse_from(std::iter::once("wav2loss").chain(args.iter().copied()));
        run_with(cli, &store, locator, runner, date()).await
    }

    #[tokio::test]
    async fn config_error_exits_with_error_before_lookup() {
        let store = MockStore(Err(ConfigError::ParseError("bad".to_string())));
        let locator = locator(None);
        let code = run_args(&["take1.wav"], store, &locator, MockRunner::default()).await;
        assert_eq!(code, EXIT_ERROR);
        assert!(locator.lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_tool_exits_before_running() {
        let runner = MockRunner::default();
        let locator = locator(Some("lame"));
        let code = run_args(
            &["take1.wav"],
            MockStore(Ok(config("/rec"))),
            &locator,
            runner.clone(),
        )
        .await;
        assert_eq!(code, EXIT_ERROR);
        assert!(runner.calls.lock().unwrap().is_empty());
        assert_eq!(*locator.lookups.lock().unwrap(), vec!["opusenc", "lame"]);
    }

    #[tokio::test]
    async fn missing_file_argument_is_usage_error() {
        let runner = MockRunner::default();
        let code = run_args(&[], MockStore(Ok(config("/rec"))), &locator(None), runner.clone()).await;
        assert_eq!(code, EXIT_ERROR);
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_input_file_exits_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let record_dir = dir.path().to_string_lossy().to_string();
        let runner = MockRunner::default();
        let code = run_args(
            &["absent.wav"],
            MockStore(Ok(config(&record_dir))),
            &locator(None),
            runner.clone(),
        )
        .await;
        assert_eq!(code, EXIT_ERROR);
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn simulate_succeeds_without_running() {
        let runner = MockRunner::default();
        let code = run_args(
            &["--simulate", "take1.wav"],
            MockStore(Ok(config("/rec"))),
            &locator(None),
            runner.clone(),
        )
        .await;
        assert_eq!(code, EXIT_SUCCESS);
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn encodes_file_from_record_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("take1.wav"), b"RIFF").unwrap();
        let record_dir = dir.path().to_string_lossy().to_string();
        let runner = MockRunner::default();

        let code = run_args(
            &["take1.wav"],
            MockStore(Ok(config(&record_dir))),
            &locator(None),
            runner.clone(),
        )
        .await;

        assert_eq!(code, EXIT_SUCCESS);
        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, PathBuf::from("/usr/bin/opusenc"));
        assert_eq!(calls[0].input, dir.path().join("take1.wav"));
        assert_eq!(
            calls[1].output,
            PathBuf::from("/out/My_Session_2024-05-01.mp3")
        );
    }

    #[tokio::test]
    async fn direct_paths_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let wav = dir.path().join("direct.wav");
        std::fs::write(&wav, b"RIFF").unwrap();
        let runner = MockRunner::default();
        let wav_arg = wav.to_string_lossy().to_string();

        let code = run_args(
            &["--in", wav_arg.as_str(), "--out", "/dest", "ignored.wav"],
            MockStore(Ok(config("/nonexistent-record-dir"))),
            &locator(None),
            runner.clone(),
        )
        .await;

        assert_eq!(code, EXIT_SUCCESS);
        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0].input, wav);
        assert_eq!(
            calls[0].output,
            PathBuf::from("/dest/My_Session_2024-05-01.opus")
        );
    }

    #[tokio::test]
    async fn encoder_failures_still_exit_successfully() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("take1.wav"), b"RIFF").unwrap();
        let record_dir = dir.path().to_string_lossy().to_string();
        let runner = MockRunner {
            fail_all: true,
            ..Default::default()
        };

        let code = run_args(
            &["take1.wav"],
            MockStore(Ok(config(&record_dir))),
            &locator(None),
            runner.clone(),
        )
        .await;

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(runner.calls.lock().unwrap().len(), 2);
    }
}
