//! wav2loss CLI entry point

use std::process::ExitCode;

use clap::Parser;

use wav2loss::cli::{app::run, args::Cli, logging::init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(cli).await
}
