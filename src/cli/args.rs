//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// wav2loss - encode a WAV recording into tagged Opus and MP3 files
#[derive(Parser, Debug)]
#[command(name = "wav2loss")]
#[command(version)]
#[command(about = "Encode a WAV recording into tagged Opus and MP3 files using opusenc and lame")]
#[command(long_about = None)]
pub struct Cli {
    /// WAV file name inside the configured record directory
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Print the encoder commands instead of running them
    #[arg(short = 's', long)]
    pub simulate: bool,

    /// Direct path to the input file (overrides RecordDirectory and FILE)
    #[arg(short = 'i', long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Direct path to the output directory (overrides OutputDirectory)
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Directory containing config.yaml (default: beside the executable, then the working directory)
    #[arg(short = 'c', long, value_name = "DIR", env = "WAV2LOSS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Usage text shown when no input is given
pub const USAGE: &str = "USAGE:
    wav2loss [--simulate] <filename_in_recording_directory.wav>
Or with direct file paths:
    wav2loss [--simulate] [--in <path/to/input/file>] [--out <path/to/output/directory>]";
