//! Encoder command construction

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::config::EncodeConfig;

use super::profile::{DateTag, Encoder};
use super::run_date::RunDate;

/// A fully assembled encoder command.
///
/// Simulate mode prints this value and real runs execute it, so both see the
/// same argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderInvocation {
    pub encoder: Encoder,
    /// Resolved executable path
    pub program: PathBuf,
    /// Arguments, each passed to the child as one token
    pub args: Vec<String>,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl EncoderInvocation {
    /// Build the command line for one encoder
    pub fn build(
        encoder: Encoder,
        program: &Path,
        config: &EncodeConfig,
        date: &RunDate,
        input: &Path,
        output_stem: &Path,
    ) -> Self {
        let profile = encoder.profile();
        let output = with_extension(output_stem, profile.extension);

        let date_value = match profile.date {
            DateTag::Year => date.year(),
            DateTag::Full => date.date_stamp(),
        };

        let mut args = profile.bitrate.args(encoder.bitrate(config));
        args.extend(profile.extra_flags.iter().map(|f| f.to_string()));
        args.extend([
            profile.tags.title.to_string(),
            config.title.clone(),
            profile.tags.artist.to_string(),
            config.artist.clone(),
            profile.tags.album.to_string(),
            config.album.clone(),
            profile.tags.date.to_string(),
            date_value,
            input.to_string_lossy().to_string(),
            output.to_string_lossy().to_string(),
        ]);

        Self {
            encoder,
            program: program.to_path_buf(),
            args,
            input: input.to_path_buf(),
            output,
        }
    }

    /// Human-readable command line; tokens with spaces or quotes are quoted
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.to_string_lossy().to_string())
            .chain(self.args.iter().cloned())
            .map(|token| quote_token(&token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `<output_dir>/<Title_with_underscores>_<YYYY-MM-DD>`, without extension
pub fn output_stem(output_dir: &Path, config: &EncodeConfig, date: &RunDate) -> PathBuf {
    output_dir.join(format!("{}_{}", config.file_title(), date.date_stamp()))
}

/// Append an extension; titles may contain dots, so never replace one
fn with_extension(stem: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn quote_token(token: &str) -> String {
    let needs_quotes = token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == '\\');
    if !needs_quotes {
        return token.to_string();
    }
    let escaped = token.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
