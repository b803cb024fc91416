//! CLI presenter for output formatting

use colored::*;

use crate::domain::encoding::EncoderInvocation;

/// Presenter for CLI output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a section heading to stderr
    pub fn heading(&self, title: &str) {
        eprintln!("{}", format!("--- {} ---", title).bold());
    }

    /// Print usage text to stderr
    pub fn usage(&self, text: &str) {
        eprintln!("{}", text);
    }

    /// Print a simulated command to stdout
    pub fn simulated(&self, invocation: &EncoderInvocation) {
        println!("{}", Self::format_simulated(invocation));
    }

    /// `Running opusenc: /rec/take1.wav -> /out/My_Session_2024-05-01.opus`
    pub fn format_start(invocation: &EncoderInvocation) -> String {
        format!(
            "Running {}: {} -> {}",
            invocation.encoder,
            invocation.input.display(),
            invocation.output.display()
        )
    }

    /// `OPUSENC ARGS: /usr/bin/opusenc --bitrate 96 ...`
    pub fn format_simulated(invocation: &EncoderInvocation) -> String {
        format!(
            "{} ARGS: {}",
            invocation.encoder.to_string().to_uppercase(),
            invocation.command_line()
        )
    }
}
