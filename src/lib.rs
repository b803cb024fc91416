//! wav2loss - encode a WAV recording into tagged Opus and MP3 files
//!
//! This crate loads a YAML configuration, finds `opusenc` and `lame` on the
//! search path, and runs both encoders on one recording with title, artist,
//! album and date tags.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Configuration record, sigil path resolution, encoder command construction
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (YAML config, PATH lookup, child processes)
//! - **CLI**: Command-line interface, argument parsing, logging and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
