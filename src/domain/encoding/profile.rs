//! Encoder descriptors
//!
//! opusenc and lame take the same information with different flag names, so
//! each encoder is described by a profile and built by one routine.

use std::fmt;

use crate::domain::config::EncodeConfig;

/// How the bitrate value is spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitrateFlag {
    /// A flag followed by the value as its own token (`--bitrate 96`)
    Separate(&'static str),
    /// The value glued onto a prefix (`-V0`)
    Prefixed(&'static str),
}

/// Which rendering of the run date goes into the date tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTag {
    /// Four-digit year
    Year,
    /// Full `YYYY-MM-DD` stamp
    Full,
}

/// Flag names for the metadata tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFlags {
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub date: &'static str,
}

/// Everything that differs between the two encoder command lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderProfile {
    pub binary: &'static str,
    pub bitrate: BitrateFlag,
    /// Flags placed right after the bitrate
    pub extra_flags: &'static [&'static str],
    pub tags: TagFlags,
    pub date: DateTag,
    /// Output extension without the dot
    pub extension: &'static str,
}

static OPUS_PROFILE: EncoderProfile = EncoderProfile {
    binary: "opusenc",
    bitrate: BitrateFlag::Separate("--bitrate"),
    extra_flags: &[],
    tags: TagFlags {
        title: "--title",
        artist: "--artist",
        album: "--album",
        date: "--date",
    },
    date: DateTag::Year,
    extension: "opus",
};

static LAME_PROFILE: EncoderProfile = EncoderProfile {
    binary: "lame",
    bitrate: BitrateFlag::Prefixed("-"),
    extra_flags: &["--add-id3v2"],
    tags: TagFlags {
        title: "--tt",
        artist: "--ta",
        album: "--tl",
        date: "--ty",
    },
    date: DateTag::Full,
    extension: "mp3",
};

/// The two external encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoder {
    Opus,
    Lame,
}

impl Encoder {
    /// Encoders in the order they run
    pub const ALL: [Encoder; 2] = [Encoder::Opus, Encoder::Lame];

    pub fn profile(self) -> &'static EncoderProfile {
        match self {
            Encoder::Opus => &OPUS_PROFILE,
            Encoder::Lame => &LAME_PROFILE,
        }
    }

    /// Executable name looked up on the search path
    pub fn binary(self) -> &'static str {
        self.profile().binary
    }

    /// Configured bitrate value for this encoder
    pub fn bitrate(self, config: &EncodeConfig) -> &str {
        match self {
            Encoder::Opus => &config.opus_bitrate,
            Encoder::Lame => &config.lame_bitrate,
        }
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

impl BitrateFlag {
    /// Render the bitrate tokens for a value
    pub fn args(self, value: &str) -> Vec<String> {
        match self {
            BitrateFlag::Separate(flag) => vec![flag.to_string(), value.to_string()],
            BitrateFlag::Prefixed(prefix) => vec![format!("{}{}", prefix, value)],
        }
    }
}
