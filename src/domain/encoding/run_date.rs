//! Run date value object

use chrono::{DateTime, Utc};

/// The moment an encode run started, in UTC.
///
/// Both encoders receive tags derived from the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDate(DateTime<Utc>);

impl RunDate {
    /// Capture the current time
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// `YYYY-MM-DD`, used in file names and the MP3 year tag
    pub fn date_stamp(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Four-digit year, used in the Opus date tag
    pub fn year(&self) -> String {
        self.0.format("%Y").to_string()
    }
}

impl From<DateTime<Utc>> for RunDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}
