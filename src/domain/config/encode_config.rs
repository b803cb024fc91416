//! Encoding configuration value object

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Settings read from `config.yaml`.
///
/// Every field is optional in the file; a missing field is an empty string.
/// Field names are lowercase; the loader folds key case before mapping, so
/// `Album` and `ALBUM` both land here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EncodeConfig {
    #[serde(rename = "album", default, deserialize_with = "text_or_number")]
    pub album: String,

    #[serde(rename = "artist", default, deserialize_with = "text_or_number")]
    pub artist: String,

    #[serde(rename = "title", default, deserialize_with = "text_or_number")]
    pub title: String,

    /// Source WAV directory, or a `$NAME` / `%NAME%` reference
    #[serde(rename = "recorddirectory", default, deserialize_with = "text_or_number")]
    pub record_directory: String,

    /// Destination directory, or a `$NAME` / `%NAME%` reference
    #[serde(rename = "outputdirectory", default, deserialize_with = "text_or_number")]
    pub output_directory: String,

    /// LAME quality flag without the leading dash (`V0`, `b320`)
    #[serde(rename = "lamebitrate", default, deserialize_with = "text_or_number")]
    pub lame_bitrate: String,

    /// opusenc `--bitrate` value in kbit/s
    #[serde(rename = "opusbitrate", default, deserialize_with = "text_or_number")]
    pub opus_bitrate: String,
}

impl EncodeConfig {
    /// Title with spaces replaced by underscores, for file names
    pub fn file_title(&self) -> String {
        self.title.replace(' ', "_")
    }
}

/// Accept a YAML string or number and keep it as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextOrNumber;

    impl<'de> Visitor<'de> for TextOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextOrNumber)
}
