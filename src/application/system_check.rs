//! Pre-run check for the external encoders

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::encoding::Encoder;

use super::ports::{ToolError, ToolLocator};

/// Resolved paths of both encoder executables.
///
/// Holding one proves the pre-run check passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    opusenc: PathBuf,
    lame: PathBuf,
}

impl Toolchain {
    /// Locate every encoder, failing on the first one that is missing
    pub fn discover<L: ToolLocator + ?Sized>(locator: &L) -> Result<Self, ToolError> {
        let opusenc = locator.locate(Encoder::Opus.binary())?;
        debug!(path = %opusenc.display(), "found opusenc");
        let lame = locator.locate(Encoder::Lame.binary())?;
        debug!(path = %lame.display(), "found lame");
        Ok(Self { opusenc, lame })
    }

    /// Build from known paths
    pub fn new(opusenc: impl Into<PathBuf>, lame: impl Into<PathBuf>) -> Self {
        Self {
            opusenc: opusenc.into(),
            lame: lame.into(),
        }
    }

    pub fn program(&self, encoder: Encoder) -> &Path {
        match encoder {
            Encoder::Opus => &self.opusenc,
            Encoder::Lame => &self.lame,
        }
    }
}
