//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const CONFIG: &str = r#"
Album: Night Tapes
Artist: The Band
Title: My Session
RecordDirectory: /rec
OutputDirectory: /out
LameBitrate: V0
OpusBitrate: 96
"#;

/// A scratch area with a config directory and a `PATH` of fake encoders.
///
/// Each fake encoder writes its arguments, one per line, to `<bin>/<name>.args`.
pub struct Fixture {
    pub root: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        fs::create_dir(root.path().join("config")).unwrap();
        Self { root }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join("config")
    }

    pub fn write_config(&self, content: &str) -> &Self {
        fs::write(self.config_dir().join("config.yaml"), content).unwrap();
        self
    }

    /// Install a fake encoder that records its arguments and exits with `code`
    pub fn fake_tool(&self, name: &str, code: i32) -> &Self {
        let path = self.bin_dir().join(name);
        let script = format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$0.args\"\nexit {}\n", code);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    pub fn with_tools(&self) -> &Self {
        self.fake_tool("opusenc", 0).fake_tool("lame", 0)
    }

    /// Arguments a fake encoder received, or `None` if it never ran
    pub fn recorded_args(&self, name: &str) -> Option<Vec<String>> {
        let path = self.bin_dir().join(format!("{}.args", name));
        fs::read_to_string(path)
            .ok()
            .map(|s| s.lines().map(str::to_string).collect())
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn touch(&self, path: &Path) {
        fs::write(path, b"RIFF\0\0\0\0WAVE").unwrap();
    }

    /// The binary with a controlled environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("wav2loss").unwrap();
        cmd.env("PATH", self.bin_dir())
            .env_remove("WAV2LOSS_CONFIG_DIR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--config-dir")
            .arg(self.config_dir());
        cmd
    }
}
