//! Shared testing harness for `filenav` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `filenav` binary in the work directory.
    ///
    /// `$HOME` points at the sandbox so no user configuration leaks in.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("filenav").expect("Failed to locate filenav binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("FILENAV_CONFIG")
            .env_remove("FILENAV_LOG");
        cmd
    }

    /// Path relative to the work directory.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Write a file (creating parents) relative to the work directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    pub(crate) fn create_dir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).expect("Failed to create test directory");
    }

    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Write `~/.config/filenav/config.toml` inside the sandbox home.
    pub(crate) fn write_user_config(&self, content: &str) {
        let dir = self.home().join(".config").join("filenav");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    pub(crate) fn assert_exists(&self, relative: &str) {
        assert!(self.path(relative).exists(), "{} should exist", relative);
    }

    pub(crate) fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{} should not exist", relative);
    }
}
