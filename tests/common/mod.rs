//! Shared testing utilities for veo-prompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("veo-prompt").expect("Failed to locate veo-prompt binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `~/.veo-prompt/config.toml`.
    pub fn write_user_config(&self, content: &str) {
        let dir = self.home().join(".veo-prompt");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Read a file relative to the work directory.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }
}
