//! Common test utilities for CLI testing.

use std::path::Path;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Variables that must not leak from the developer's shell into tests.
const BACKLOG_VARS: &[&str] = &[
    "BACKLOG_URL",
    "BACKLOG_API_KEY",
    "BACKLOG_MAX_RETRY_ATTEMPTS",
    "BACKLOG_MAX_JITTER_MS",
    "BACKLOG_LOG_LEVEL",
    "BACKLOG_LOG_FORMAT",
    "RUST_LOG",
];

/// Test context with an isolated working directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write a `.env` file into the working directory
    pub fn with_dotenv(self, contents: &str) -> Self {
        std::fs::write(self.path().join(".env"), contents).expect("Failed to write .env");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bkl").expect("Binary not found");
        cmd.current_dir(self.path()).env("NO_COLOR", "1");
        for var in BACKLOG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Create a command pointed at a mock Backlog server
    pub fn backlog(&self, base_url: &str) -> Command {
        let mut cmd = self.command();
        cmd.env("BACKLOG_URL", base_url)
            .env("BACKLOG_API_KEY", "test-key")
            .env("BACKLOG_MAX_RETRY_ATTEMPTS", "1")
            .env("BACKLOG_MAX_JITTER_MS", "10");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
