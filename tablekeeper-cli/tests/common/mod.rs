//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers
//! - Scenario file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every test.
const TABLEKEEPER_VARS: &[&str] = &[
    "TABLEKEEPER_CONFIG",
    "TABLEKEEPER_TABLES",
    "TABLEKEEPER_WAITLIST_POLICY",
    "TABLEKEEPER_UNKNOWN_TABLE",
    "TABLEKEEPER_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// The binary looks for `~/.tablekeeper/config.yaml`, so every command runs
/// with `HOME` pointed at a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablekeeper").expect("Failed to find tablekeeper binary");
        cmd.env("HOME", &self.temp_path);
        for var in TABLEKEEPER_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user config read from `~/.tablekeeper/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.temp_path.join(".tablekeeper");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }
}

/// Scenario with one table, a withdrawn waiter and a release.
#[allow(dead_code)]
pub const WITHDRAWAL_SCENARIO: &str = "\
tables: 1
steps:
  - reserve: Morgan
  - reserve: Nathan
  - reserve: Dai
  - leave: Nathan
  - release: 1
  - print-waitlist
";

/// Scenario that leaves the table count to configuration.
#[allow(dead_code)]
pub const OPEN_SCENARIO: &str = "\
steps:
  - reserve: A
  - reserve: B
  - reserve: C
";
