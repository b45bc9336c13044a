//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary home directory
//! - Command builder helpers with the config path pre-configured
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The example document used throughout the CLI tests.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"service_bus_connection_strings:
  cluster-a: "Endpoint=sb://..."
  cluster-empty: ""
queues:
  - "deadletter-queue-1"
  - "deadletter-queue-2"
storage_accounts:
  cluster-a:
    account_name: "mystorageacct"
    key: "base64keymaterial"
  cluster-storage-only:
    account_name: "otherstore"
    key: "b3RoZXI="
vault_dir: "/var/lib/vault"
"#;

/// Test environment with an isolated home directory and config file.
///
/// Every command runs with `HOME` pointed at the temporary directory and the
/// `MAILTOIL_*` environment variables cleared, so the developer's own
/// configuration never leaks into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the configuration file passed with --config
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment without writing any config file.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("mailtoil.yaml");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Create a test environment with [`SAMPLE_CONFIG`] written out.
    pub fn with_sample() -> Self {
        let env = Self::new();
        env.write_config(SAMPLE_CONFIG);
        env
    }

    /// Overwrite the config file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Write an arbitrary file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get a command builder without --config.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("mailtoil").expect("Failed to find mailtoil binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("MAILTOIL_CONFIG")
            .env_remove("MAILTOIL_LOG_MODE");
        cmd
    }

    /// Get a command builder with --config set to this environment's file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run mailtoil");

        assert!(
            output.status.success(),
            "mailtoil {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
