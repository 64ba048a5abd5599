//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary directory and the
//! `ADVPATH_*` variables cleared, so the user's own configuration never
//! leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADVPATH_VARS: [&str; 6] = [
    "ADVPATH_CONFIG",
    "ADVPATH_BASE_DIR",
    "ADVPATH_DEFAULT_INPUT",
    "ADVPATH_PROJECT_ROOTS",
    "ADVPATH_CASE_SENSITIVE_PREFIX",
    "ADVPATH_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as `HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("advpath").expect("Failed to find advpath binary");
        cmd.env("HOME", &self.home);
        for var in ADVPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command whose relative paths resolve against `base`.
    pub fn command_in(&self, base: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--base-dir").arg(base);
        cmd
    }

    /// Write `~/.advpath/config.yaml` with `contents`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".advpath");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Write a configuration file elsewhere in the environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the home path.
    pub fn path(&self) -> &Path {
        &self.home
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a command and return its trimmed stdout, asserting success.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .trim_end_matches('\n')
        .to_string()
}
