//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Isolated environment: config path and working directory in a temp dir.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    /// `litmd` command with colors off and the config file isolated.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_litmd"));
        cmd.env("NO_COLOR", "1")
            .env("LITMD_CONFIG", self.config_path())
            .env_remove("LITMD_LOG")
            .current_dir(self.path());
        cmd
    }
}

/// Run litmd and capture (stdout, stderr, exit code).
pub fn run_litmd(sandbox: &Sandbox, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_litmd"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("LITMD_CONFIG", sandbox.config_path())
        .current_dir(sandbox.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute litmd");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
