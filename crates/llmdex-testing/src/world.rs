//! TestWorld pattern for integration tests of the `llmdex` binary.
//!
//! Each world owns a temp directory holding a catalogue file and an
//! optional config file. Commands run with `--source` and `--config`
//! pointing there, and with every `LLMDEX_*` variable from the caller's
//! environment removed.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::SAMPLE_CATALOGUE;

const ISOLATED_VARS: &[&str] = &[
    "LLMDEX_SOURCE",
    "LLMDEX_UI",
    "LLMDEX_KEEP_TERM",
    "LLMDEX_CONFIG",
    "LLMDEX_LOG",
    "RUST_LOG",
    "TERM_PROGRAM",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use llmdex_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["--compact"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    catalogue: PathBuf,
    config: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// A world serving [`SAMPLE_CATALOGUE`] with no config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalogue = temp_dir.path().join("api.json");
        let config = temp_dir.path().join("config.toml");
        std::fs::write(&catalogue, SAMPLE_CATALOGUE).expect("Failed to write catalogue");

        Self {
            temp_dir,
            catalogue,
            config,
            env_vars: HashMap::new(),
        }
    }

    /// Replace the catalogue document.
    pub fn with_catalogue(self, body: &str) -> Self {
        std::fs::write(&self.catalogue, body).expect("Failed to write catalogue");
        self
    }

    /// Point `--source` somewhere that does not exist.
    pub fn without_catalogue(mut self) -> Self {
        self.catalogue = self.temp_dir.path().join("missing.json");
        self
    }

    /// Write a `config.toml` the command will read.
    pub fn with_config(self, body: &str) -> Self {
        std::fs::write(&self.config, body).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a command with this world's source, config and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd.arg("--source")
            .arg(&self.catalogue)
            .arg("--config")
            .arg(&self.config)
            .current_dir(self.temp_dir.path());
        cmd
    }

    /// Run the `llmdex` binary with `args` and capture its output.
    ///
    /// Stdin is closed and stdout is captured, so the process never sees a
    /// terminal.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("llmdex")
            .map_err(|e| anyhow::anyhow!("Failed to find llmdex binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
