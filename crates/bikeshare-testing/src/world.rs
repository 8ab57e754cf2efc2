//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing city CSVs and a config file into it
//! - Running the CLI with a scripted stdin

use anyhow::Result;
use assert_cmd::Command;
use bikeshare_types::City;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use bikeshare_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_cities();
/// let result = world.run("chicago\nall\nall\nno\nno\n").unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write the bundled sample CSV for every city.
    pub fn with_sample_cities(self) -> Self {
        fixtures::write_sample_cities(&self.data_dir).expect("Failed to write sample cities");
        self
    }

    /// Write `content` as the city's default CSV.
    pub fn with_city_csv(self, city: City, content: &str) -> Self {
        fixtures::write_city_csv(&self.data_dir, city, content)
            .expect("Failed to write city csv");
        self
    }

    /// Write `bikeshare.toml` into the data directory.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.data_dir.join("bikeshare.toml"), content)
            .expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Points the binary at the data directory, disables color and clears
    /// any inherited log filter so stderr stays quiet.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir()).arg("--no-color");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("BIKESHARE_DATA_DIR");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the binary with `stdin` as the user's answers.
    pub fn run(&self, stdin: &str) -> Result<CliResult> {
        self.run_with_args(&[], stdin)
    }

    /// Run the binary with extra arguments after the environment's own.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run_with_args(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("bikeshare")
            .map_err(|e| anyhow::anyhow!("Failed to find bikeshare binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(stdin.to_string());

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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
