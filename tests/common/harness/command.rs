//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `keepport` binary.
///
/// Runs in a given working directory with an isolated config home, so the
/// fixed default paths resolve inside the test environment.
pub struct KeepportCommand {
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    config_home: Option<PathBuf>,
}

impl KeepportCommand {
    /// Creates a new command for the `keepport` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            current_dir: None,
            config_home: None,
        }
    }

    /// Sets the working directory the binary runs in.
    pub fn current_dir(mut self, path: &Path) -> Self {
        self.current_dir = Some(path.to_path_buf());
        self
    }

    /// Points `XDG_CONFIG_HOME` at the given directory.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("keepport").expect("Failed to find keepport binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        if let Some(config_home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", config_home);
            cmd.env("HOME", config_home);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the explicit `convert` command.
    pub fn convert(self) -> Self {
        self.args(["convert"])
    }

    /// Configures for the `completions` command.
    pub fn completions(self, shell: &str) -> Self {
        self.args(["completions", shell])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for KeepportCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        KeepportCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = KeepportCommand::new().args(["--help"]).output_success();
        assert!(output.contains("keepport") || output.contains("Keep"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = KeepportCommand::new().convert().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"convert".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
