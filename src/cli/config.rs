//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default Simplenote export file.
pub const DEFAULT_SOURCE: &str = "simplenote_export.json";

/// Default directory for the converted notes.
pub const DEFAULT_OUTPUT_DIR: &str = "google_keep_notes";

/// Default archive path.
pub const DEFAULT_ARCHIVE: &str = "google_keep_notes.zip";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Export file to read
    pub source: Option<PathBuf>,

    /// Directory for converted notes
    pub output_dir: Option<PathBuf>,

    /// Archive to create
    pub archive: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/keepport/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepport")
            .join("config.toml")
    }

    /// Resolve the export file: CLI argument, then config, then the default.
    pub fn source(&self, cli_source: Option<&PathBuf>) -> PathBuf {
        resolve(cli_source, self.source.as_ref(), DEFAULT_SOURCE)
    }

    /// Resolve the output directory: CLI argument, then config, then the default.
    pub fn output_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        resolve(cli_dir, self.output_dir.as_ref(), DEFAULT_OUTPUT_DIR)
    }

    /// Resolve the archive path: CLI argument, then config, then the default.
    pub fn archive(&self, cli_archive: Option<&PathBuf>) -> PathBuf {
        resolve(cli_archive, self.archive.as_ref(), DEFAULT_ARCHIVE)
    }
}

fn resolve(cli: Option<&PathBuf>, config: Option<&PathBuf>, default: &str) -> PathBuf {
    cli.or(config)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}
