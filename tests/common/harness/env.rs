//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{KeepportCommand, TestNote};
use serde_json::{Value, json};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default export filename the binary reads.
pub const SOURCE_FILE: &str = "simplenote_export.json";

/// Default output directory the binary writes.
pub const OUTPUT_DIR: &str = "google_keep_notes";

/// Default archive the binary creates.
pub const ARCHIVE_FILE: &str = "google_keep_notes.zip";

/// Isolated test environment with a temporary working directory.
///
/// The binary runs inside the directory, so its fixed default paths land
/// here. A separate config home keeps the user's config file out of tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    work_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().join("work");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            work_dir,
            config_home,
        }
    }

    /// Returns the working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Returns the default output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_DIR)
    }

    /// Returns the default archive path.
    pub fn archive_path(&self) -> PathBuf {
        self.work_dir.join(ARCHIVE_FILE)
    }

    /// Writes an export containing the given notes to the default source path.
    pub fn write_export(&self, notes: &[TestNote]) -> PathBuf {
        let records: Vec<Value> = notes.iter().map(TestNote::to_json).collect();
        let export = json!({ "activeNotes": records, "trashedNotes": [] });
        self.write_file(
            SOURCE_FILE,
            &serde_json::to_string_pretty(&export).expect("Failed to serialize export"),
        )
    }

    /// Writes a file into the working directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the keepport config file into the isolated config home.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.join("keepport");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a KeepportCommand configured for this test environment.
    pub fn cmd(&self) -> KeepportCommand {
        KeepportCommand::new()
            .current_dir(&self.work_dir)
            .config_home(&self.config_home)
    }

    /// Sorted names of the files in the default output directory.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir())
            .expect("Failed to read output directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// Parses a converted note from the default output directory.
    pub fn read_output_note(&self, name: &str) -> Value {
        let content = std::fs::read_to_string(self.output_dir().join(name))
            .unwrap_or_else(|e| panic!("Failed to read output note {name}: {e}"));
        serde_json::from_str(&content).expect("Output note is not valid JSON")
    }

    /// Reads the label manifest from the default output directory.
    pub fn read_labels(&self) -> String {
        std::fs::read_to_string(self.output_dir().join("Labels.txt"))
            .expect("Failed to read Labels.txt")
    }

    /// Sorted entry names of the default archive.
    pub fn archive_entries(&self) -> Vec<String> {
        let file = File::open(self.archive_path()).expect("Failed to open archive");
        let archive = zip::ZipArchive::new(file).expect("Archive is not a valid zip");
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_work_directory() {
        let env = TestEnv::new();
        assert!(env.work_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.work_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_write_export_is_parseable() {
        let env = TestEnv::new();
        let path = env.write_export(&[TestNote::new("One"), TestNote::new("Two")]);
        let export = keepport::infra::read_export(&path).expect("export should parse");
        assert_eq!(export.active_notes.len(), 2);
        assert_eq!(export.active_notes[0].content, "One");
    }

    #[test]
    fn test_env_default_paths() {
        let env = TestEnv::new();
        assert!(env.output_dir().ends_with(OUTPUT_DIR));
        assert!(env.archive_path().ends_with(ARCHIVE_FILE));
    }
}
