//! Emission of converted notes, the label manifest, and the archive.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::convert::{Conversion, ConvertedNote};
use crate::domain::LabelSet;
use crate::infra::archive::{ArchiveError, create_archive};
use crate::infra::filename::{NOTE_EXTENSION, note_filename};
use crate::infra::fs::{FsError, reset_dir, write_atomic, write_json};

/// Name of the label manifest written next to the notes.
pub const LABELS_FILENAME: &str = "Labels.txt";

/// Errors while writing the converted output.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Summary of a completed write.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of note files written
    pub notes_written: usize,
    /// Number of distinct labels in the manifest
    pub labels: usize,
    /// Every file written, notes first, manifest last
    pub files: Vec<PathBuf>,
    /// Path of the created archive
    pub archive: PathBuf,
}

/// Writes note files into an output directory, keeping their names unique.
///
/// Names are compared case-insensitively so the output also survives
/// case-insensitive file systems.
pub struct NoteWriter {
    dir: PathBuf,
    used: HashSet<String>,
    files: Vec<PathBuf>,
}

impl NoteWriter {
    /// Clears and recreates `dir`, then returns a writer for it.
    pub fn create(dir: &Path) -> Result<Self, FsError> {
        reset_dir(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            used: HashSet::new(),
            files: Vec::new(),
        })
    }

    /// Writes one note as pretty JSON and returns its path.
    pub fn write_note(&mut self, converted: &ConvertedNote) -> Result<PathBuf, FsError> {
        let derived = note_filename(&converted.note.title, &converted.created, &converted.id);
        let filename = self.claim(derived);

        let path = self.dir.join(&filename);
        write_json(&path, &converted.note)?;
        debug!(id = %converted.id, file = %filename, "wrote note");

        self.files.push(path.clone());
        Ok(path)
    }

    /// Writes the label manifest and returns its path.
    pub fn write_labels(&mut self, labels: &LabelSet) -> Result<PathBuf, FsError> {
        let path = self.dir.join(LABELS_FILENAME);
        write_atomic(&path, labels.to_manifest().as_bytes())?;
        self.files.push(path.clone());
        Ok(path)
    }

    /// Files written so far, in write order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn claim(&mut self, filename: String) -> String {
        if self.used.insert(filename.to_lowercase()) {
            return filename;
        }

        let extension = format!(".{NOTE_EXTENSION}");
        let stem = filename
            .strip_suffix(&extension)
            .unwrap_or(&filename)
            .to_string();

        let mut counter = 2;
        loop {
            let candidate = format!("{stem}-{counter}{extension}");
            if self.used.insert(candidate.to_lowercase()) {
                warn!(
                    original = %filename,
                    renamed = %candidate,
                    "filename collision, renamed note"
                );
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Writes every converted note plus the label manifest into `output_dir`
/// (cleared first), then bundles them into `archive_path`.
///
/// Any I/O failure aborts the write.
pub fn write_output(
    conversion: &Conversion,
    output_dir: &Path,
    archive_path: &Path,
) -> Result<WriteSummary, WriteError> {
    let mut writer = NoteWriter::create(output_dir)?;

    for converted in &conversion.notes {
        writer.write_note(converted)?;
    }
    writer.write_labels(&conversion.labels)?;

    let entries = create_archive(archive_path, writer.files())?;
    info!(
        entries,
        archive = %archive_path.display(),
        "archive created"
    );

    Ok(WriteSummary {
        notes_written: conversion.notes.len(),
        labels: conversion.labels.len(),
        files: writer.files,
        archive: archive_path.to_path_buf(),
    })
}
