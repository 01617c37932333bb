//! Zip bundling of the converted output.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Errors while building the archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to create archive {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to add {entry} to archive: {source}")]
    AddEntry {
        entry: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("zip error in {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("archive entry has no file name: {path}")]
    NoFileName { path: PathBuf },
}

/// Bundles files into a deflate-compressed zip, stored flat by file name.
///
/// Entries are written in the order given. Returns the number of entries.
///
/// # Errors
///
/// Returns `ArchiveError` if the archive cannot be created or any input file
/// cannot be read.
pub fn create_archive(archive_path: &Path, files: &[PathBuf]) -> Result<usize, ArchiveError> {
    let file = File::create(archive_path).map_err(|e| ArchiveError::Create {
        path: archive_path.into(),
        source: e,
    })?;

    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let zip_err = |e: zip::result::ZipError| ArchiveError::Zip {
        path: archive_path.into(),
        source: e,
    };

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ArchiveError::NoFileName { path: path.clone() })?;

        zip.start_file(name, options).map_err(zip_err)?;

        let mut input = File::open(path).map_err(|e| ArchiveError::AddEntry {
            entry: path.clone(),
            source: e,
        })?;
        io::copy(&mut input, &mut zip).map_err(|e| ArchiveError::AddEntry {
            entry: path.clone(),
            source: e,
        })?;
    }

    zip.finish().map_err(zip_err)?;
    Ok(files.len())
}
