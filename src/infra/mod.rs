//! File I/O, filename derivation, archive bundling

mod archive;
mod filename;
mod fs;
mod writer;

pub use archive::{ArchiveError, create_archive};
pub use filename::{ID_SUFFIX_CHARS, MAX_TITLE_CHARS, NOTE_EXTENSION, note_filename};
pub use fs::{FsError, read_export, reset_dir, write_atomic, write_json};
pub use writer::{LABELS_FILENAME, NoteWriter, WriteError, WriteSummary, write_output};
