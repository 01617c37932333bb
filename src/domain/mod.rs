//! Core types: SourceNote, NoteContent, Timestamp, KeepNote, Label

mod content;
mod keep_note;
mod label;
mod source;
mod timestamp;

pub use content::{NoteContent, TITLE_SEPARATOR};
pub use keep_note::{KeepColor, KeepNote};
pub use label::{Label, LabelSet};
pub use source::{SourceExport, SourceNote};
pub use timestamp::{ParseTimestampError, Timestamp};
