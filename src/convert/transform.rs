//! Per-note conversion from the export record to a Keep note.

use thiserror::Error;
use tracing::debug;

use crate::convert::html::HtmlRenderer;
use crate::domain::{
    KeepNote, Label, LabelSet, NoteContent, ParseTimestampError, SourceNote, Timestamp,
};

/// Errors raised while converting notes.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("note {id}: missing {field}")]
    MissingTimestamp { id: String, field: &'static str },

    #[error("note {id}: bad {field}: {source}")]
    InvalidTimestamp {
        id: String,
        field: &'static str,
        #[source]
        source: ParseTimestampError,
    },

    #[error("note {id}: failed to render HTML: {source}")]
    Html {
        id: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to compile HTML template: {0}")]
    Template(#[from] minijinja::Error),
}

/// A converted note with the metadata the writer needs to name its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedNote {
    pub id: String,
    pub created: Timestamp,
    pub note: KeepNote,
}

/// Converts one source note.
///
/// Non-empty trimmed tags are added to `labels` and become the note's label
/// references; repeats within the same note are collapsed.
///
/// # Errors
///
/// Returns `ConvertError` if either timestamp is missing or unparseable, or
/// if HTML rendering fails.
pub fn transform_note(
    source: &SourceNote,
    renderer: &HtmlRenderer,
    labels: &mut LabelSet,
) -> Result<ConvertedNote, ConvertError> {
    let content = NoteContent::split(&source.content);

    let created = parse_field(&source.id, "creationDate", source.creation_date.as_deref())?;
    let modified = parse_field(&source.id, "lastModified", source.last_modified.as_deref())?;

    let html = renderer
        .render(&content.body)
        .map_err(|source_err| ConvertError::Html {
            id: source.id.clone(),
            source: source_err,
        })?;

    let mut note_labels: Vec<Label> = Vec::new();
    for label in source.tags.iter().filter_map(|tag| Label::from_tag(tag)) {
        labels.insert(&label.name);
        if !note_labels.contains(&label) {
            note_labels.push(label);
        }
    }

    debug!(
        id = %source.id,
        title = %content.title,
        labels = note_labels.len(),
        "converted note"
    );

    Ok(ConvertedNote {
        id: source.id.clone(),
        created,
        note: KeepNote::new(
            content.title,
            content.body,
            html,
            created.as_micros(),
            modified.as_micros(),
            note_labels,
        ),
    })
}

fn parse_field(
    id: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<Timestamp, ConvertError> {
    let value = value.ok_or_else(|| ConvertError::MissingTimestamp {
        id: id.to_string(),
        field,
    })?;

    Timestamp::parse(value).map_err(|source| ConvertError::InvalidTimestamp {
        id: id.to_string(),
        field,
        source,
    })
}
