//! Conversion pipeline from a Simplenote export to Keep notes.
//!
//! Deduplicates the export's notes, then transforms each survivor while
//! accumulating the labels used across all of them.

mod dedup;
mod html;
mod transform;

pub use dedup::dedup_notes;
pub use html::{HtmlRenderer, PARAGRAPH_TEMPLATE, body_to_html};
pub use transform::{ConvertError, ConvertedNote, transform_note};

use tracing::{debug, info};

use crate::domain::{LabelSet, SourceExport};

/// Result of converting a whole export.
#[derive(Debug, Default)]
pub struct Conversion {
    /// Converted notes, in first-occurrence order
    pub notes: Vec<ConvertedNote>,
    /// Distinct labels across all notes
    pub labels: LabelSet,
    /// Source entries dropped as duplicates or for lacking an identifier
    pub skipped: usize,
}

/// Converts every active note in an export.
///
/// The first note that fails to convert aborts the whole conversion.
pub fn convert_export(export: &SourceExport) -> Result<Conversion, ConvertError> {
    let unique = dedup_notes(&export.active_notes);
    let skipped = export.active_notes.len() - unique.len();
    if skipped > 0 {
        debug!(skipped, "dropped duplicate or unidentified notes");
    }

    let renderer = HtmlRenderer::new()?;
    let mut labels = LabelSet::new();
    let notes = unique
        .into_iter()
        .map(|note| transform_note(note, &renderer, &mut labels))
        .collect::<Result<Vec<_>, _>>()?;

    info!(notes = notes.len(), labels = labels.len(), "conversion complete");

    Ok(Conversion {
        notes,
        labels,
        skipped,
    })
}
