//! Schema of the Simplenote export document.

use serde::{Deserialize, Deserializer};

/// Top-level export document.
///
/// Only `activeNotes` is converted; any other field (such as `trashedNotes`)
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceExport {
    #[serde(rename = "activeNotes", default)]
    pub active_notes: Vec<SourceNote>,
}

/// A single note record from the export.
///
/// Timestamps stay as raw strings here and are parsed during conversion, so a
/// bad timestamp on a duplicate that is later discarded never fails the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceNote {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Raw content: first line is the title, the rest the body, separated by CR LF.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(rename = "creationDate")]
    pub creation_date: Option<String>,

    #[serde(rename = "lastModified")]
    pub last_modified: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SourceExport {
    /// Parses an export document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json::Error` (with line and column) on malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
