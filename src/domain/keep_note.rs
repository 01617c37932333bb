//! Google Keep import record.

use serde::Serialize;

use super::Label;

/// Note color in the Keep import format. Converted notes always use the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeepColor {
    #[default]
    Default,
}

/// A note in the Keep import format.
///
/// Field order matches the order Keep's own exports use, and serialization
/// follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepNote {
    pub color: KeepColor,
    pub is_trashed: bool,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub text_content: String,
    pub title: String,
    pub user_edited_timestamp_usec: i64,
    pub created_timestamp_usec: i64,
    pub text_content_html: String,
    pub labels: Vec<Label>,
}

impl KeepNote {
    /// Creates an active, unpinned note with the default color.
    pub fn new(
        title: impl Into<String>,
        text_content: impl Into<String>,
        text_content_html: impl Into<String>,
        created_timestamp_usec: i64,
        user_edited_timestamp_usec: i64,
        labels: Vec<Label>,
    ) -> Self {
        Self {
            color: KeepColor::Default,
            is_trashed: false,
            is_pinned: false,
            is_archived: false,
            text_content: text_content.into(),
            title: title.into(),
            user_edited_timestamp_usec,
            created_timestamp_usec,
            text_content_html: text_content_html.into(),
            labels,
        }
    }
}
