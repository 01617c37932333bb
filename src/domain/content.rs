//! Title/body splitting of raw note content.

/// Separator between the title line and the body in exported content.
pub const TITLE_SEPARATOR: &str = "\r\n";

/// A note's content split into title and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteContent {
    pub title: String,
    pub body: String,
}

impl NoteContent {
    /// Splits raw content at the first CR LF.
    ///
    /// Without a separator the whole trimmed content becomes the title and the
    /// body is empty. Both halves are trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use keepport::domain::NoteContent;
    ///
    /// let content = NoteContent::split("Groceries\r\nmilk\r\neggs");
    /// assert_eq!(content.title, "Groceries");
    /// assert_eq!(content.body, "milk\r\neggs");
    /// ```
    pub fn split(raw: &str) -> Self {
        match raw.split_once(TITLE_SEPARATOR) {
            Some((title, body)) => Self {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
            },
            None => Self {
                title: raw.trim().to_string(),
                body: String::new(),
            },
        }
    }
}
