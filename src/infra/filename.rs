//! Filename derivation for exported Keep notes.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Timestamp;

/// Extension of every exported note file.
pub const NOTE_EXTENSION: &str = "json";

/// Maximum number of title characters kept in a filename.
pub const MAX_TITLE_CHARS: usize = 60;

/// Number of identifier characters used as the disambiguating suffix.
pub const ID_SUFFIX_CHARS: usize = 6;

static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\r\n\t\\/:"*?<>|]+"#).expect("filename character class is valid")
});

/// Derives the output filename for a note.
///
/// With a title: unsafe characters are stripped, the result trimmed and cut to
/// 60 characters. A `_` is appended when that shortened the title or when the
/// title ends in a non-alphanumeric character. Without a title the creation
/// timestamp is used, colons replaced by underscores. Either way the first six
/// characters of the identifier follow as `_xxxxxx`.
///
/// # Examples
///
/// ```
/// use keepport::domain::Timestamp;
/// use keepport::infra::note_filename;
///
/// let created: Timestamp = "2020-01-01T00:00:00Z".parse().unwrap();
/// assert_eq!(note_filename("Groceries", &created, "abc123xyz"), "Groceries_abc123.json");
/// assert_eq!(note_filename("Hello/World", &created, "abc123"), "HelloWorld__abc123.json");
/// assert_eq!(
///     note_filename("", &created, "abc123"),
///     "2020-01-01T00_00_00+00_00_abc123.json"
/// );
/// ```
pub fn note_filename(title: &str, created: &Timestamp, id: &str) -> String {
    let suffix = id_suffix(id);
    let title = title.trim();

    if title.is_empty() {
        let stamp = created.to_iso_string().replace(':', "_");
        return format!("{stamp}{suffix}.{NOTE_EXTENSION}");
    }

    let cleaned = UNSAFE_CHARS.replace_all(title, "");
    let mut stem: String = cleaned.trim().chars().take(MAX_TITLE_CHARS).collect();

    let shortened = stem.chars().count() < title.chars().count();
    let ends_unsafe = title.chars().last().is_some_and(|c| !c.is_alphanumeric());
    if shortened || ends_unsafe {
        stem.push('_');
    }

    format!("{stem}{suffix}.{NOTE_EXTENSION}")
}

fn id_suffix(id: &str) -> String {
    if id.is_empty() {
        String::new()
    } else {
        let prefix: String = id.chars().take(ID_SUFFIX_CHARS).collect();
        format!("_{prefix}")
    }
}
