//! First-seen-wins deduplication of source notes by identifier.

use std::collections::HashSet;

use crate::domain::SourceNote;

/// Keeps the first note for each non-empty identifier, in original order.
///
/// Notes with an empty identifier are dropped.
///
/// # Examples
///
/// ```
/// use keepport::convert::dedup_notes;
/// use keepport::domain::SourceNote;
///
/// let notes = vec![
///     SourceNote { id: "a".into(), content: "first".into(), ..Default::default() },
///     SourceNote { id: "a".into(), content: "second".into(), ..Default::default() },
/// ];
/// let unique = dedup_notes(&notes);
/// assert_eq!(unique.len(), 1);
/// assert_eq!(unique[0].content, "first");
/// ```
pub fn dedup_notes(notes: &[SourceNote]) -> Vec<&SourceNote> {
    let mut seen: HashSet<&str> = HashSet::new();
    notes
        .iter()
        .filter(|note| !note.id.is_empty() && seen.insert(note.id.as_str()))
        .collect()
}
