//! Labels collected from note tags.

use serde::Serialize;
use std::collections::HashSet;

/// A label reference attached to an output note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    /// Builds a label from a raw tag, trimming whitespace.
    ///
    /// Returns `None` for empty or whitespace-only tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let name = tag.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self {
                name: name.to_string(),
            })
        }
    }
}

/// Distinct label names accumulated across all converted notes.
///
/// Membership is case-sensitive (`Work` and `work` are two labels), but
/// [`LabelSet::sorted`] orders them case-insensitively for the manifest.
///
/// # Examples
///
/// ```
/// use keepport::domain::LabelSet;
///
/// let mut labels = LabelSet::new();
/// labels.insert("beta");
/// labels.insert("Alpha");
/// labels.insert("beta");
/// assert_eq!(labels.sorted(), vec!["Alpha", "beta"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelSet(HashSet<String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label. Returns `true` if it was not already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.0.contains(name) {
            return false;
        }
        self.0.insert(name.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels ordered by their case-folded form, ties broken by exact string order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.0.iter().map(String::as_str).collect();
        labels.sort_by_cached_key(|label| (fold_case(label), *label));
        labels
    }

    /// Renders the manifest: one label per line, each newline-terminated.
    pub fn to_manifest(&self) -> String {
        self.sorted()
            .into_iter()
            .map(|label| format!("{label}\n"))
            .collect()
    }
}

/// Unicode case folding for sort keys.
///
/// Lowercases each character, then applies the full-folding expansions that
/// lowercasing alone misses (`ß` folds to `ss`, final sigma to `σ`).
fn fold_case(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'ß' => folded.push_str("ss"),
            'ς' => folded.push('σ'),
            'ſ' => folded.push('s'),
            'ﬀ' => folded.push_str("ff"),
            'ﬁ' => folded.push_str("fi"),
            'ﬂ' => folded.push_str("fl"),
            'ﬃ' => folded.push_str("ffi"),
            'ﬄ' => folded.push_str("ffl"),
            'ﬅ' | 'ﬆ' => folded.push_str("st"),
            _ => folded.push(c),
        }
    }
    folded
}
