use crate::layers::marker::MarkerId;

/// One searchable entry per marker created by the brewery search. The name
/// is lowercased once at insertion so the filter never re-normalizes it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEntry {
    pub marker_id: MarkerId,
    pub name: String,
    pub categories: Vec<String>,
}

impl MarkerEntry {
    pub fn new(marker_id: MarkerId, name: &str, categories: Vec<String>) -> Self {
        Self {
            marker_id,
            name: name.to_lowercase(),
            categories,
        }
    }

    /// True when `term` (already lowercased) is a substring of the name or
    /// of any category. The empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        self.name.contains(term)
            || self
                .categories
                .iter()
                .any(|category| category.to_lowercase().contains(term))
    }
}

/// The list of searchable markers: populated by the brewery search, read by
/// the live filter. Entries are only ever appended; they live until the app
/// is dropped.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    entries: Vec<MarkerEntry>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MarkerEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
