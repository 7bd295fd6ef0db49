//! Free-text query engine over a loaded directory
//!
//! Sorting and filtering are one pure operation: the caller passes the loaded
//! collection and the current search text and gets back a display-ready
//! ordered view. The engine never mutates or clones the underlying families.

use itertools::Itertools;

use crate::models::Family;

/// Produce the display-ready view of `families` for `search_text`.
///
/// Families are always sorted by last name, case-insensitively and ascending;
/// equal keys keep their load order. Empty search text returns the whole
/// sorted collection. Non-empty text (the text is not trimmed, so
/// whitespace-only input filters like any other) keeps families where the
/// lower-cased text is a substring of the last name, the father's name, the
/// mother's name, or any child's name.
///
/// The match is plain substring containment: no tokenization, no accent
/// folding, no normalization beyond lower-casing.
#[must_use]
pub fn query<'a>(families: &'a [Family], search_text: &str) -> Vec<&'a Family> {
    let sorted = families
        .iter()
        .sorted_by(|a, b| a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()));

    if search_text.is_empty() {
        return sorted.collect();
    }

    let needle = search_text.to_lowercase();
    sorted
        .filter(|family| matches_query(family, &needle))
        .collect()
}

/// Substring containment across the four searchable fields.
/// `needle` must already be lower-cased.
fn matches_query(family: &Family, needle: &str) -> bool {
    family.last_name.to_lowercase().contains(needle)
        || family.father_name.to_lowercase().contains(needle)
        || family.mother_name.to_lowercase().contains(needle)
        || family
            .children
            .iter()
            .any(|child| child.name.to_lowercase().contains(needle))
}
