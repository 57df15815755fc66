//! Derives the filter options offered to the user from a record snapshot.
//!
//! Both indexes are pure derivations: trim, drop empties, dedupe by exact
//! string equality, sort with `str`'s locale-independent ordering. They are
//! cheap enough to recompute on every store change.

use crate::model::Record;

/// The distinct tag labels observable across `records`.
pub fn tag_index(records: &[Record]) -> Vec<String> {
    let mut labels: Vec<String> = records
        .iter()
        .flat_map(|r| r.tags.iter())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

/// The distinct category/provider labels observable across `records`.
pub fn category_index(records: &[Record]) -> Vec<String> {
    let mut labels: Vec<String> = records
        .iter()
        .filter_map(|r| r.category.as_deref())
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}
