//! The filter engine: computes the visible subset of a record snapshot under
//! the current criteria.
//!
//! Three independent axes, AND-combined—a record must pass every *active*
//! axis; an inactive axis (empty search text, empty selection) passes
//! everything. Within an axis, selections are OR-combined. The subset keeps
//! the snapshot's relative order; filtering never reorders or ranks.
//!
//! The matching rules are intentionally asymmetric, mirroring the product's
//! behavior on both listing pages:
//! - search text is a case-insensitive substring of title or description,
//!   and is *not* trimmed before the emptiness check
//! - category labels compare by case-insensitive equality
//! - tag labels compare by case-insensitive substring containment within a
//!   record's tags (selecting "sub" matches a record tagged "subsidy")
//!
//! The engine is total: any snapshot (including empty) with any criteria
//! produces a subset, never an error. Records missing a category or tags
//! simply fail those axes while they are active.

use crate::criteria::FilterCriteria;
use crate::model::Record;

/// Computes the visible subset of `records` under `criteria`, preserving
/// the original relative order.
pub fn visible_subset(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    records
        .iter()
        .filter(|r| matches_search(r, criteria.search()))
        .filter(|r| matches_categories(r, criteria.categories()))
        .filter(|r| matches_tags(r, criteria.tags()))
        .cloned()
        .collect()
}

fn matches_search(record: &Record, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let term = search.to_lowercase();
    record.title.to_lowercase().contains(&term)
        || record.description.to_lowercase().contains(&term)
}

fn matches_categories(record: &Record, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let Some(category) = record.category.as_deref() else {
        return false;
    };
    let category = category.to_lowercase();
    selected.iter().any(|label| label.to_lowercase() == category)
}

fn matches_tags(record: &Record, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected.iter().any(|label| {
        let needle = label.to_lowercase();
        record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
    })
}
