//! Identifier-based deduplication.

use std::collections::HashSet;

use nextup_core::models::ItemId;

use crate::ranking::scorer::ScoredCandidate;

/// Drop repeated item ids, keeping the first occurrence.
///
/// Equality is by [`ItemId`], never by reference, so two pool entries that
/// carry the same id collapse to one.
pub fn deduplicate(candidates: Vec<ScoredCandidate<'_>>) -> Vec<ScoredCandidate<'_>> {
    let mut seen: HashSet<ItemId> = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.item.id))
        .collect()
}
