//! Lineage quota: guarantee a minimum number of lineage items in the top slots.
//!
//! Only the top `min_slots` window is perturbed. Lineage items already in the
//! window stay, the highest-ranked lineage items below it are promoted to
//! cover the shortfall, and the best non-lineage items refill what is left.
//! Non-lineage items pushed out of the window go to the head of the remainder.

use std::collections::HashSet;

use nextup_core::models::ItemId;

use crate::ranking::deduplication::deduplicate;
use crate::ranking::scorer::{sort_by_score, ScoredCandidate};

/// Result of quota enforcement.
#[derive(Debug, Clone)]
pub struct QuotaOutcome<'a> {
    pub ranked: Vec<ScoredCandidate<'a>>,
    /// Lineage items moved into the top window.
    pub promoted: usize,
}

/// Enforce `min_slots` lineage members at the top of a score-sorted list.
pub fn enforce_lineage_min<'a>(
    ranked: Vec<ScoredCandidate<'a>>,
    lineage: &HashSet<ItemId>,
    min_slots: usize,
) -> QuotaOutcome<'a> {
    let is_lineage = |c: &ScoredCandidate<'_>| lineage.contains(&c.item.id);

    if min_slots == 0 || !ranked.iter().any(is_lineage) {
        return QuotaOutcome { ranked, promoted: 0 };
    }

    let window = min_slots.min(ranked.len());
    let present: Vec<usize> = (0..window).filter(|&i| is_lineage(&ranked[i])).collect();
    if present.len() >= min_slots {
        return QuotaOutcome { ranked, promoted: 0 };
    }

    let shortfall = min_slots - present.len();
    let in_window: HashSet<ItemId> = ranked[..window].iter().map(|c| c.item.id).collect();
    let promoted: Vec<usize> = (window..ranked.len())
        .filter(|&i| is_lineage(&ranked[i]) && !in_window.contains(&ranked[i].item.id))
        .take(shortfall)
        .collect();
    if promoted.is_empty() {
        return QuotaOutcome { ranked, promoted: 0 };
    }

    let refill = window.saturating_sub(present.len() + promoted.len());
    let survivors = (0..window)
        .filter(|&i| !is_lineage(&ranked[i]))
        .take(refill);

    let selected: HashSet<usize> = present
        .iter()
        .chain(promoted.iter())
        .copied()
        .chain(survivors)
        .collect();

    let mut top = Vec::with_capacity(window);
    let mut remainder = Vec::with_capacity(ranked.len().saturating_sub(window));
    for (i, candidate) in ranked.into_iter().enumerate() {
        if selected.contains(&i) {
            top.push(candidate);
        } else {
            remainder.push(candidate);
        }
    }
    sort_by_score(&mut top);
    top.extend(remainder);

    QuotaOutcome {
        ranked: deduplicate(top),
        promoted: promoted.len(),
    }
}
