//! Exploration blending: swap the tail of the batch for random picks.
//!
//! The deterministic head keeps `batch_size - random_slots` top entries. The
//! rest of the ranked list is Fisher–Yates shuffled with the injected random
//! source and the first `random_slots` entries join the batch. The batch is
//! then re-sorted by score, so randomness only decides membership.

use std::collections::HashSet;

use nextup_core::constants::SCORE_DECIMALS;
use nextup_core::models::{ItemId, Recommendation};
use nextup_core::traits::RandomSource;

use crate::ranking::deduplication::deduplicate;
use crate::ranking::scorer::{sort_by_score, ScoredCandidate};

/// Result of exploration blending.
#[derive(Debug, Clone)]
pub struct ExplorationOutcome<'a> {
    pub batch: Vec<ScoredCandidate<'a>>,
    /// Random picks that made it into the batch.
    pub random_picks: usize,
}

/// In-place backward Fisher–Yates shuffle.
///
/// Values outside `[0, 1)` from the random source are clamped to a valid index.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let r = rng.next_f64();
        let j = ((r * (i + 1) as f64).floor().max(0.0) as usize).min(i);
        items.swap(i, j);
    }
}

/// Blend a deterministic head with `random_slots` randomly sampled candidates.
pub fn blend<'a>(
    ranked: Vec<ScoredCandidate<'a>>,
    batch_size: usize,
    random_slots: usize,
    rng: &mut dyn RandomSource,
) -> ExplorationOutcome<'a> {
    let random_slots = random_slots.min(batch_size);
    let head_len = batch_size - random_slots;

    let mut rest = ranked.into_iter();
    let head: Vec<ScoredCandidate<'a>> = rest.by_ref().take(head_len).collect();
    let head_ids: HashSet<ItemId> = head.iter().map(|c| c.item.id).collect();

    let mut remainder: Vec<ScoredCandidate<'a>> =
        rest.filter(|c| !head_ids.contains(&c.item.id)).collect();
    shuffle(&mut remainder, rng);
    remainder.truncate(random_slots);

    let mut batch = head;
    batch.extend(remainder);
    let mut batch = deduplicate(batch);
    let random_picks = batch.len().saturating_sub(head_ids.len());
    sort_by_score(&mut batch);
    batch.truncate(batch_size);

    ExplorationOutcome {
        batch,
        random_picks,
    }
}

/// Round a score to the output precision.
pub fn round_score(score: f64) -> f64 {
    let scale = 10_f64.powi(SCORE_DECIMALS);
    (score * scale).round() / scale
}

/// Format the final batch for the caller.
pub fn to_recommendations(batch: &[ScoredCandidate<'_>]) -> Vec<Recommendation> {
    batch
        .iter()
        .map(|c| Recommendation {
            id: c.item.id,
            score: round_score(c.score),
            reasons: c.reasons.clone(),
        })
        .collect()
}
