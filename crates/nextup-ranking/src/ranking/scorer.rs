//! Signal scorer: fuse bucket memberships into one additive score per item.
//!
//! Lineage, same creator and same server method add their flat weight per
//! membership. Click-next adds `weight × effective / max_effective`, so the
//! strongest transition target always receives the full weight. Fallback
//! adds its weight damped by [`FALLBACK_DAMPING`].

use std::collections::HashMap;

use nextup_core::config::RankingConfig;
use nextup_core::constants::FALLBACK_DAMPING;
use nextup_core::models::{Item, ItemId, Reason};
use nextup_decay::DecayPolicy;

use crate::bucketing::Buckets;

/// A candidate with its accumulated score and contributing signals.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub item: &'a Item,
    pub score: f64,
    /// One tag per contribution, in scoring order. Diagnostic only.
    pub reasons: Vec<Reason>,
}

/// Insertion-ordered accumulator keyed by item id.
#[derive(Default)]
struct ScoreBoard<'a> {
    candidates: Vec<ScoredCandidate<'a>>,
    index: HashMap<ItemId, usize>,
}

impl<'a> ScoreBoard<'a> {
    fn add(&mut self, item: &'a Item, amount: f64, reason: Reason) {
        match self.index.get(&item.id) {
            Some(&slot) => {
                let candidate = &mut self.candidates[slot];
                candidate.score += amount;
                candidate.reasons.push(reason);
            }
            None => {
                self.index.insert(item.id, self.candidates.len());
                self.candidates.push(ScoredCandidate {
                    item,
                    score: amount,
                    reasons: vec![reason],
                });
            }
        }
    }

    fn add_all(&mut self, items: &[&'a Item], amount: f64, reason: Reason) {
        for item in items {
            self.add(item, amount, reason);
        }
    }
}

/// Summed effective click-next count per target, in first-seen order.
pub fn click_next_effective_counts<'a>(
    buckets: &Buckets<'a>,
    policy: DecayPolicy,
) -> Vec<(&'a Item, f64)> {
    let mut counts: Vec<(&'a Item, f64)> = Vec::new();
    let mut index: HashMap<ItemId, usize> = HashMap::new();

    for entry in &buckets.click_next {
        let effective = policy.effective_count(entry.transition.count, entry.age_days);
        match index.get(&entry.item.id) {
            Some(&slot) => counts[slot].1 += effective,
            None => {
                index.insert(entry.item.id, counts.len());
                counts.push((entry.item, effective));
            }
        }
    }

    counts
}

/// Score every bucketed candidate and sort by score descending.
///
/// Items present in no bucket never appear; they are not zero-score entries.
/// Ties keep first-contribution order.
pub fn score<'a>(
    buckets: &Buckets<'a>,
    config: &RankingConfig,
    policy: DecayPolicy,
) -> Vec<ScoredCandidate<'a>> {
    let mut board = ScoreBoard::default();

    board.add_all(&buckets.lineage, config.lineage_weight, Reason::Lineage);
    board.add_all(
        &buckets.same_creator,
        config.same_creator_weight,
        Reason::SameCreator,
    );
    board.add_all(
        &buckets.same_server_method,
        config.same_server_method_weight,
        Reason::SameServerMethod,
    );

    let click_counts = click_next_effective_counts(buckets, policy);
    let max_effective = click_counts
        .iter()
        .map(|(_, effective)| *effective)
        .fold(0.0_f64, f64::max);
    if max_effective > 0.0 {
        for (item, effective) in click_counts {
            // Fully decayed or windowed-out transitions contribute nothing.
            if effective > 0.0 {
                let amount = config.click_next_weight * (effective / max_effective);
                board.add(item, amount, Reason::ClickNext);
            }
        }
    }

    board.add_all(
        &buckets.fallback,
        config.fallback_weight * FALLBACK_DAMPING,
        Reason::Fallback,
    );

    let mut scored = board.candidates;
    sort_by_score(&mut scored);
    scored
}

/// Stable sort by score descending.
pub fn sort_by_score(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
