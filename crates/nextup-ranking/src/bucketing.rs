//! Candidate bucketing: classify pool items relative to the anchor.
//!
//! Lineage, same-creator and same-server-method membership require the item
//! to be active. Click-next membership only requires pool presence, and
//! fallback membership only requires recency.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use nextup_core::config::RankingConfig;
use nextup_core::constants::FALLBACK_RECENCY_DAYS;
use nextup_core::models::{Item, ItemId, Transition};
use nextup_decay::age_days;

/// A click-next transition whose target is in the pool.
#[derive(Debug, Clone)]
pub struct ClickNextEntry<'a> {
    pub item: &'a Item,
    pub transition: &'a Transition,
    /// Days since the transition was last updated, relative to `now`.
    pub age_days: f64,
}

/// Signal-specific candidate sets for one anchor. No scores yet.
#[derive(Debug, Clone, Default)]
pub struct Buckets<'a> {
    pub lineage: Vec<&'a Item>,
    pub same_creator: Vec<&'a Item>,
    pub same_server_method: Vec<&'a Item>,
    pub click_next: Vec<ClickNextEntry<'a>>,
    pub fallback: Vec<&'a Item>,
}

impl<'a> Buckets<'a> {
    /// Partition `pool` into buckets relative to `anchor`.
    ///
    /// The anchor (matched by id) never enters any bucket. Each bucket except
    /// click-next is truncated to `candidate_cap_per_signal` in pool order;
    /// click-next keeps the first `transition_cap_per_from` matching
    /// transitions in input order.
    pub fn build(
        anchor: &Item,
        pool: &'a [Item],
        transitions: &'a [Transition],
        config: &RankingConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let cap = config.candidate_cap_per_signal;
        let candidates = || pool.iter().filter(move |item| item.id != anchor.id);
        let active = || candidates().filter(|item| item.is_active());

        let lineage = active()
            .filter(|item| item.shares_lineage_with(anchor))
            .take(cap)
            .collect();

        let same_creator = active()
            .filter(|item| item.creator_id == anchor.creator_id)
            .take(cap)
            .collect();

        let same_server_method = active()
            .filter(|item| item.same_server_method(anchor))
            .take(cap)
            .collect();

        let mut by_id: HashMap<ItemId, &'a Item> = HashMap::new();
        for item in candidates() {
            by_id.entry(item.id).or_insert(item);
        }
        let click_next = transitions
            .iter()
            .filter(|t| t.from == anchor.id)
            .filter_map(|t| {
                by_id.get(&t.to).copied().map(|item| ClickNextEntry {
                    item,
                    transition: t,
                    age_days: age_days(t.timestamp(), now),
                })
            })
            .take(config.transition_cap_per_from)
            .collect();

        let fallback = if config.fallback_enabled {
            let window_secs = FALLBACK_RECENCY_DAYS * 86_400;
            let recent: Vec<&Item> = candidates()
                .filter(|item| {
                    (item.created_at - anchor.created_at).num_seconds().abs() <= window_secs
                })
                .take(cap)
                .collect();
            if recent.is_empty() {
                // Last resort: the whole pool.
                candidates().take(cap).collect()
            } else {
                recent
            }
        } else {
            Vec::new()
        };

        Self {
            lineage,
            same_creator,
            same_server_method,
            click_next,
            fallback,
        }
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.lineage.is_empty()
            && self.same_creator.is_empty()
            && self.same_server_method.is_empty()
            && self.click_next.is_empty()
            && self.fallback.is_empty()
    }
}
