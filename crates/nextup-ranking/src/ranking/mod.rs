//! RankingPipeline: bucket → score → lineage quota → exploration.

pub mod deduplication;
pub mod exploration;
pub mod quota;
pub mod scorer;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use nextup_core::config::RankingConfig;
use nextup_core::models::{Item, ItemId, Transition};
use nextup_core::traits::RandomSource;
use nextup_decay::DecayPolicy;
use nextup_observability::stage_span;
use nextup_observability::tracing_setup::spans::stages;

use crate::bucketing::Buckets;
use crate::report::{PipelineStats, RecommendationReport};

/// The full four-stage ranking pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    config: RankingConfig,
    policy: DecayPolicy,
}

impl RankingPipeline {
    /// The decay policy is fixed here, once, from the config.
    pub fn new(config: RankingConfig) -> Self {
        let policy = DecayPolicy::from_config(&config);
        Self { config, policy }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn policy(&self) -> DecayPolicy {
        self.policy
    }

    /// Rank `pool` for `anchor`. Pure apart from the random source.
    pub fn run(
        &self,
        anchor: &Item,
        pool: &[Item],
        transitions: &[Transition],
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> RecommendationReport {
        let config = &self.config;

        // Stage 1: Candidate bucketing.
        let buckets = stage_span!(stages::BUCKETING)
            .in_scope(|| Buckets::build(anchor, pool, transitions, config, now));
        debug!(
            lineage = buckets.lineage.len(),
            same_creator = buckets.same_creator.len(),
            same_server_method = buckets.same_server_method.len(),
            click_next = buckets.click_next.len(),
            fallback = buckets.fallback.len(),
            "buckets built"
        );

        // Stage 2: Signal scoring.
        let scored = stage_span!(stages::SCORING)
            .in_scope(|| scorer::score(&buckets, config, self.policy));
        let scored_count = scored.len();
        debug!(scored = scored_count, policy = self.policy.name(), "candidates scored");

        // Stage 3: Lineage quota.
        let lineage_ids: HashSet<ItemId> = buckets.lineage.iter().map(|item| item.id).collect();
        let quota = stage_span!(stages::QUOTA).in_scope(|| {
            quota::enforce_lineage_min(scored, &lineage_ids, config.lineage_min_slots)
        });
        debug!(promoted = quota.promoted, "lineage quota enforced");

        // Stage 4: Exploration blending.
        let random_slots = config.random_slots();
        let blended = stage_span!(stages::EXPLORATION).in_scope(|| {
            exploration::blend(quota.ranked, config.batch_size, random_slots, rng)
        });
        debug!(
            random_slots,
            random_picks = blended.random_picks,
            batch = blended.batch.len(),
            "exploration blended"
        );

        RecommendationReport {
            recommendations: exploration::to_recommendations(&blended.batch),
            stats: PipelineStats {
                lineage: buckets.lineage.len(),
                same_creator: buckets.same_creator.len(),
                same_server_method: buckets.same_server_method.len(),
                click_next: buckets.click_next.len(),
                fallback: buckets.fallback.len(),
                decay_policy: self.policy,
                scored: scored_count,
                promoted: quota.promoted,
                random_slots,
                random_picks: blended.random_picks,
            },
        }
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}
