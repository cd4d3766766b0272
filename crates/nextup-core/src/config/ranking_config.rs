use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, NextupResult};

/// Ranking pipeline configuration.
///
/// Every knob is optional in TOML; omitted fields fall back to [`defaults`].
/// The clock and random source are injected separately and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Flat weight per lineage-bucket membership. Default: 100.
    pub lineage_weight: f64,
    /// Flat weight per same-creator membership. Default: 50.
    pub same_creator_weight: f64,
    /// Flat weight per same (provider, method) membership. Default: 40.
    pub same_server_method_weight: f64,
    /// Weight given to the strongest click-next candidate. Default: 100.
    pub click_next_weight: f64,
    /// Fallback weight before the 0.1 damping factor. Default: 60.
    pub fallback_weight: f64,
    /// Maximum outgoing transitions considered for the anchor. Default: 30.
    pub transition_cap_per_from: usize,
    /// Half-life for click-next decay in days; 0 disables. Default: 7.
    pub decay_half_life_days: f64,
    /// Hard age window in days, used only when no half-life is set; 0 disables. Default: 0.
    pub window_days: f64,
    /// Fraction of the batch given to exploration when no slot count is set. Default: 0.3.
    pub random_fraction: f64,
    /// Explicit exploration slot count; 0 means use `random_fraction`. Default: 0.
    pub random_slots_per_batch: usize,
    /// Per-bucket candidate cap (lineage, creator, method, fallback). Default: 100.
    pub candidate_cap_per_signal: usize,
    /// Maximum number of recommendations returned. Default: 20.
    pub batch_size: usize,
    /// Minimum lineage items guaranteed in the top positions. Default: 2.
    pub lineage_min_slots: usize,
    /// Whether the recency fallback bucket is built. Default: true.
    pub fallback_enabled: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            lineage_weight: defaults::DEFAULT_LINEAGE_WEIGHT,
            same_creator_weight: defaults::DEFAULT_SAME_CREATOR_WEIGHT,
            same_server_method_weight: defaults::DEFAULT_SAME_SERVER_METHOD_WEIGHT,
            click_next_weight: defaults::DEFAULT_CLICK_NEXT_WEIGHT,
            fallback_weight: defaults::DEFAULT_FALLBACK_WEIGHT,
            transition_cap_per_from: defaults::DEFAULT_TRANSITION_CAP_PER_FROM,
            decay_half_life_days: defaults::DEFAULT_DECAY_HALF_LIFE_DAYS,
            window_days: defaults::DEFAULT_WINDOW_DAYS,
            random_fraction: defaults::DEFAULT_RANDOM_FRACTION,
            random_slots_per_batch: defaults::DEFAULT_RANDOM_SLOTS_PER_BATCH,
            candidate_cap_per_signal: defaults::DEFAULT_CANDIDATE_CAP_PER_SIGNAL,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            lineage_min_slots: defaults::DEFAULT_LINEAGE_MIN_SLOTS,
            fallback_enabled: defaults::DEFAULT_FALLBACK_ENABLED,
        }
    }
}

impl RankingConfig {
    /// Number of batch positions filled by random exploration.
    ///
    /// An explicit slot count wins (capped at the batch size); otherwise the
    /// fraction of the batch is floored.
    pub fn random_slots(&self) -> usize {
        if self.random_slots_per_batch > 0 {
            self.random_slots_per_batch.min(self.batch_size)
        } else {
            let slots = (self.batch_size as f64 * self.random_fraction).floor();
            (slots.max(0.0) as usize).min(self.batch_size)
        }
    }

    /// Reject weights and decay parameters the pipeline cannot use.
    pub fn validate(&self) -> NextupResult<()> {
        let weights = [
            ("lineage_weight", self.lineage_weight),
            ("same_creator_weight", self.same_creator_weight),
            ("same_server_method_weight", self.same_server_method_weight),
            ("click_next_weight", self.click_next_weight),
            ("fallback_weight", self.fallback_weight),
            ("decay_half_life_days", self.decay_half_life_days),
            ("window_days", self.window_days),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be a finite non-negative number, got {value}"),
                }
                .into());
            }
        }

        if !(0.0..=1.0).contains(&self.random_fraction) {
            return Err(ConfigError::InvalidValue {
                field: "random_fraction".to_string(),
                reason: format!("must be within [0, 1], got {}", self.random_fraction),
            }
            .into());
        }

        Ok(())
    }
}
