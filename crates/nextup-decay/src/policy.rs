use serde::{Deserialize, Serialize};

use nextup_core::config::RankingConfig;

use crate::formula;

/// How a transition's count is weighted by its age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum DecayPolicy {
    /// Exponential decay: the factor halves every `days`.
    HalfLife(f64),
    /// Full count inside the window, nothing outside it.
    Window(f64),
    /// Raw count, no decay.
    Identity,
}

impl DecayPolicy {
    /// Pick the policy from config: a positive half-life wins, then a
    /// positive window, otherwise identity.
    pub fn from_config(config: &RankingConfig) -> Self {
        if config.decay_half_life_days > 0.0 {
            Self::HalfLife(config.decay_half_life_days)
        } else if config.window_days > 0.0 {
            Self::Window(config.window_days)
        } else {
            Self::Identity
        }
    }

    /// Multiplier applied to a count of the given age.
    pub fn factor(self, age_days: f64) -> f64 {
        match self {
            Self::HalfLife(days) => formula::decay(age_days, days),
            Self::Window(days) => {
                if age_days <= days {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Identity => 1.0,
        }
    }

    /// `max(0, count) × factor(age)`.
    pub fn effective_count(self, count: i64, age_days: f64) -> f64 {
        count.max(0) as f64 * self.factor(age_days)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HalfLife(_) => "half_life",
            Self::Window(_) => "window",
            Self::Identity => "identity",
        }
    }
}
