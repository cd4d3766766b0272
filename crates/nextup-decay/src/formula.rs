use chrono::{DateTime, Utc};

use nextup_core::constants::SECONDS_PER_DAY;

use crate::policy::DecayPolicy;

/// Half-life decay factor: `0.5^(age / half_life)`.
///
/// Range: 0.0 – 1.0 for non-negative ages.
/// A non-positive half-life means no decay and returns 1.0.
pub fn decay(age_days: f64, half_life_days: f64) -> f64 {
    if half_life_days <= 0.0 {
        return 1.0;
    }
    0.5_f64.powf(age_days / half_life_days)
}

/// Fractional days from `timestamp` to `now`, clamped at zero.
pub fn age_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = (now - timestamp).num_milliseconds().max(0) as f64;
    millis / 1000.0 / SECONDS_PER_DAY
}

/// Per-transition decay breakdown for debugging/observability.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayBreakdown {
    pub raw_count: i64,
    pub age_days: f64,
    pub policy: DecayPolicy,
    pub factor: f64,
    pub effective_count: f64,
}

/// Compute the effective count with each intermediate value exposed.
pub fn breakdown(count: i64, age_days: f64, policy: DecayPolicy) -> DecayBreakdown {
    let factor = policy.factor(age_days);
    DecayBreakdown {
        raw_count: count,
        age_days,
        policy,
        factor,
        effective_count: count.max(0) as f64 * factor,
    }
}
