/// nextup version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one day, used for age computations.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fallback candidates are items created within this many days of the anchor.
pub const FALLBACK_RECENCY_DAYS: i64 = 7;

/// Fallback is a weak signal: its configured weight is scaled by this factor.
pub const FALLBACK_DAMPING: f64 = 0.1;

/// Output scores are rounded to this many decimal places.
pub const SCORE_DECIMALS: i32 = 2;
