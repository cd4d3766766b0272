//! Span definitions per operation: recommend and each pipeline stage.

/// Create the top-level span for one recommendation request.
#[macro_export]
macro_rules! recommend_span {
    ($anchor:expr, $pool_size:expr, $transition_count:expr) => {
        tracing::info_span!(
            "nextup.recommend",
            anchor = %$anchor,
            pool_size = $pool_size,
            transitions = $transition_count
        )
    };
}

/// Create a span for a single pipeline stage.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::debug_span!("nextup.stage", stage = $stage)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECOMMEND: &str = "nextup.recommend";
    pub const STAGE: &str = "nextup.stage";
}

/// Stage labels used with [`stage_span!`].
pub mod stages {
    pub const BUCKETING: &str = "bucketing";
    pub const SCORING: &str = "scoring";
    pub const QUOTA: &str = "quota";
    pub const EXPLORATION: &str = "exploration";
}
