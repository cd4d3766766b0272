//! Per-request diagnostics.

use serde::Serialize;

use nextup_core::models::Recommendation;
use nextup_decay::DecayPolicy;

/// Counts recorded at each pipeline stage. Ranking never reads these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStats {
    pub lineage: usize,
    pub same_creator: usize,
    pub same_server_method: usize,
    /// Click-next transitions kept after the per-anchor cap.
    pub click_next: usize,
    pub fallback: usize,
    pub decay_policy: DecayPolicy,
    /// Distinct candidates that received a score.
    pub scored: usize,
    /// Lineage items promoted into the protected top slots.
    pub promoted: usize,
    pub random_slots: usize,
    pub random_picks: usize,
}

/// Recommendations plus the stats of the run that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<Recommendation>,
    pub stats: PipelineStats,
}
