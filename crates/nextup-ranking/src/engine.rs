//! RecommendationEngine: implements Recommender, owns config, clock and random source.

use nextup_core::config::RankingConfig;
use nextup_core::errors::NextupResult;
use nextup_core::models::{RecommendRequest, Recommendation};
use nextup_core::traits::{Clock, EntropyRandom, RandomSource, Recommender, SystemClock};
use nextup_observability::recommend_span;
use serde_json::Value;
use tracing::{info, warn};

use crate::ranking::RankingPipeline;
use crate::report::RecommendationReport;

/// The recommendation entry point.
///
/// Holds no per-request state: every call reads only its request snapshot,
/// the clock, and the random source.
pub struct RecommendationEngine {
    pipeline: RankingPipeline,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
}

impl RecommendationEngine {
    /// Build an engine with injected clock and random source.
    ///
    /// Fails if the config does not validate.
    pub fn new(
        config: RankingConfig,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> NextupResult<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected ranking config");
            return Err(e);
        }
        Ok(Self {
            pipeline: RankingPipeline::new(config),
            clock,
            rng,
        })
    }

    /// Wall clock and an entropy-seeded random source.
    pub fn with_system_defaults(config: RankingConfig) -> NextupResult<Self> {
        Self::new(
            config,
            Box::new(SystemClock),
            Box::new(EntropyRandom::new()),
        )
    }

    pub fn config(&self) -> &RankingConfig {
        self.pipeline.config()
    }

    /// Run the pipeline and return the batch together with stage stats.
    pub fn recommend_with_report(
        &mut self,
        request: &RecommendRequest,
    ) -> NextupResult<RecommendationReport> {
        let anchor = request.anchor()?;
        let span = recommend_span!(anchor.id, request.pool.len(), request.transitions.len());
        let _guard = span.enter();

        let now = self.clock.now();
        let report = self.pipeline.run(
            anchor,
            &request.pool,
            &request.transitions,
            now,
            self.rng.as_mut(),
        );

        info!(
            anchor = %anchor.id,
            results = report.recommendations.len(),
            "recommendation complete"
        );
        Ok(report)
    }

    /// Parse a JSON request and rank it.
    pub fn recommend_json(&mut self, value: &Value) -> NextupResult<Vec<Recommendation>> {
        let request = RecommendRequest::from_json_value(value)?;
        self.recommend(&request)
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(&mut self, request: &RecommendRequest) -> NextupResult<Vec<Recommendation>> {
        self.recommend_with_report(request)
            .map(|report| report.recommendations)
    }
}
