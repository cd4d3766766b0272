use crate::errors::NextupResult;
use crate::models::{RecommendRequest, Recommendation};

/// Next-item recommendation for an anchor.
pub trait Recommender {
    /// Rank the request's pool relative to its anchor, returning at most one
    /// batch of recommendations sorted by descending score.
    fn recommend(&mut self, request: &RecommendRequest) -> NextupResult<Vec<Recommendation>>;
}
