//! # nextup-ranking
//!
//! The next-item recommendation engine. Given an anchor item, a candidate
//! pool and the click-next transition log, produce one ranked batch.
//!
//! ## Architecture
//!
//! ```text
//! RecommendationEngine (Recommender)
//! └── RankingPipeline
//!     ├── Bucketing    (lineage, same creator, same server method, click-next, fallback)
//!     ├── Scorer       (flat weights + decay-weighted, max-normalized click-next)
//!     ├── Quota        (lineage minimum in the top slots)
//!     ├── Exploration  (Fisher–Yates sampled slots, re-sorted by score)
//!     └── Deduplication (by item id)
//! ```
//!
//! Every stage is a total function over request-scoped data; the only
//! injected state is the clock and the random source.

pub mod bucketing;
pub mod engine;
pub mod ranking;
pub mod report;

pub use bucketing::Buckets;
pub use engine::RecommendationEngine;
pub use ranking::RankingPipeline;
pub use report::{PipelineStats, RecommendationReport};
