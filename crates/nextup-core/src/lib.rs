//! # nextup-core
//!
//! Foundation crate for the nextup recommendation engine.
//! Defines the item/transition model, config, errors, injected-dependency
//! traits and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{NextupConfig, RankingConfig};
pub use errors::{NextupError, NextupResult};
pub use models::{Item, ItemId, Reason, RecommendRequest, Recommendation, Transition};
pub use traits::{Clock, RandomSource, Recommender};
