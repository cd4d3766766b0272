//! # nextup-observability
//!
//! Tracing subscriber setup and the span macros used by the ranking engine.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
