//! # nextup-decay
//!
//! Time decay for click-next transition counts.
//!
//! A [`DecayPolicy`] is selected once per request from the ranking config
//! and then applied uniformly to every transition:
//!
//! ```text
//! HalfLife(h)  →  count × 0.5^(age / h)
//! Window(w)    →  count if age ≤ w, else 0
//! Identity     →  count
//! ```

pub mod formula;
pub mod policy;

pub use formula::{age_days, breakdown, decay, DecayBreakdown};
pub use policy::DecayPolicy;
