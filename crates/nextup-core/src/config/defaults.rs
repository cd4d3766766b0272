// Single source of truth for all default values.

// --- Signal weights ---
pub const DEFAULT_LINEAGE_WEIGHT: f64 = 100.0;
pub const DEFAULT_SAME_CREATOR_WEIGHT: f64 = 50.0;
pub const DEFAULT_SAME_SERVER_METHOD_WEIGHT: f64 = 40.0;
pub const DEFAULT_CLICK_NEXT_WEIGHT: f64 = 100.0;
pub const DEFAULT_FALLBACK_WEIGHT: f64 = 60.0;

// --- Caps ---
pub const DEFAULT_TRANSITION_CAP_PER_FROM: usize = 30;
pub const DEFAULT_CANDIDATE_CAP_PER_SIGNAL: usize = 100;

// --- Decay ---
pub const DEFAULT_DECAY_HALF_LIFE_DAYS: f64 = 7.0;
pub const DEFAULT_WINDOW_DAYS: f64 = 0.0; // disabled

// --- Batch & exploration ---
pub const DEFAULT_BATCH_SIZE: usize = 20;
pub const DEFAULT_RANDOM_FRACTION: f64 = 0.3;
pub const DEFAULT_RANDOM_SLOTS_PER_BATCH: usize = 0; // use fraction
pub const DEFAULT_LINEAGE_MIN_SLOTS: usize = 2;
pub const DEFAULT_FALLBACK_ENABLED: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
