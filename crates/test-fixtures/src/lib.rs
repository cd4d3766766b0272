//! Golden scenario fixtures for the nextup ranking engine.
//!
//! Each scenario under `ranking/` is a JSON document holding a frozen clock,
//! config overrides, a raw request and the expected outcome.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use nextup_core::config::RankingConfig;
use nextup_core::models::Reason;

/// The directory holding this crate's fixture folders.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until test-fixtures is a child.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("Could not find test-fixtures directory from CARGO_MANIFEST_DIR={manifest_dir}");
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// All JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A golden ranking scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub now: DateTime<Utc>,
    #[serde(default)]
    pub config: RankingConfig,
    /// Raw request JSON, parsed by the engine's boundary.
    pub request: serde_json::Value,
    pub expected: Expected,
}

/// Assertions for a scenario. Empty fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Expected {
    /// Exact output order, when the scenario pins it.
    pub ordered_ids: Option<Vec<i64>>,
    pub present_ids: Vec<i64>,
    pub absent_ids: Vec<i64>,
    /// Item id (as string key) → reasons that must appear.
    pub reasons_include: HashMap<String, Vec<Reason>>,
    /// Item id (as string key) → reasons that must not appear.
    pub reasons_exclude: HashMap<String, Vec<Reason>>,
    /// Item id (as string key) → expected rounded score.
    pub scores: HashMap<String, f64>,
    pub max_len: Option<usize>,
}

/// Load a scenario from `ranking/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("ranking/{name}.json"))
}

/// Load every scenario under `ranking/`, paired with its file stem.
pub fn all_scenarios() -> Vec<(String, Scenario)> {
    list_fixtures("ranking")
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            (name.clone(), load_scenario(&name))
        })
        .collect()
}
