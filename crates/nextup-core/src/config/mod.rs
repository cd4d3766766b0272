//! Configuration, loadable from TOML with per-field defaults.

pub mod defaults;
mod observability_config;
mod ranking_config;

pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, NextupResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextupConfig {
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl NextupConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> NextupResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.ranking.validate()?;
        Ok(config)
    }

    /// Render the config back to TOML.
    pub fn to_toml(&self) -> NextupResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
