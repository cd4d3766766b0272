mod config_error;
mod request_error;

pub use config_error::ConfigError;
pub use request_error::RequestError;

/// Top-level error for the nextup engine.
#[derive(Debug, thiserror::Error)]
pub enum NextupError {
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl NextupError {
    /// Whether this is an invalid-argument failure raised before any stage ran.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

pub type NextupResult<T> = Result<T, NextupError>;
