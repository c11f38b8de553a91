use thiserror::Error;

/// Errors that can occur in the inventory, barcode and recipe pipelines
#[derive(Error, Debug)]
pub enum FridgeError {
    /// Input rejected before any network call (bad barcode, empty name, ...)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Failed to reach an upstream API
    #[error("Failed to fetch: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream API answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// Upstream payload could not be understood
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<serde_json::Error> for FridgeError {
    fn from(err: serde_json::Error) -> Self {
        FridgeError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FridgeError>;
