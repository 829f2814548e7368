//! Error types for the suite's support library.
//!
//! Assertion failures live in the tests themselves; these types cover what
//! can go wrong below the assertion layer: loading configuration and talking
//! to the API at the transport level. Non-2xx statuses are not errors here.
//! Scenarios assert on exact status codes, including expected 404s, so the
//! client returns every status as data.

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(String),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    #[error("missing required configuration: {field}")]
    Missing { field: String },
}

/// Transport-level API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body (HTTP {status}) is not valid JSON: {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;
