//! Error types for upstream calls and configuration
//!
//! Upstream failures are always recovered by the caller: the weather client
//! turns them into sentences, the interactive loop prints them.

use std::time::Duration;
use thiserror::Error;

/// Failure of a call to a third-party service (weather provider or model)
#[derive(Debug, Error)]
pub enum UpstreamFailure {
    /// Connection refused, DNS failure, reset, ...
    #[error("Network error: {message}")]
    Network { message: String },

    /// Request did not complete within the configured bound
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Service answered with a non-2xx status
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body could not be decoded
    #[error("Invalid response body: {message}")]
    Decode { message: String },

    /// Body decoded but a required field was absent
    #[error("Missing field '{field}' in response")]
    MissingField { field: String },
}

impl UpstreamFailure {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Create a timeout error
    pub fn timeout(duration: Duration) -> Self {
        Self::Timeout { duration }
    }

    /// Create a status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    /// Classify a reqwest error raised while sending a request bounded by `timeout`
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::timeout(timeout)
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::status(status.as_u16(), err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// Result type for upstream calls
pub type UpstreamResult<T> = Result<T, UpstreamFailure>;

/// Convert from JSON errors
impl From<serde_json::Error> for UpstreamFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode { message: err.to_string() }
    }
}

/// Errors raised while assembling the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
