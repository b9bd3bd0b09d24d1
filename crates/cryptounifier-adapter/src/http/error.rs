/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, URLs)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the CryptoUnifier adapter
#[derive(Error, Debug)]
pub enum CryptoUnifierError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CryptoUnifierError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        CryptoUnifierError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }

    /// Check if the error indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, CryptoUnifierError::Api { code: 401 | 403, .. })
    }

    /// Check if the error indicates an exhausted credit balance
    pub fn is_credit_error(&self) -> bool {
        matches!(self, CryptoUnifierError::Api { code: 402, .. })
    }
}

/// Result type alias for CryptoUnifier operations
pub type Result<T> = std::result::Result<T, CryptoUnifierError>;
