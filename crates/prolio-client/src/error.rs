//! Client error types.

use prolio_core::errors::RemoteError;
use thiserror::Error;

/// Errors that can occur when talking to the marketplace API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status code returned by the API (HTTP or envelope).
        status: u16,
        /// Server-provided message, or the raw response body.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No base URL is configured.
    #[error("API base URL is not configured")]
    NotConfigured,

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl From<ClientError> for RemoteError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Api { status, message } => Self::server(status, message),
            ClientError::RateLimited { .. } => Self {
                status: Some(429),
                message: None,
                detail: error.to_string(),
            },
            ClientError::Http(ref inner) => Self {
                status: inner.status().map(|s| s.as_u16()),
                message: None,
                detail: error.to_string(),
            },
            ClientError::Parse(_) | ClientError::NotConfigured => Self::transport(error.to_string()),
        }
    }
}
