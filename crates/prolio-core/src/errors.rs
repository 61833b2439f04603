//! Cross-cutting error types for Prolio.
//!
//! Domain-specific errors (e.g., `ClientError`, `GateError`) are defined in
//! their respective crates. [`RemoteError`] is the error shape every
//! [`EntityApi`](crate::api::EntityApi) implementation reports, so the gate
//! can surface server messages without knowing about HTTP.

use thiserror::Error;

/// Errors raised by local checks in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints, image dimensions).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A failed call against the remote system of record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("remote call failed{}: {detail}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
pub struct RemoteError {
    /// HTTP-style status code, when the server answered at all.
    pub status: Option<u16>,
    /// Human-readable message supplied by the server.
    pub message: Option<String>,
    /// Diagnostic detail for logs.
    pub detail: String,
}

impl RemoteError {
    /// A transport-level failure with no server reply.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    /// A server reply carrying a status and message.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: Some(status),
            detail: message.clone(),
            message: Some(message),
        }
    }

    /// The text to show a user: the server message verbatim when present,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passes_through() {
        let err = RemoteError::server(409, "Company already verified");
        assert_eq!(err.user_message("Something went wrong"), "Company already verified");
        assert_eq!(err.to_string(), "remote call failed (409): Company already verified");
    }

    #[test]
    fn transport_error_uses_fallback() {
        let err = RemoteError::transport("connection refused");
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
        assert_eq!(err.to_string(), "remote call failed: connection refused");
    }

    #[test]
    fn blank_server_message_uses_fallback() {
        let err = RemoteError::server(500, "  ");
        assert_eq!(err.user_message("fallback"), "fallback");
    }
}
