//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`ClientError::Api`] carrying the server's
//! `message`) so the request methods stay focused on routes and payloads.

use prolio_core::responses::RemoteReply;

use crate::error::ClientError;

#[derive(serde::Deserialize)]
struct MessageBody {
    message: String,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ClientError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`ClientError::Api`] with the status code and
///   the JSON `message` field, or the raw body when there is none.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ClientError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status,
            message: extract_message(&body),
        });
    }
    Ok(resp)
}

/// Treat an envelope whose own `status` is not 2xx as a failure, even when
/// the HTTP status was.
pub fn check_reply(reply: RemoteReply) -> Result<RemoteReply, ClientError> {
    if reply.is_success() {
        Ok(reply)
    } else {
        Err(ClientError::Api {
            status: reply.status,
            message: reply.message,
        })
    }
}

/// Pull `message` out of a JSON error body, falling back to the body itself.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<MessageBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
