//! # prolio-client
//!
//! HTTP client for the Prolio marketplace admin API.
//!
//! Every call returns the API's `{status, message}` envelope untouched so
//! callers can show the server's message verbatim. Routes, relative to the
//! configured base URL:
//! - `GET {collection}/{id}` : fetch one entity
//! - `GET {collection}?status=..&search=..` : list entities
//! - `PUT {collection}/{id}/status` : transition status
//! - `PUT {collection}/{id}/reject` : reject with a reason

mod error;
mod http;

pub use error::ClientError;

use async_trait::async_trait;
use prolio_config::ApiConfig;
use prolio_core::api::EntityApi;
use prolio_core::entities::Entity;
use prolio_core::enums::{EntityKind, EntityStatus};
use prolio_core::errors::RemoteError;
use prolio_core::filter::EntityFilter;
use prolio_core::responses::{DataReply, RemoteReply};
use serde::Serialize;

use crate::http::{check_reply, check_response};

#[derive(Serialize)]
struct StatusBody {
    status: EntityStatus,
}

#[derive(Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the marketplace admin API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] if no base URL is set, or
    /// [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        if !config.is_configured() {
            return Err(ClientError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("prolio-admin/0.1")
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            token: config.has_token().then(|| config.token.clone()),
        })
    }

    fn url(&self, kind: EntityKind, suffix: &str) -> String {
        format!("{}/{}{suffix}", self.base_url, kind.collection())
    }

    fn entity_url(&self, kind: EntityKind, id: &str, action: Option<&str>) -> String {
        let mut suffix = format!("/{}", urlencoding::encode(id));
        if let Some(action) = action {
            suffix.push('/');
            suffix.push_str(action);
        }
        self.url(kind, &suffix)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch a single entity.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch(&self, kind: EntityKind, id: &str) -> Result<Entity, ClientError> {
        let url = self.entity_url(kind, id, None);
        tracing::debug!(%kind, id, "fetching entity");
        let resp = check_response(self.authorize(self.http.get(&url)).send().await?).await?;
        let reply: DataReply<Entity> = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(reply.data)
    }

    /// List entities, passing the filter as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list(
        &self,
        kind: EntityKind,
        filter: &EntityFilter,
    ) -> Result<Vec<Entity>, ClientError> {
        let query = filter
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        let url = if query.is_empty() {
            self.url(kind, "")
        } else {
            self.url(kind, &format!("?{query}"))
        };
        tracing::debug!(%kind, %url, "listing entities");
        let resp = check_response(self.authorize(self.http.get(&url)).send().await?).await?;
        let reply: DataReply<Vec<Entity>> = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(reply.data)
    }

    /// Move an entity to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the API (HTTP status or
    /// envelope status) reports failure.
    pub async fn update_status(
        &self,
        kind: EntityKind,
        id: &str,
        status: EntityStatus,
    ) -> Result<RemoteReply, ClientError> {
        let url = self.entity_url(kind, id, Some("status"));
        tracing::info!(%kind, id, %status, "requesting status transition");
        let request = self.http.put(&url).json(&StatusBody { status });
        let resp = check_response(self.authorize(request).send().await?).await?;
        let reply: RemoteReply = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        check_reply(reply)
    }

    /// Reject an entity with a reason.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the API (HTTP status or
    /// envelope status) reports failure.
    pub async fn reject(
        &self,
        kind: EntityKind,
        id: &str,
        reason: &str,
    ) -> Result<RemoteReply, ClientError> {
        let url = self.entity_url(kind, id, Some("reject"));
        tracing::info!(%kind, id, "requesting rejection");
        let request = self.http.put(&url).json(&RejectBody { reason });
        let resp = check_response(self.authorize(request).send().await?).await?;
        let reply: RemoteReply = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        check_reply(reply)
    }
}

#[async_trait]
impl EntityApi for ApiClient {
    async fn fetch_entity(&self, kind: EntityKind, id: &str) -> Result<Entity, RemoteError> {
        Ok(self.fetch(kind, id).await?)
    }

    async fn transition_status(
        &self,
        kind: EntityKind,
        id: &str,
        status: EntityStatus,
    ) -> Result<RemoteReply, RemoteError> {
        Ok(self.update_status(kind, id, status).await?)
    }

    async fn reject_entity(
        &self,
        kind: EntityKind,
        id: &str,
        reason: &str,
    ) -> Result<RemoteReply, RemoteError> {
        Ok(self.reject(kind, id, reason).await?)
    }

    async fn list_entities(
        &self,
        kind: EntityKind,
        filter: &EntityFilter,
    ) -> Result<Vec<Entity>, RemoteError> {
        Ok(self.list(kind, filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn unconfigured_base_url_is_rejected() {
        let err = ApiClient::new(&ApiConfig::default()).unwrap_err();
        assert!(matches!(err, ClientError::NotConfigured));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new(&config("https://api.prolio.test/admin/")).unwrap();
        assert_eq!(
            client.entity_url(EntityKind::Company, "cmp-1", Some("status")),
            "https://api.prolio.test/admin/companies/cmp-1/status"
        );
    }

    #[test]
    fn ids_are_percent_encoded() {
        let client = ApiClient::new(&config("https://api.prolio.test")).unwrap();
        assert_eq!(
            client.entity_url(EntityKind::Banner, "a/b c", None),
            "https://api.prolio.test/banners/a%2Fb%20c"
        );
    }

    #[test]
    fn empty_token_is_not_sent() {
        let client = ApiClient::new(&config("https://api.prolio.test")).unwrap();
        assert!(client.token.is_none());
    }
}
