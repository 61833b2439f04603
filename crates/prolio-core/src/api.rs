//! The remote capability set every review flow is built on.
//!
//! The dashboard delegates all business logic to the marketplace API. This
//! trait is the seam: `prolio-client` implements it over HTTP and tests
//! implement it in memory.

use async_trait::async_trait;

use crate::entities::Entity;
use crate::enums::{EntityKind, EntityStatus};
use crate::errors::RemoteError;
use crate::filter::EntityFilter;
use crate::responses::RemoteReply;

#[async_trait]
pub trait EntityApi: Send + Sync {
    /// Fetch one entity to populate a review.
    async fn fetch_entity(&self, kind: EntityKind, id: &str) -> Result<Entity, RemoteError>;

    /// Move an entity to `status` (verify, block, unblock, ...).
    async fn transition_status(
        &self,
        kind: EntityKind,
        id: &str,
        status: EntityStatus,
    ) -> Result<RemoteReply, RemoteError>;

    /// Reject an entity with a mandatory free-text reason.
    async fn reject_entity(
        &self,
        kind: EntityKind,
        id: &str,
        reason: &str,
    ) -> Result<RemoteReply, RemoteError>;

    /// List entities for a table view.
    async fn list_entities(
        &self,
        kind: EntityKind,
        filter: &EntityFilter,
    ) -> Result<Vec<Entity>, RemoteError>;
}
