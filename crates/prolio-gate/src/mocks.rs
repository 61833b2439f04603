//! In-memory [`EntityApi`] for tests and offline demos.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use prolio_core::api::EntityApi;
use prolio_core::entities::Entity;
use prolio_core::enums::{EntityKind, EntityStatus};
use prolio_core::errors::RemoteError;
use prolio_core::filter::EntityFilter;
use prolio_core::responses::RemoteReply;

/// A call received by [`MockEntityApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Fetch { kind: EntityKind, id: String },
    Transition { kind: EntityKind, id: String, status: EntityStatus },
    Reject { kind: EntityKind, id: String, reason: String },
    List { kind: EntityKind, filter: EntityFilter },
}

#[derive(Debug, Default)]
struct MockState {
    entities: BTreeMap<(EntityKind, String), Entity>,
    failures: VecDeque<RemoteError>,
    replies: VecDeque<RemoteReply>,
    calls: Vec<ApiCall>,
}

/// Stores entities per kind and applies transitions to them.
///
/// Queued failures and replies are consumed by the next calls, in order.
#[derive(Debug, Default)]
pub struct MockEntityApi {
    state: Mutex<MockState>,
}

impl MockEntityApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entity` under `kind`.
    #[must_use]
    pub fn with_entity(self, kind: EntityKind, entity: Entity) -> Self {
        self.insert(kind, entity);
        self
    }

    pub fn insert(&self, kind: EntityKind, entity: Entity) {
        if let Ok(mut state) = self.state.lock() {
            state.entities.insert((kind, entity.id.clone()), entity);
        }
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&self, error: RemoteError) {
        if let Ok(mut state) = self.state.lock() {
            state.failures.push_back(error);
        }
    }

    /// Answer the next successful mutation with `reply`.
    pub fn reply_next(&self, reply: RemoteReply) {
        if let Ok(mut state) = self.state.lock() {
            state.replies.push_back(reply);
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state
            .lock()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    pub fn entity(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.entities.get(&(kind, id.to_string())).cloned())
    }

    fn record(&self, call: ApiCall) -> Result<(), RemoteError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| RemoteError::transport("mock state poisoned"))?;
        state.calls.push(call);
        state.failures.pop_front().map_or(Ok(()), Err)
    }

    fn mutate(
        &self,
        kind: EntityKind,
        id: &str,
        status: EntityStatus,
        default_message: String,
    ) -> Result<RemoteReply, RemoteError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| RemoteError::transport("mock state poisoned"))?;
        let entity = state
            .entities
            .get_mut(&(kind, id.to_string()))
            .ok_or_else(|| RemoteError::server(404, format!("{kind} not found")))?;
        entity.status = status;
        Ok(state
            .replies
            .pop_front()
            .unwrap_or_else(|| RemoteReply::new(200, default_message)))
    }
}

#[async_trait]
impl EntityApi for MockEntityApi {
    async fn fetch_entity(&self, kind: EntityKind, id: &str) -> Result<Entity, RemoteError> {
        self.record(ApiCall::Fetch {
            kind,
            id: id.to_string(),
        })?;
        self.entity(kind, id)
            .ok_or_else(|| RemoteError::server(404, format!("{kind} not found")))
    }

    async fn transition_status(
        &self,
        kind: EntityKind,
        id: &str,
        status: EntityStatus,
    ) -> Result<RemoteReply, RemoteError> {
        self.record(ApiCall::Transition {
            kind,
            id: id.to_string(),
            status,
        })?;
        self.mutate(kind, id, status, format!("{kind} {status}"))
    }

    async fn reject_entity(
        &self,
        kind: EntityKind,
        id: &str,
        reason: &str,
    ) -> Result<RemoteReply, RemoteError> {
        self.record(ApiCall::Reject {
            kind,
            id: id.to_string(),
            reason: reason.to_string(),
        })?;
        self.mutate(kind, id, EntityStatus::Rejected, format!("{kind} rejected"))
    }

    async fn list_entities(
        &self,
        kind: EntityKind,
        filter: &EntityFilter,
    ) -> Result<Vec<Entity>, RemoteError> {
        self.record(ApiCall::List {
            kind,
            filter: filter.clone(),
        })?;
        let state = self
            .state
            .lock()
            .map_err(|_| RemoteError::transport("mock state poisoned"))?;
        Ok(state
            .entities
            .iter()
            .filter(|((k, _), _)| *k == kind)
            .map(|(_, entity)| entity.clone())
            .collect())
    }
}
