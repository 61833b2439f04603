//! The list view a review is launched from.

use std::sync::Arc;

use prolio_core::api::EntityApi;
use prolio_core::entities::Entity;
use prolio_core::enums::EntityKind;
use prolio_core::filter::EntityFilter;

use crate::notifier::{Notice, Notifier};

pub struct EntityTable {
    api: Arc<dyn EntityApi>,
    notifier: Arc<dyn Notifier>,
    kind: EntityKind,
    filter: EntityFilter,
    rows: Vec<Entity>,
    fallback_error_message: String,
}

impl EntityTable {
    pub fn new(
        api: Arc<dyn EntityApi>,
        notifier: Arc<dyn Notifier>,
        kind: EntityKind,
        fallback_error_message: impl Into<String>,
    ) -> Self {
        Self {
            api,
            notifier,
            kind,
            filter: EntityFilter::default(),
            rows: Vec::new(),
            fallback_error_message: fallback_error_message.into(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: EntityFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn rows(&self) -> &[Entity] {
        &self.rows
    }

    /// Reload rows. On failure an error notice is emitted, the previous rows
    /// are kept and `false` is returned.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list_entities(self.kind, &self.filter).await {
            Ok(rows) => {
                self.rows = self.filter.apply(&rows);
                tracing::debug!(kind = %self.kind, rows = self.rows.len(), "table refreshed");
                true
            }
            Err(err) => {
                tracing::error!(kind = %self.kind, error = %err, "table refresh failed");
                self.notifier
                    .notify(Notice::error(err.user_message(&self.fallback_error_message)));
                false
            }
        }
    }
}
