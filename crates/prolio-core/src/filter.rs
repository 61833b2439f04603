//! Table filtering and date display for entity lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Entity;
use crate::enums::EntityStatus;

/// Filter applied to an entity table, both as API query parameters and
/// locally on the fetched rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFilter {
    pub status: Option<EntityStatus>,
    pub search: Option<String>,
}

impl EntityFilter {
    #[must_use]
    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether `entity` passes this filter. Search is a case-insensitive
    /// substring match over name and id; a blank search matches everything.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        if self.status.is_some_and(|status| status != entity.status) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                entity.name.to_lowercase().contains(&needle)
                    || entity.id.to_lowercase().contains(&needle)
            }
        }
    }

    /// Keep matching rows, preserving order.
    #[must_use]
    pub fn apply(&self, entities: &[Entity]) -> Vec<Entity> {
        entities
            .iter()
            .filter(|entity| self.matches(entity))
            .cloned()
            .collect()
    }

    /// Query-string pairs for the list endpoint.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

/// Render a timestamp the way tables show it: `05 Mar 2024`.
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

/// Like [`format_date`], with `-` for a missing timestamp.
#[must_use]
pub fn format_optional_date(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| crate::checklist::MISSING_VALUE.to_string(), format_date)
}
