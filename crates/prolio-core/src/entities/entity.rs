use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DocumentRef;
use crate::enums::EntityStatus;

/// A company, banner, influencer, or product as returned by the API.
///
/// Only the fields the dashboard reasons about are typed. Everything else the
/// API sends (GST number, contact email, banner title, ...) lands in `fields`
/// and is looked up by checklist templates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub status: EntityStatus,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Entity {
    /// Render a free-form field as display text, or `None` if absent or null.
    #[must_use]
    pub fn field_text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_api_shape_with_extra_fields() {
        let json = r#"{
            "_id": "cmp-81f2",
            "name": "Acme Tools",
            "status": "pending",
            "createdAt": "2024-03-05T10:00:00Z",
            "gstNumber": "29ABCDE1234F1Z5",
            "employees": 42,
            "documents": [{"name": "GST", "url": "https://cdn.prolio.test/gst.pdf"}]
        }"#;

        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.id, "cmp-81f2");
        assert_eq!(entity.status, EntityStatus::Pending);
        assert_eq!(entity.documents.len(), 1);
        assert_eq!(entity.field_text("gstNumber").as_deref(), Some("29ABCDE1234F1Z5"));
        assert_eq!(entity.field_text("employees").as_deref(), Some("42"));
        assert_eq!(entity.field_text("missing"), None);
    }

    #[test]
    fn optional_parts_default() {
        let entity: Entity = serde_json::from_str(r#"{"id": "ban-1", "status": "active"}"#).unwrap();
        assert!(entity.name.is_empty());
        assert!(entity.created_at.is_none());
        assert!(entity.documents.is_empty());
        assert_eq!(entity.status, EntityStatus::Verified);
    }
}
