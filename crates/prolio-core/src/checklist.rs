//! Checklist steps shown while reviewing an entity.
//!
//! A [`ChecklistTemplate`] is defined statically per entity kind and turned
//! into concrete [`ChecklistStep`]s when a review opens. Steps are never
//! persisted on their own; they live as long as the review does.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DocumentRef, Entity};
use crate::enums::EntityKind;

/// Placeholder shown for a field the API did not send.
pub const MISSING_VALUE: &str = "-";

/// One item of a review checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistStep {
    pub title: String,
    pub content: StepContent,
}

/// What a step displays when expanded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum StepContent {
    /// Label/value pairs, in template order.
    Fields(Vec<(String, String)>),
    /// Uploaded documents to inspect.
    Documents(Vec<DocumentRef>),
}

/// Where a templated step pulls its content from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepSource {
    /// `(label, field key)` pairs looked up on the entity.
    Fields(Vec<(String, String)>),
    /// The entity's document list.
    Documents,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepTemplate {
    pub title: String,
    pub source: StepSource,
}

impl StepTemplate {
    #[must_use]
    pub fn fields(title: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            title: title.to_string(),
            source: StepSource::Fields(
                pairs
                    .iter()
                    .map(|(label, key)| ((*label).to_string(), (*key).to_string()))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn documents(title: &str) -> Self {
        Self {
            title: title.to_string(),
            source: StepSource::Documents,
        }
    }
}

/// Ordered list of step templates for one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistTemplate {
    pub steps: Vec<StepTemplate>,
}

impl ChecklistTemplate {
    /// Built-in template for `kind`.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        let steps = match kind {
            EntityKind::Company => vec![
                StepTemplate::fields(
                    "Company details",
                    &[
                        ("Company name", "companyName"),
                        ("GST number", "gstNumber"),
                        ("PAN number", "panNumber"),
                        ("Business type", "businessType"),
                    ],
                ),
                StepTemplate::fields(
                    "Contact information",
                    &[
                        ("Owner", "ownerName"),
                        ("Email", "email"),
                        ("Phone", "phone"),
                        ("Address", "address"),
                    ],
                ),
                StepTemplate::documents("Documents"),
            ],
            EntityKind::Influencer => vec![
                StepTemplate::fields(
                    "Profile",
                    &[
                        ("Full name", "fullName"),
                        ("Email", "email"),
                        ("Phone", "phone"),
                    ],
                ),
                StepTemplate::fields(
                    "Social presence",
                    &[
                        ("Instagram", "instagram"),
                        ("YouTube", "youtube"),
                        ("Followers", "followers"),
                    ],
                ),
                StepTemplate::documents("Identity documents"),
            ],
            EntityKind::Product => vec![
                StepTemplate::fields(
                    "Product details",
                    &[
                        ("Title", "title"),
                        ("Category", "category"),
                        ("Price", "price"),
                    ],
                ),
                StepTemplate::fields("Seller", &[("Company", "companyName"), ("SKU", "sku")]),
                StepTemplate::documents("Product images"),
            ],
            EntityKind::Banner => vec![
                StepTemplate::fields(
                    "Banner details",
                    &[
                        ("Title", "title"),
                        ("Placement", "placement"),
                        ("Link", "link"),
                    ],
                ),
                StepTemplate::documents("Banner image"),
            ],
        };
        Self { steps }
    }

    /// Materialize steps for a specific entity.
    #[must_use]
    pub fn build(&self, entity: &Entity) -> Vec<ChecklistStep> {
        self.steps
            .iter()
            .map(|template| ChecklistStep {
                title: template.title.clone(),
                content: match &template.source {
                    StepSource::Fields(pairs) => StepContent::Fields(
                        pairs
                            .iter()
                            .map(|(label, key)| {
                                let value = entity
                                    .field_text(key)
                                    .unwrap_or_else(|| MISSING_VALUE.to_string());
                                (label.clone(), value)
                            })
                            .collect(),
                    ),
                    StepSource::Documents => StepContent::Documents(entity.documents.clone()),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EntityStatus;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn company() -> Entity {
        let mut fields = BTreeMap::new();
        fields.insert("companyName".to_string(), "Acme Tools".into());
        fields.insert("gstNumber".to_string(), "29ABCDE1234F1Z5".into());
        Entity {
            id: "cmp-1".into(),
            name: "Acme Tools".into(),
            status: EntityStatus::Pending,
            created_at: None,
            documents: vec![DocumentRef::new("GST", "https://cdn.prolio.test/gst.pdf")],
            fields,
        }
    }

    #[test]
    fn company_template_has_three_steps() {
        let steps = ChecklistTemplate::for_kind(EntityKind::Company).build(&company());
        let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Company details", "Contact information", "Documents"]);
    }

    #[test]
    fn missing_fields_render_placeholder() {
        let steps = ChecklistTemplate::for_kind(EntityKind::Company).build(&company());
        let StepContent::Fields(pairs) = &steps[0].content else {
            panic!("expected field step");
        };
        assert_eq!(pairs[0], ("Company name".to_string(), "Acme Tools".to_string()));
        assert_eq!(pairs[2], ("PAN number".to_string(), MISSING_VALUE.to_string()));
    }

    #[test]
    fn document_step_copies_entity_documents() {
        let steps = ChecklistTemplate::for_kind(EntityKind::Company).build(&company());
        let StepContent::Documents(docs) = &steps[2].content else {
            panic!("expected document step");
        };
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "GST");
    }

    #[test]
    fn every_kind_has_a_template() {
        for kind in EntityKind::ALL {
            assert!(!ChecklistTemplate::for_kind(kind).steps.is_empty(), "{kind}");
        }
    }
}
