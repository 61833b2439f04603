//! Serde roundtrip and JsonSchema validation tests for API and CLI payloads.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use prolio_core::checklist::{ChecklistStep, ChecklistTemplate, StepContent};
use prolio_core::entities::*;
use prolio_core::enums::*;
use prolio_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn company() -> Entity {
    let mut fields = BTreeMap::new();
    fields.insert("companyName".to_string(), serde_json::json!("Acme Tools"));
    fields.insert("gstNumber".to_string(), serde_json::json!("29ABCDE1234F1Z5"));
    Entity {
        id: "cmp-81f2".into(),
        name: "Acme Tools".into(),
        status: EntityStatus::Pending,
        created_at: Some(Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap()),
        documents: vec![
            DocumentRef::new("GST certificate", "https://cdn.prolio.test/gst.pdf"),
            DocumentRef::new("Storefront", "https://cdn.prolio.test/front.jpg"),
        ],
        fields,
    }
}

roundtrip_and_validate!(entity_roundtrip, Entity, company());

roundtrip_and_validate!(
    checklist_step_roundtrip,
    ChecklistStep,
    ChecklistStep {
        title: "Company details".into(),
        content: StepContent::Fields(vec![("GST number".into(), "29ABCDE1234F1Z5".into())]),
    }
);

roundtrip_and_validate!(
    remote_reply_roundtrip,
    RemoteReply,
    RemoteReply::new(200, "Company verified")
);

roundtrip_and_validate!(
    entity_detail_roundtrip,
    EntityDetailResponse,
    EntityDetailResponse {
        checklist: ChecklistTemplate::for_kind(EntityKind::Company).build(&company()),
        entity: company(),
    }
);

#[test]
fn list_reply_parses_api_payload() {
    let json = r#"{
        "status": 200,
        "message": "ok",
        "data": [
            {"_id": "ban-1", "name": "Diwali sale", "status": "active"},
            {"_id": "ban-2", "name": "Clearance", "status": "blocked"}
        ]
    }"#;
    let reply: DataReply<Vec<Entity>> = serde_json::from_str(json).unwrap();
    assert_eq!(reply.data.len(), 2);
    assert_eq!(reply.data[0].status, EntityStatus::Verified);
    assert_eq!(reply.data[1].status, EntityStatus::Blocked);
}

#[test]
fn reply_without_message_defaults_to_empty() {
    let reply: RemoteReply = serde_json::from_str(r#"{"status": 204}"#).unwrap();
    assert!(reply.is_success());
    assert!(reply.message.is_empty());
}
