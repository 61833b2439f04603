//! Entity structs for Prolio marketplace records.
//!
//! The dashboard never owns these records; it holds a transient copy fetched
//! from the API and refreshed after each mutating action. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod document;
mod entity;

pub use document::DocumentRef;
pub use entity::Entity;
