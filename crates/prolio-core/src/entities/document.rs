use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocumentKind;

/// A document uploaded for review (registration certificate, ID proof, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DocumentRef {
    pub name: String,
    pub url: String,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Presentation kind derived from the URL's extension.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::classify(&self.url)
    }
}
