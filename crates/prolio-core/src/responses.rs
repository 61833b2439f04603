//! Response envelopes exchanged with the marketplace API and printed by the CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::checklist::ChecklistStep;
use crate::entities::Entity;

/// `{status, message}` reply from a mutating call. The message is shown to
/// the user verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RemoteReply {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

impl RemoteReply {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// `{status, message, data}` reply from a read call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataReply<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Response from `prolio show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityDetailResponse {
    pub entity: Entity,
    pub checklist: Vec<ChecklistStep>,
}

/// Response from `prolio check-image`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImageCheckResponse {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub valid: bool,
    pub message: Option<String>,
}
