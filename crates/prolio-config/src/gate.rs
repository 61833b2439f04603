//! Review gate behavior settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_success_delay_ms() -> u64 {
    1500
}

fn default_fallback_error_message() -> String {
    "Something went wrong".to_string()
}

fn default_incomplete_notice() -> String {
    "Please verify all steps".to_string()
}

fn default_close_container_id() -> String {
    "modal-container".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GateConfig {
    /// How long a success notice stays up before the review closes.
    #[serde(default = "default_success_delay_ms")]
    pub success_delay_ms: u64,

    /// Shown when a remote call fails without a server message.
    #[serde(default = "default_fallback_error_message")]
    pub fallback_error_message: String,

    /// Shown when approve is requested before every step is verified.
    #[serde(default = "default_incomplete_notice")]
    pub incomplete_notice: String,

    /// Element id whose click dismisses the confirmation modal.
    #[serde(default = "default_close_container_id")]
    pub close_container_id: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: default_success_delay_ms(),
            fallback_error_message: default_fallback_error_message(),
            incomplete_notice: default_incomplete_notice(),
            close_container_id: default_close_container_id(),
        }
    }
}

impl GateConfig {
    #[must_use]
    pub const fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GateConfig::default();
        assert_eq!(config.success_delay(), Duration::from_millis(1500));
        assert_eq!(config.fallback_error_message, "Something went wrong");
        assert_eq!(config.incomplete_notice, "Please verify all steps");
        assert_eq!(config.close_container_id, "modal-container");
    }
}
