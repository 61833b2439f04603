use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

/// Settings shared by every command.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows printed by `prolio list` when no `--limit` is given.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_uses_twenty() {
        let config: GeneralConfig = figment::Figment::new().extract().unwrap();
        assert_eq!(config.default_limit, 20);
    }
}
