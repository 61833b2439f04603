//! Upload validation settings.

use prolio_core::media::DimensionRule;
use serde::{Deserialize, Serialize};

const fn default_banner_width() -> u32 {
    1200
}

const fn default_banner_height() -> u32 {
    400
}

const fn default_exact() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    #[serde(default = "default_banner_width")]
    pub banner_width: u32,

    #[serde(default = "default_banner_height")]
    pub banner_height: u32,

    /// Require the exact size rather than a minimum.
    #[serde(default = "default_exact")]
    pub exact: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            banner_width: default_banner_width(),
            banner_height: default_banner_height(),
            exact: default_exact(),
        }
    }
}

impl MediaConfig {
    #[must_use]
    pub const fn banner_rule(&self) -> DimensionRule {
        if self.exact {
            DimensionRule::exact(self.banner_width, self.banner_height)
        } else {
            DimensionRule::at_least(self.banner_width, self.banner_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prolio_core::media::DimensionMode;

    #[test]
    fn default_rule_is_exact_banner_size() {
        let rule = MediaConfig::default().banner_rule();
        assert_eq!(rule, DimensionRule::exact(1200, 400));
    }

    #[test]
    fn inexact_config_yields_minimum_rule() {
        let config = MediaConfig {
            exact: false,
            ..Default::default()
        };
        assert_eq!(config.banner_rule().mode, DimensionMode::AtLeast);
    }
}
