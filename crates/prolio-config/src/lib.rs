//! # prolio-config
//!
//! Layered configuration loading for Prolio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROLIO_*` prefix, `__` as separator)
//! 2. Project-level `.prolio/config.toml`
//! 3. User-level `~/.config/prolio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROLIO_API__BASE_URL` -> `api.base_url`,
//! `PROLIO_GATE__SUCCESS_DELAY_MS` -> `gate.success_delay_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use prolio_config::ProlioConfig;
//!
//! let config = ProlioConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_configured() {
//!     println!("API: {}", config.api.base_url);
//! }
//! ```

mod api;
mod error;
mod gate;
mod general;
mod media;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use gate::GateConfig;
pub use general::GeneralConfig;
pub use media::MediaConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProlioConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ProlioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".prolio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PROLIO_").split("__"))
    }

    /// Reject values that would make the dashboard misbehave at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.is_configured()
            && !(self.api.base_url.starts_with("http://")
                || self.api.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.media.banner_width == 0 || self.media.banner_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "media".to_string(),
                reason: "banner dimensions must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prolio").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ProlioConfig::default();
        assert!(!config.api.is_configured());
        assert_eq!(config.gate.success_delay_ms, 1500);
        assert_eq!(config.media.banner_width, 1200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = ProlioConfig::figment();
        let config: ProlioConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = ProlioConfig::default();
        config.api.base_url = "ftp://api.prolio.test".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "api.base_url"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = ProlioConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
