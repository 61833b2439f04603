use std::sync::Arc;

use anyhow::Context;
use prolio_client::ApiClient;
use prolio_config::ProlioConfig;
use prolio_gate::GateSettings;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ProlioConfig,
    pub api: Arc<ApiClient>,
}

impl AppContext {
    /// Build the API client from configuration.
    pub fn init(config: ProlioConfig) -> anyhow::Result<Self> {
        config
            .api
            .require()
            .context("set api.base_url in .prolio/config.toml or PROLIO_API__BASE_URL")?;
        let api = ApiClient::new(&config.api).context("failed to build API client")?;
        Ok(Self {
            config,
            api: Arc::new(api),
        })
    }

    #[must_use]
    pub fn gate_settings(&self) -> GateSettings {
        GateSettings::from(&self.config.gate)
    }

    #[must_use]
    pub fn fallback_error_message(&self) -> &str {
        &self.config.gate.fallback_error_message
    }
}
