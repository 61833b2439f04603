use prolio_config::ProlioConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ProlioConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ProlioConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_single_underscore_key(&env_keys, "PROLIO_API") {
        warnings.push(
            "API config appears default while PROLIO_API* env vars exist. Use double underscores (example: PROLIO_API__BASE_URL)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "PROLIO_GATE") {
        warnings.push(
            "PROLIO_GATE* env vars need double underscores (example: PROLIO_GATE__SUCCESS_DELAY_MS)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "PROLIO_MEDIA") {
        warnings.push(
            "PROLIO_MEDIA* env vars need double underscores (example: PROLIO_MEDIA__BANNER_WIDTH)."
                .to_string(),
        );
    }

    warnings
}

/// A key under `prefix` that is not nested with `__`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use prolio_config::{ApiConfig, ProlioConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = ProlioConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("PROLIO_API_BASE_URL".to_string(), "https://api".to_string()),
                ("PROLIO_GATE_SUCCESS_DELAY_MS".to_string(), "10".to_string()),
                ("PROLIO_MEDIA_BANNER_WIDTH".to_string(), "800".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn nested_keys_do_not_warn() {
        let config = ProlioConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("PROLIO_GATE__SUCCESS_DELAY_MS".to_string(), "10".to_string()),
                ("PROLIO_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_api_does_not_warn() {
        let config = ProlioConfig {
            api: ApiConfig {
                base_url: "https://api.prolio.test".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("PROLIO_API_TOKEN".to_string(), "x".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
