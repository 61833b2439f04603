use figment::Jail;
use prolio_config::{ConfigError, ProlioConfig};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("PROLIO_API__BASE_URL", "https://api.prolio.test/admin/");
        jail.set_env("PROLIO_API__TOKEN", "tok_from_env");
        jail.set_env("PROLIO_GATE__SUCCESS_DELAY_MS", "2000");

        let config = ProlioConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://api.prolio.test/admin/");
        assert_eq!(config.api.token, "tok_from_env");
        assert_eq!(config.gate.success_delay_ms, 2000);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_rejected_by_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("PROLIO_API__TIMEOUT_SECS", "0");

        let err = ProlioConfig::load().expect_err("zero timeout should fail");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_env_value_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("PROLIO_API__TIMEOUT_SECS", "soon");

        let err = ProlioConfig::load().expect_err("non-numeric timeout should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
