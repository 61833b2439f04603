//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use prolio_config::ProlioConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.prolio.test/admin/"
token = "adm-token"
timeout_secs = 30
"#,
        )?;

        let config: ProlioConfig = Figment::from(Serialized::defaults(ProlioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.prolio.test/admin/");
        assert_eq!(config.api.token, "adm-token");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.is_configured());
        assert!(config.api.has_token());
        Ok(())
    });
}

#[test]
fn partial_gate_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gate]
success_delay_ms = 250
"#,
        )?;

        let config: ProlioConfig = Figment::from(Serialized::defaults(ProlioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gate.success_delay_ms, 250);
        assert_eq!(config.gate.fallback_error_message, "Something went wrong");
        assert_eq!(config.gate.close_container_id, "modal-container");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[media]
banner_width = 1920
banner_height = 600
"#,
        )?;
        jail.set_env("PROLIO_MEDIA__BANNER_WIDTH", "1600");

        let config: ProlioConfig = Figment::from(Serialized::defaults(ProlioConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PROLIO_").split("__"))
            .extract()?;

        assert_eq!(config.media.banner_width, 1600);
        assert_eq!(config.media.banner_height, 600);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".prolio")?;
        jail.create_file(
            ".prolio/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config = ProlioConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}
