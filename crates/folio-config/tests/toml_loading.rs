//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use folio_config::FolioConfig;

#[test]
fn loads_sanity_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sanity]
project_id = "w9fhrrqx"
dataset = "staging"
api_version = "2023-01-01"
use_cdn = true
token = "sk-read"
timeout_secs = 5
cdn_host = "assets.example.com"
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.sanity.project_id, "w9fhrrqx");
        assert_eq!(config.sanity.dataset, "staging");
        assert_eq!(config.sanity.api_version, "2023-01-01");
        assert!(config.sanity.use_cdn);
        assert_eq!(config.sanity.token(), Some("sk-read"));
        assert_eq!(config.sanity.timeout_secs, Some(5));
        assert_eq!(config.sanity.cdn_host, "assets.example.com");
        assert!(config.sanity.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sanity]
project_id = "w9fhrrqx"
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.sanity.dataset, "production");
        assert_eq!(config.sanity.api_version, "2023-06-01");
        assert!(!config.sanity.use_cdn);
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[sanity]
project_id = "localproj"

[general]
default_format = "raw"
"#,
        )?;

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.sanity.project_id, "localproj");
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[sanity]
use_cdn = "sometimes"
"#,
        )?;

        let err = FolioConfig::load().unwrap_err();
        assert!(matches!(err, folio_config::ConfigError::Figment(_)));
        Ok(())
    });
}
