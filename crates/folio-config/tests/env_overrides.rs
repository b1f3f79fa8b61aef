use figment::Jail;
use folio_config::FolioConfig;

#[test]
fn env_vars_fill_sanity_section() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_SANITY__PROJECT_ID", "envproj");
        jail.set_env("FOLIO_SANITY__DATASET", "preview");
        jail.set_env("FOLIO_SANITY__USE_CDN", "true");
        jail.set_env("FOLIO_SANITY__TOKEN", "sk-env");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.sanity.project_id, "envproj");
        assert_eq!(config.sanity.dataset, "preview");
        assert!(config.sanity.use_cdn);
        assert_eq!(config.sanity.token(), Some("sk-env"));
        assert_eq!(config.sanity.api_host(), "envproj.apicdn.sanity.io");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[sanity]
project_id = "fromfile"
dataset = "production"
"#,
        )?;
        jail.set_env("FOLIO_SANITY__PROJECT_ID", "fromenv");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.sanity.project_id, "fromenv");
        assert_eq!(config.sanity.dataset, "production");
        Ok(())
    });
}
