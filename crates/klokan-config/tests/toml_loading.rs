//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use klokan_config::{KlokanConfig, LineEnding};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/srv/klokan/results.db"

[export]
line_ending = "lf"

[general]
first_year = 2010
"#,
        )?;

        let config: KlokanConfig = Figment::from(Serialized::defaults(KlokanConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/srv/klokan/results.db");
        assert_eq!(config.export.line_ending, LineEnding::Lf);
        assert_eq!(config.general.first_year, 2010);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
line_ending = "crlf"
"#,
        )?;

        let config: KlokanConfig = Figment::from(Serialized::defaults(KlokanConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.export.line_ending, LineEnding::Crlf);
        assert_eq!(config.database.path, ".klokan/klokan.db");
        assert_eq!(config.general.first_year, 2000);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".klokan")?;
        jail.create_file(
            ".klokan/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = KlokanConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn unknown_line_ending_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
line_ending = "cr"
"#,
        )?;

        let result: Result<KlokanConfig, _> =
            Figment::from(Serialized::defaults(KlokanConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
