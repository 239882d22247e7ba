//! # klokan-config
//!
//! Layered configuration loading for Klokan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KLOKAN_*` prefix, `__` as separator)
//! 2. Project-level `.klokan/config.toml`
//! 3. User-level `~/.config/klokan/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KLOKAN_DATABASE__PATH` -> `database.path`,
//! `KLOKAN_EXPORT__LINE_ENDING` -> `export.line_ending`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use klokan_config::KlokanConfig;
//!
//! let config = KlokanConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.database.path);
//! ```

mod database;
mod error;
mod export;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use export::{ExportConfig, LineEnding};
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KlokanConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KlokanConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".klokan/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("KLOKAN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("klokan").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = KlokanConfig::default();
        assert_eq!(config.database.path, ".klokan/klokan.db");
        assert_eq!(config.export.line_ending, LineEnding::Crlf);
        assert_eq!(config.general.first_year, 2000);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: KlokanConfig = KlokanConfig::figment().extract()?;
            assert_eq!(config.general.first_year, 2000);
            Ok(())
        });
    }
}
