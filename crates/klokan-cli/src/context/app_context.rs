use std::path::Path;

use anyhow::Context;
use chrono::Datelike;
use klokan_config::KlokanConfig;
use klokan_db::KlokanDb;

/// Everything a command handler needs: the open store and the configuration.
pub struct AppContext {
    pub db: KlokanDb,
    pub config: KlokanConfig,
    /// Latest selectable competition year.
    pub current_year: i32,
}

impl AppContext {
    pub async fn init(config: KlokanConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(&config.database.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create store directory {}", parent.display())
                    })?;
                }
            }
        }

        let db = KlokanDb::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open store at {}", config.database.path))?;

        Ok(Self {
            db,
            config,
            current_year: chrono::Local::now().year(),
        })
    }
}
