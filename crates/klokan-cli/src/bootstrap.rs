use klokan_config::KlokanConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KlokanConfig> {
    let mut config = KlokanConfig::load_with_dotenv()?;
    if let Some(path) = &flags.database {
        tracing::debug!(path, "store path overridden on the command line");
        config.database.path.clone_from(path);
    }
    Ok(config)
}
