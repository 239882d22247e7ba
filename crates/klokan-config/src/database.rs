//! Local store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from(".klokan/klokan.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path of the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the store lives only in memory (tests, dry runs).
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
