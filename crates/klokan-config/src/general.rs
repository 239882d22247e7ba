//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Earliest competition year offered by default.
const fn default_first_year() -> i32 {
    2000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Earliest year that can be selected for browsing and export.
    #[serde(default = "default_first_year")]
    pub first_year: i32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            first_year: default_first_year(),
        }
    }
}

impl GeneralConfig {
    /// Check that `year` lies within the selectable range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the year is outside
    /// `first_year..=current_year`.
    pub fn check_year(&self, year: i32, current_year: i32) -> Result<(), ConfigError> {
        if (self.first_year..=current_year).contains(&year) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "year".into(),
                reason: format!("{year} is outside {}..={current_year}", self.first_year),
            })
        }
    }
}
