//! Delimited export configuration.

use serde::{Deserialize, Serialize};

/// Row terminator written after every exported row.
///
/// Existing export files were produced with `\r\n`, which stays the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub line_ending: LineEnding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_ending_is_crlf() {
        assert_eq!(ExportConfig::default().line_ending, LineEnding::Crlf);
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
        assert_eq!(LineEnding::Lf.as_str(), "\n");
    }
}
