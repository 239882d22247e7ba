//! Cross-cutting error types for Klokan.
//!
//! Store-specific errors (`DatabaseError`, `ExportError`) are defined in
//! `klokan-db`. Everything converges into `anyhow` in `klokan-cli`.

use thiserror::Error;

/// Errors that can be raised by any Klokan crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown category, year out of range, etc.).
    #[error("Validation error: {0}")]
    Validation(String),
}
