//! Database error types for klokan-db.

use thiserror::Error;

use klokan_core::enums::EntityType;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data of the wrong shape.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A point lookup by identifier found nothing.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: EntityType, id: i64 },

    /// Invalid state encountered (e.g., a store without the Klokan schema).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
