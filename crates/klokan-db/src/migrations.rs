//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::KlokanDb;
use crate::error::DatabaseError;

/// Initial schema: 4 tables, 2 indexes, store-level uniqueness of `(year, category)`.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// Tables every Klokan store must have.
pub(crate) const REQUIRED_TABLES: [&str; 4] = [
    "instances",
    "correct_answers",
    "answer_sheets",
    "chosen_answers",
];

impl KlokanDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }

    /// Check that a store opened without migrations carries the Klokan schema.
    pub(crate) async fn verify_schema(&self) -> Result<(), DatabaseError> {
        for table in REQUIRED_TABLES {
            let mut rows = self
                .conn
                .query(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                )
                .await?;
            if rows.next().await?.is_none() {
                return Err(DatabaseError::InvalidState(format!(
                    "store is missing table '{table}'"
                )));
            }
        }
        Ok(())
    }
}
