//! # klokan-db
//!
//! libSQL storage for Klokan answer sheets.
//!
//! Holds instances, their correct answers, answer sheets with scans, and the
//! chosen answers of every sheet. On top of the repositories sit the two
//! store-level transformations: [`import::InstanceImporter`] merges instance
//! subtrees from an external store, and [`export::AnswerSheetExporter`]
//! writes the `;`-delimited answer report.
//!
//! A [`KlokanDb`] is one session: open it for one operation and drop it when
//! the operation is done.

pub mod error;
pub mod export;
pub mod helpers;
pub mod import;
mod migrations;
pub mod repos;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::{Builder, OpenFlags};

/// Milliseconds a writer waits for a competing write transaction to finish.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Database handle for one Klokan store session.
pub struct KlokanDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl KlokanDb {
    /// Open (or create) a local database at the given path.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        // PRAGMA busy_timeout echoes the new value as a row
        conn.query(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"), ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA busy_timeout: {e}")))?;

        let klokan_db = Self { db, conn };
        klokan_db.run_migrations().await?;
        tracing::debug!(path, "opened local store");
        Ok(klokan_db)
    }

    /// Open an existing store read-only, as an import source.
    ///
    /// Migrations are not run; the schema is verified instead.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or does not carry
    /// the Klokan schema.
    pub async fn open_read_only(path: &Path) -> Result<Self, DatabaseError> {
        if !path.exists() {
            return Err(DatabaseError::InvalidState(format!(
                "import source {} does not exist",
                path.display()
            )));
        }
        let db = Builder::new_local(path)
            .flags(OpenFlags::SQLITE_OPEN_READ_ONLY)
            .build()
            .await?;
        let conn = db.connect()?;

        let klokan_db = Self { db, conn };
        klokan_db.verify_schema().await?;
        tracing::debug!(path = %path.display(), "opened read-only store");
        Ok(klokan_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
