//! Repository modules implementing store operations for Klokan entities.
//!
//! Each module adds methods to `KlokanDb` via `impl KlokanDb` blocks. Inserts
//! are free functions over a `libsql::Connection` so the importer can run
//! them inside its own transaction.

pub mod answer;
pub mod answer_sheet;
pub mod instance;
