//! Row-to-entity parsing helpers.
//!
//! libSQL hands back integers as `i64` and text as `String`. These helpers
//! narrow them into the typed fields of `klokan-core` entities and report a
//! `DatabaseError::Query` when a stored value does not fit.

use klokan_core::enums::Category;

use crate::error::DatabaseError;

/// Parse a TEXT column into a `Category`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for an unknown category name.
pub fn parse_category(s: &str) -> Result<Category, DatabaseError> {
    s.parse::<Category>()
        .map_err(|e| DatabaseError::Query(format!("Failed to parse category from '{s}': {e}")))
}

/// Read an INTEGER column that must fit in `i32` (years, points).
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails or the value overflows.
pub fn get_i32(row: &libsql::Row, idx: i32) -> Result<i32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    i32::try_from(raw)
        .map_err(|_| DatabaseError::Query(format!("Column {idx} value {raw} does not fit in i32")))
}

/// Read a `position` column as a 0-based question index.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails or the value is negative
/// or too large.
pub fn get_position(row: &libsql::Row, idx: i32) -> Result<u8, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u8::try_from(raw)
        .map_err(|_| DatabaseError::Query(format!("Invalid answer position {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category_accepts_stored_names() {
        assert_eq!(parse_category("Benjamin").unwrap(), Category::Benjamin);
    }

    #[test]
    fn parse_category_reports_query_error() {
        assert!(matches!(
            parse_category("Senior"),
            Err(DatabaseError::Query(_))
        ));
    }
}
