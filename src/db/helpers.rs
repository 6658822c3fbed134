// src/db/helpers.rs

use crate::db::Database;
use crate::error::AppError;
use rusqlite::Connection;

/// Execute a store operation, logging failures with the operation name.
///
/// # Example
/// ```ignore
/// with_connection(&db, "load books", |conn| Book::find_all(conn))
/// ```
pub fn with_connection<F, T>(db: &Database, operation: &str, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    f(db.connection()).map_err(|e| {
        log::error!("Failed to {operation}: {e}");
        AppError::Database(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_connection_passes_value_through() {
        let db = Database::open_in_memory().unwrap();
        let value: i32 = with_connection(&db, "select", |conn| {
            conn.query_row("SELECT 41 + 1", [], |row| row.get(0))
        })
        .unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_with_connection_maps_store_errors() {
        let db = Database::open_in_memory().unwrap();
        let result: Result<i32, AppError> = with_connection(&db, "load books", |conn| {
            conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        });
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
