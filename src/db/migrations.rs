use rusqlite::{Connection, Result};
use super::schema::SCHEMA;

/// Ensure the schema exists. Idempotent; never touches existing rows.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    log::debug!("Schema ensured");
    Ok(())
}
