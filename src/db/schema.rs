use anyhow::{Context, Result};
use rusqlite::Connection;

const SCHEMA: &str = include_str!("schema.sql");

/// Create the employees table and its index if they do not exist yet.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Failed to create employees schema")?;
    tracing::debug!("Employees schema ready");
    Ok(())
}
