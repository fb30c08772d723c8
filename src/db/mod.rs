mod error;
mod schema;

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::config::DatabaseLocation;
use crate::models::*;

pub use error::{StoreError, StoreResult};

const EMPLOYEE_COLUMNS: &str = "id, name, email, position, created_at";

/// Handle to the single SQLite connection backing the service.
///
/// Cloning is cheap and every clone shares the same connection. Each
/// operation runs one statement (plus a read-back by id for writes) while
/// holding the connection lock.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_location(location: &DatabaseLocation) -> Result<Self> {
        match location {
            DatabaseLocation::Memory => Self::open_memory(),
            DatabaseLocation::File(path) => Self::open(path),
        }
    }

    pub fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::create_schema(&conn)
    }

    /// Close the underlying connection.
    ///
    /// Fails if another clone of this handle is still alive.
    pub fn close(self) -> Result<()> {
        let conn = Arc::try_unwrap(self.conn)
            .map_err(|_| anyhow::anyhow!("Database is still in use"))?
            .into_inner()
            .map_err(|_| anyhow::anyhow!("database lock poisoned"))?;
        conn.close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")
    }

    // ============================================================
    // Employee operations
    // ============================================================

    /// All employees, newest first, optionally filtered by a case-sensitive
    /// substring of name, email or position.
    pub fn list_employees(&self, search: Option<&str>) -> StoreResult<Vec<Employee>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        // instr() is case-sensitive and treats % and _ literally, unlike LIKE.
        let mut stmt = conn.prepare(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees
             WHERE ?1 IS NULL
                OR instr(name, ?1) > 0
                OR instr(email, ?1) > 0
                OR instr(position, ?1) > 0
             ORDER BY created_at DESC, id DESC"
        ))?;

        let employees = stmt
            .query_map(params![search], employee_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    pub fn get_employee(&self, id: i64) -> StoreResult<Option<Employee>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        Ok(fetch_employee(&conn, id).optional()?)
    }

    /// Insert a new employee and return it as stored.
    ///
    /// Returns [`StoreError::DuplicateEmail`] if the email is already taken.
    pub fn create_employee(&self, input: &EmployeeInput) -> StoreResult<Employee> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let id: i64 = conn.query_row(
            "INSERT INTO employees (name, email, position, created_at)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id",
            (&input.name, &input.email, &input.position, &now),
            |row| row.get(0),
        )?;
        tracing::debug!(id, "Inserted employee");

        Ok(fetch_employee(&conn, id)?)
    }

    /// Replace name, email and position of an existing employee.
    ///
    /// Returns `Ok(None)` when no employee has this id.
    pub fn update_employee(&self, id: i64, input: &EmployeeInput) -> StoreResult<Option<Employee>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "UPDATE employees SET name = ?1, email = ?2, position = ?3 WHERE id = ?4",
            (&input.name, &input.email, &input.position, id),
        )?;
        if rows == 0 {
            return Ok(None);
        }
        tracing::debug!(id, "Updated employee");

        Ok(Some(fetch_employee(&conn, id)?))
    }

    pub fn delete_employee(&self, id: i64) -> StoreResult<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn fetch_employee(conn: &Connection, id: i64) -> rusqlite::Result<Employee> {
    conn.query_row(
        &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1"),
        [id],
        employee_from_row,
    )
}

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        position: row.get(3)?,
        created_at: parse_datetime(4, row.get::<_, String>(4)?)?,
    })
}

fn parse_datetime(idx: usize, s: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
