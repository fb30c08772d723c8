use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures from employee storage operations.
///
/// Absence of a record is not an error here: lookups return `Option` and
/// deletes return `bool`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("{0}")]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    /// Classify by SQLite extended result code. The only UNIQUE constraint on
    /// the table is the email column.
    fn from(err: rusqlite::Error) -> Self {
        let unique_violation = matches!(
            err.sqlite_error(),
            Some(e) if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        );
        if unique_violation {
            Self::DuplicateEmail
        } else {
            Self::Sqlite(err)
        }
    }
}
