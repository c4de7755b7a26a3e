//! Store error types shared by the ORM layer, the API handlers and the
//! admin CLI.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failure kinds of store and soft-delete operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record at the given id in the table the operation expected.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate email among active records, or an id already in use.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Underlying SQLite failure.
    #[error("database error: {0}")]
    Transient(#[from] DieselError),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Classifies an error from a write statement: unique constraint
    /// violations become `Conflict`, everything else is `Transient`.
    pub fn from_write(err: DieselError, what: impl Into<String>) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                StoreError::Conflict(what.into())
            }
            other => StoreError::Transient(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}
