// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    #[error("A movie titled '{title}' ({year}) already exists")]
    Duplicate { title: String, year: i32 },

    #[error("Movie {0} not found")]
    NotFound(i64),

    /// Raw uniqueness signal from the store, translated by the service
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Another submission is already in progress")]
    SubmissionInProgress,

    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, AppError::Duplicate { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// UNIQUE/PRIMARY KEY failures become `ConstraintViolation` so callers can
/// tell them apart from every other storage failure.
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref code, ref message)
                if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                AppError::ConstraintViolation(
                    message.clone().unwrap_or_else(|| code.to_string()),
                )
            }
            other => AppError::Database(other),
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_unique_violation_is_classified() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (a TEXT NOT NULL, UNIQUE(a)); INSERT INTO t VALUES ('x');")
            .unwrap();

        let err: AppError = conn
            .execute("INSERT INTO t VALUES ('x')", [])
            .unwrap_err()
            .into();

        assert!(matches!(err, AppError::ConstraintViolation(_)), "{:?}", err);
    }

    #[test]
    fn test_other_sqlite_errors_stay_database_errors() {
        let conn = Connection::open_in_memory().unwrap();
        let err: AppError = conn
            .execute("INSERT INTO missing_table VALUES (1)", [])
            .unwrap_err()
            .into();

        assert!(matches!(err, AppError::Database(_)), "{:?}", err);
    }

    #[test]
    fn test_validation_wraps_domain_error() {
        let err: AppError = DomainError::InvalidField {
            field: "title",
            message: "title is required".to_string(),
        }
        .into();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Invalid title: title is required");
    }
}
