//! Error handling for SubDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the SubDesk application
#[derive(Error, Debug)]
pub enum SubDeskError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unique constraint violated on {field}")]
    UniqueViolation { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SubDesk operations
pub type Result<T> = std::result::Result<T, SubDeskError>;

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Map an insert/update failure to `UniqueViolation` when the store rejected
/// a duplicate key, leaving every other failure untouched.
pub fn map_unique_violation(err: sqlx::Error, field: &'static str) -> SubDeskError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION_CODE) {
            return SubDeskError::UniqueViolation { field };
        }
    }
    SubDeskError::Database(err)
}

impl SubDeskError {
    /// Whether the failure is a user-recoverable conflict rather than an
    /// infrastructure problem.
    pub fn is_conflict(&self) -> bool {
        matches!(self, SubDeskError::UniqueViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_is_conflict() {
        let err = SubDeskError::UniqueViolation { field: "phone" };
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Unique constraint violated on phone");
    }

    #[test]
    fn test_non_database_error_passes_through() {
        let err = map_unique_violation(sqlx::Error::RowNotFound, "phone");
        assert!(!err.is_conflict());
    }
}
