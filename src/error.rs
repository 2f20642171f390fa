//! Error types for otpdb

use rusqlite::ErrorCode;
use thiserror::Error;

/// Main error type for database tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// Database file not found at the specified path
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Row violates a UNIQUE constraint (company name or username)
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input rejected before reaching the database
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Localization error
    #[error("Localization error: {0}")]
    LocalizationError(String),
}

impl ToolError {
    /// True if this error came from a UNIQUE constraint
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ToolError::Duplicate(_))
    }
}

impl From<rusqlite::Error> for ToolError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == ErrorCode::ConstraintViolation
                    && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                ToolError::Duplicate(msg.clone().unwrap_or_else(|| err.to_string()))
            }
            _ => ToolError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type alias for database tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_error_display() {
        let err = ToolError::DatabaseNotFound("/path/to/db".to_string());
        assert!(err.to_string().contains("/path/to/db"));

        let err = ToolError::Duplicate("companies.name".to_string());
        assert_eq!(err.to_string(), "Duplicate entry: companies.name");

        let err = ToolError::InvalidInput("empty name".to_string());
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let tool_err: ToolError = sqlite_err.into();
        match tool_err {
            ToolError::DatabaseError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected DatabaseError"),
        }
    }

    #[test]
    fn test_unique_violation_maps_to_duplicate() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();

        let err: ToolError = conn.execute("INSERT INTO t VALUES ('a')", []).unwrap_err().into();
        assert!(err.is_duplicate());
        assert!(err.to_string().contains("t.name"));
    }

    #[test]
    fn test_not_null_violation_is_not_duplicate() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL UNIQUE);").unwrap();

        let err: ToolError = conn.execute("INSERT INTO t VALUES (NULL)", []).unwrap_err().into();
        assert!(!err.is_duplicate());
        assert!(matches!(err, ToolError::DatabaseError(_)));
    }
}
