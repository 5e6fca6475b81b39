//! Custom error types for iexpense
//!
//! Load and persistence failures never reach callers of the store; these
//! variants surface from configuration, export, and rejected removals.

use thiserror::Error;

/// The main error type for iexpense operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persistence slot errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A removal referenced a position outside the current sequence
    #[error("Position {position} is out of range (length {len})")]
    InvalidPosition { position: usize, len: usize },

    /// User input that could not be turned into a record
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Check if this is a rejected removal
    pub fn is_invalid_position(&self) -> bool {
        matches!(self, Self::InvalidPosition { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for iexpense operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_position_error() {
        let err = ExpenseError::InvalidPosition {
            position: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "Position 7 is out of range (length 3)");
        assert!(err.is_invalid_position());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: ExpenseError = json_err.into();
        assert!(matches!(err, ExpenseError::Json(_)));
    }
}
