//! Shared error type for shardgate identifiers.

use thiserror::Error;

/// Errors raised while building shared identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// Invalid input provided to a constructor or parser
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CommonError {
    /// Creates an InvalidInput error with a message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using CommonError.
pub type Result<T> = std::result::Result<T, CommonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommonError::invalid_input("empty table name");
        assert_eq!(err.to_string(), "Invalid input: empty table name");
    }
}
