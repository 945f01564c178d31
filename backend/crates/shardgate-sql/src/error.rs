use sqlparser::parser::ParserError;
use thiserror::Error;

/// Result type for statement reading.
pub type Result<T> = std::result::Result<T, SqlError>;

/// Errors raised while reading DDL statements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SqlError {
    #[error("SQL parse error: {0}")]
    Parse(#[from] ParserError),

    #[error("Unknown SQL dialect '{0}'")]
    UnknownDialect(String),

    #[error("Invalid object name '{name}': {reason}")]
    InvalidObjectName { name: String, reason: String },

    #[error("Expected {expected}, found: {found}")]
    UnexpectedStatement { expected: &'static str, found: String },

    #[error("Statement {statement}: expected end of statement, found '{found}'")]
    MissingDelimiter { statement: usize, found: String },
}
