use shardgate_commons::{KeyspaceName, TableName};
use shardgate_sharding::VindexError;
use shardgate_sql::SqlError;
use thiserror::Error;

use crate::VSchema;

/// Errors raised while building the registry from DDL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A recognized vindex marker with invalid construction parameters
    #[error("Vindex construction failed: {0}")]
    Vindex(#[from] VindexError),

    #[error("Statement reader failed: {0}")]
    Parse(#[from] SqlError),
}

/// Result type for schema construction
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A failed load, carrying everything built before the failing statement.
#[derive(Error, Debug)]
#[error("Schema load stopped after {statements} statement(s): {source}")]
pub struct SchemaLoadError {
    /// Registry as built up to (not including) the failing statement
    pub schema: Box<VSchema>,
    /// Statements fully applied before the failure
    pub statements: usize,
    #[source]
    pub source: SchemaError,
}

impl SchemaLoadError {
    /// Keeps the partial registry, dropping the error.
    pub fn into_partial(self) -> VSchema {
        *self.schema
    }
}

/// Registry lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Keyspace '{0}' not found")]
    KeyspaceNotFound(KeyspaceName),

    #[error("Table '{table}' not found in keyspace '{keyspace}'")]
    TableNotFound {
        keyspace: KeyspaceName,
        table: TableName,
    },

    #[error("Vindex '{vindex}' not found in keyspace '{keyspace}'")]
    VindexNotFound { keyspace: KeyspaceName, vindex: String },

    #[error("Neither table nor vindex '{name}' found in keyspace '{keyspace}'")]
    TableOrVindexNotFound { keyspace: KeyspaceName, name: String },
}
