use shardgate_schema::LookupError;
use thiserror::Error;

/// Result type for routing
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Resolution failures. Returned as-is, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// The splitter left the keyspace open and no default keyspace is configured
    #[error("No default keyspace configured")]
    NoDefaultKeyspace,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
