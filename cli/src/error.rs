//! Error types for the shardgate CLI

use shardgate_routing::RoutingError;
use shardgate_schema::SchemaLoadError;
use shardgate_sharding::VindexError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Load(#[from] SchemaLoadError),

    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("Splitter error: {0}")]
    Splitter(#[from] VindexError),

    #[error("Invalid table reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("Output error: {0}")]
    Output(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}
