//! Configuration file
//!
//! # Configuration Format
//!
//! ```toml
//! [schema]
//! dialect = "generic"          # sqlparser dialect: generic, mysql, postgresql, ...
//! default_keyspace = "main"    # keyspace for unqualified tables ("" = none)
//! sharded = true               # sharded flag of keyspaces created by the load
//!
//! [schema.conventions]
//! vindex_prefix = "v_"
//! primary_key_suffix = "_primary_key"
//!
//! [routing]
//! splitter = "default"         # default, keyspace_id, keyspace_id_md5
//!
//! [logging]
//! level = "warn"
//! format = "compact"           # compact, json
//!
//! [logging.targets]
//! shardgate_schema = "debug"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shardgate_commons::NamingConventions;
use shardgate_schema::LoaderOptions;
use shardgate_sharding::{DefaultSplitter, KeyspaceIdSplitter, Splitter, Vindex};

use crate::error::{CliError, Result};

/// CLI configuration loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardgateConfig {
    #[serde(default)]
    pub schema: SchemaSettings,
    #[serde(default)]
    pub routing: RoutingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSettings {
    /// SQL dialect of DDL scripts (default: "generic")
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Keyspace of unqualified table names (default: none)
    #[serde(default)]
    pub default_keyspace: String,

    /// Sharded flag of created keyspaces (default: true)
    #[serde(default = "default_true")]
    pub sharded: bool,

    #[serde(default)]
    pub conventions: NamingConventions,
}

/// Splitting strategy applied to table references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitterKind {
    /// Whole-keyspace routes on the primary
    #[default]
    Default,
    /// Narrow to the shard owning the table name as keyspace id
    KeyspaceId,
    /// Like keyspace-id, with the MD5 digest of the name as keyspace id
    KeyspaceIdMd5,
}

impl SplitterKind {
    pub fn build(self) -> Result<Arc<dyn Splitter>> {
        Ok(match self {
            SplitterKind::Default => Arc::new(DefaultSplitter),
            SplitterKind::KeyspaceId => Arc::new(KeyspaceIdSplitter::new()),
            SplitterKind::KeyspaceIdMd5 => Arc::new(KeyspaceIdSplitter::with_vindex(
                Vindex::binary_md5("keyspace_id"),
            )?),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    #[serde(default)]
    pub splitter: SplitterKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Base level: error, warn, info, debug, trace (default: "warn")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// compact or json (default: "compact")
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Per-target level overrides
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

fn default_dialect() -> String {
    "generic".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            default_keyspace: String::new(),
            sharded: default_true(),
            conventions: NamingConventions::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            targets: HashMap::new(),
        }
    }
}

impl SchemaSettings {
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions::new(self.default_keyspace.as_str())
            .with_sharded(self.sharded)
            .with_conventions(self.conventions.clone())
    }
}

impl ShardgateConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
