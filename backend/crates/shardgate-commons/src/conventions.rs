//! Naming conventions that turn plain DDL into sharding metadata.
//!
//! DDL has no syntax for vindexes, so shardgate reads them out of conventions:
//!
//! - an index whose `USING` clause starts with [`vindex_prefix`](NamingConventions::vindex_prefix)
//!   (`v_hash`, `v_md5`, `v_binary`) declares a vindex;
//! - a table whose options contain [`lookup_table_option`](NamingConventions::lookup_table_option)
//!   (`type=vindex`) declares a lookup vindex instead of a table. Its columns prefixed with
//!   [`lookup_from_prefix`](NamingConventions::lookup_from_prefix) are the source columns and
//!   the first column prefixed with [`lookup_to_prefix`](NamingConventions::lookup_to_prefix)
//!   is the target column;
//! - a primary key vindex is named `<table>` + [`primary_key_suffix`](NamingConventions::primary_key_suffix).
//!
//! ```toml
//! [schema.conventions]
//! vindex_prefix = "v_"
//! lookup_table_option = "type=vindex"
//! ```

use serde::{Deserialize, Serialize};

/// Convention markers consumed by the schema builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConventions {
    /// Prefix of an index `USING` marker that declares a vindex (default: "v_")
    #[serde(default = "default_vindex_prefix")]
    pub vindex_prefix: String,

    /// Table option that turns a table into a lookup vindex (default: "type=vindex")
    #[serde(default = "default_lookup_table_option")]
    pub lookup_table_option: String,

    /// Column prefix of lookup source columns (default: "f")
    #[serde(default = "default_lookup_from_prefix")]
    pub lookup_from_prefix: String,

    /// Column prefix of the lookup target column (default: "t")
    #[serde(default = "default_lookup_to_prefix")]
    pub lookup_to_prefix: String,

    /// Suffix appended to the table name to name its primary key vindex (default: "_primary_key")
    #[serde(default = "default_primary_key_suffix")]
    pub primary_key_suffix: String,

    /// Autocommit flag passed to lookup vindexes built from tables (default: true)
    #[serde(default = "default_lookup_autocommit")]
    pub lookup_autocommit: bool,
}

fn default_vindex_prefix() -> String {
    "v_".to_string()
}

fn default_lookup_table_option() -> String {
    "type=vindex".to_string()
}

fn default_lookup_from_prefix() -> String {
    "f".to_string()
}

fn default_lookup_to_prefix() -> String {
    "t".to_string()
}

fn default_primary_key_suffix() -> String {
    "_primary_key".to_string()
}

fn default_lookup_autocommit() -> bool {
    true
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            vindex_prefix: default_vindex_prefix(),
            lookup_table_option: default_lookup_table_option(),
            lookup_from_prefix: default_lookup_from_prefix(),
            lookup_to_prefix: default_lookup_to_prefix(),
            primary_key_suffix: default_primary_key_suffix(),
            lookup_autocommit: default_lookup_autocommit(),
        }
    }
}

impl NamingConventions {
    /// Returns the part of a `USING` marker after the vindex prefix, or `None`
    /// when the marker does not declare a vindex.
    pub fn vindex_marker<'a>(&self, using: &'a str) -> Option<&'a str> {
        using.strip_prefix(self.vindex_prefix.as_str())
    }

    /// Name of the vindex derived from a table's primary key.
    pub fn primary_key_vindex_name(&self, table: &str) -> String {
        format!("{}{}", table, self.primary_key_suffix)
    }

    /// True when the normalized table options declare a lookup vindex table.
    pub fn is_lookup_table(&self, normalized_options: &str) -> bool {
        normalized_options.contains(self.lookup_table_option.as_str())
    }

    pub fn is_lookup_from_column(&self, column: &str) -> bool {
        column.starts_with(self.lookup_from_prefix.as_str())
    }

    pub fn is_lookup_to_column(&self, column: &str) -> bool {
        column.starts_with(self.lookup_to_prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let conventions = NamingConventions::default();
        assert_eq!(conventions.vindex_marker("v_hash"), Some("hash"));
        assert_eq!(conventions.vindex_marker("BTREE"), None);
        assert_eq!(conventions.primary_key_vindex_name("orders"), "orders_primary_key");
        assert!(conventions.is_lookup_table("engine=innodb type=vindex"));
        assert!(conventions.is_lookup_from_column("fa"));
        assert!(conventions.is_lookup_to_column("tx"));
        assert!(!conventions.is_lookup_to_column("id"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let conventions: NamingConventions = toml::from_str(r#"vindex_prefix = "sh_""#).unwrap();
        assert_eq!(conventions.vindex_prefix, "sh_");
        assert_eq!(conventions.lookup_from_prefix, "f");
        assert!(conventions.lookup_autocommit);
    }
}
