//! The keyspace registry.

use std::collections::HashMap;
use std::sync::Arc;

use shardgate_commons::{KeyspaceName, TableName};
use shardgate_sharding::Vindex;

use crate::error::LookupError;
use crate::models::{Keyspace, KeyspaceSchema, Table};

/// Result of a lookup that accepts either a table or a vindex name.
#[derive(Debug, Clone)]
pub enum TableOrVindex {
    Table(Arc<Table>),
    Vindex(Arc<Vindex>),
}

impl TableOrVindex {
    pub fn name(&self) -> &str {
        match self {
            TableOrVindex::Table(table) => table.name().as_str(),
            TableOrVindex::Vindex(vindex) => vindex.name(),
        }
    }

    pub fn as_table(&self) -> Option<&Arc<Table>> {
        match self {
            TableOrVindex::Table(table) => Some(table),
            TableOrVindex::Vindex(_) => None,
        }
    }

    pub fn as_vindex(&self) -> Option<&Arc<Vindex>> {
        match self {
            TableOrVindex::Vindex(vindex) => Some(vindex),
            TableOrVindex::Table(_) => None,
        }
    }
}

/// Keyspace name → keyspace schema.
///
/// Filled by the loader in a single pass, read-only afterwards. Share it
/// behind an `Arc` for concurrent resolution.
#[derive(Debug, Clone, Default)]
pub struct VSchema {
    keyspaces: HashMap<String, KeyspaceSchema>,
}

impl VSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyspace(&self, name: &str) -> Option<&KeyspaceSchema> {
        self.keyspaces.get(name)
    }

    pub fn contains_keyspace(&self, name: &str) -> bool {
        self.keyspaces.contains_key(name)
    }

    pub fn keyspaces(&self) -> impl Iterator<Item = &KeyspaceSchema> {
        self.keyspaces.values()
    }

    /// Keyspace names, sorted.
    pub fn keyspace_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keyspaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.keyspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyspaces.is_empty()
    }

    fn require_keyspace(&self, keyspace: &str) -> Result<&KeyspaceSchema, LookupError> {
        self.keyspaces
            .get(keyspace)
            .ok_or_else(|| LookupError::KeyspaceNotFound(KeyspaceName::new(keyspace)))
    }

    /// Finds a table of `keyspace`.
    ///
    /// Unsharded keyspaces accept any table name: an undeclared table resolves
    /// to an empty stand-in, since every table lives on the single shard.
    pub fn find_table(&self, keyspace: &str, table: &str) -> Result<Arc<Table>, LookupError> {
        let schema = self.require_keyspace(keyspace)?;
        if let Some(found) = schema.table(table) {
            return Ok(Arc::clone(found));
        }
        if !schema.keyspace().is_sharded() {
            return Ok(Arc::new(Table::undeclared(table, Arc::clone(schema.keyspace()))));
        }
        Err(LookupError::TableNotFound {
            keyspace: KeyspaceName::new(keyspace),
            table: TableName::new(table),
        })
    }

    pub fn find_vindex(&self, keyspace: &str, name: &str) -> Result<Arc<Vindex>, LookupError> {
        self.require_keyspace(keyspace)?
            .vindex(name)
            .cloned()
            .ok_or_else(|| LookupError::VindexNotFound {
                keyspace: KeyspaceName::new(keyspace),
                vindex: name.to_string(),
            })
    }

    /// Declared tables win over vindexes of the same name; the unsharded
    /// stand-in is only used when neither exists.
    pub fn find_table_or_vindex(
        &self,
        keyspace: &str,
        name: &str,
    ) -> Result<TableOrVindex, LookupError> {
        let schema = self.require_keyspace(keyspace)?;
        if let Some(table) = schema.table(name) {
            return Ok(TableOrVindex::Table(Arc::clone(table)));
        }
        if let Some(vindex) = schema.vindex(name) {
            return Ok(TableOrVindex::Vindex(Arc::clone(vindex)));
        }
        if !schema.keyspace().is_sharded() {
            return Ok(TableOrVindex::Table(Arc::new(Table::undeclared(
                name,
                Arc::clone(schema.keyspace()),
            ))));
        }
        Err(LookupError::TableOrVindexNotFound {
            keyspace: KeyspaceName::new(keyspace),
            name: name.to_string(),
        })
    }

    /// Returns the keyspace schema, creating it when unseen. An existing
    /// keyspace keeps its original `sharded` flag.
    pub(crate) fn get_or_create(&mut self, name: &KeyspaceName, sharded: bool) -> &mut KeyspaceSchema {
        self.keyspaces
            .entry(name.as_str().to_string())
            .or_insert_with(|| {
                log::debug!("Creating keyspace '{}' (sharded: {})", name, sharded);
                KeyspaceSchema::new(Keyspace::new(name.clone(), sharded))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;
    use shardgate_sql::ColumnType;

    fn registry() -> VSchema {
        let mut vschema = VSchema::new();
        let sharded = vschema.get_or_create(&KeyspaceName::new("ks"), true);
        let keyspace = Arc::clone(sharded.keyspace());
        sharded.insert_table(Arc::new(Table::new(
            "accounts",
            keyspace,
            vec![Column::new("id", ColumnType::Int64)],
            Vec::new(),
        )));
        sharded.insert_vindex(Arc::new(Vindex::hash("accounts_primary_key")));
        vschema.get_or_create(&KeyspaceName::new("main"), false);
        vschema
    }

    #[test]
    fn test_find_table() {
        let vschema = registry();
        let table = vschema.find_table("ks", "accounts").unwrap();
        assert_eq!(table.name().as_str(), "accounts");
        assert_eq!(table.keyspace().name().as_str(), "ks");

        assert_eq!(
            vschema.find_table("ks", "missing").unwrap_err(),
            LookupError::TableNotFound {
                keyspace: KeyspaceName::new("ks"),
                table: TableName::new("missing"),
            }
        );
        assert_eq!(
            vschema.find_table("nope", "accounts").unwrap_err(),
            LookupError::KeyspaceNotFound(KeyspaceName::new("nope"))
        );
    }

    #[test]
    fn test_unsharded_keyspace_accepts_any_table() {
        let vschema = registry();
        let table = vschema.find_table("main", "anything").unwrap();
        assert_eq!(table.name().as_str(), "anything");
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_find_table_or_vindex() {
        let vschema = registry();
        assert!(vschema
            .find_table_or_vindex("ks", "accounts")
            .unwrap()
            .as_table()
            .is_some());
        let vindex = vschema.find_table_or_vindex("ks", "accounts_primary_key").unwrap();
        assert_eq!(vindex.name(), "accounts_primary_key");
        assert!(vindex.as_vindex().is_some());
        assert!(matches!(
            vschema.find_table_or_vindex("ks", "missing"),
            Err(LookupError::TableOrVindexNotFound { .. })
        ));
    }

    #[test]
    fn test_get_or_create_keeps_existing() {
        let mut vschema = registry();
        let existing = vschema.get_or_create(&KeyspaceName::new("ks"), false);
        assert!(existing.keyspace().is_sharded());
        assert_eq!(existing.table_names(), vec!["accounts"]);
        assert_eq!(vschema.keyspace_names(), vec!["ks", "main"]);
    }
}
