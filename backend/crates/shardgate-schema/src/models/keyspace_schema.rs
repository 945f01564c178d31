use std::collections::HashMap;
use std::sync::Arc;

use shardgate_sharding::Vindex;

use super::{Keyspace, Table};

/// A keyspace together with its tables and vindexes.
///
/// Vindexes live here and nowhere else; tables hold `Arc` handles to them.
#[derive(Debug, Clone)]
pub struct KeyspaceSchema {
    keyspace: Arc<Keyspace>,
    tables: HashMap<String, Arc<Table>>,
    vindexes: HashMap<String, Arc<Vindex>>,
}

impl KeyspaceSchema {
    pub fn new(keyspace: Keyspace) -> Self {
        Self {
            keyspace: Arc::new(keyspace),
            tables: HashMap::new(),
            vindexes: HashMap::new(),
        }
    }

    pub fn keyspace(&self) -> &Arc<Keyspace> {
        &self.keyspace
    }

    pub fn table(&self, name: &str) -> Option<&Arc<Table>> {
        self.tables.get(name)
    }

    pub fn vindex(&self, name: &str) -> Option<&Arc<Vindex>> {
        self.vindexes.get(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Arc<Table>> {
        self.tables.values()
    }

    pub fn vindexes(&self) -> impl Iterator<Item = &Arc<Vindex>> {
        self.vindexes.values()
    }

    /// Table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Vindex names, sorted.
    pub fn vindex_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vindexes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn vindex_map(&self) -> &HashMap<String, Arc<Vindex>> {
        &self.vindexes
    }

    /// Inserts or replaces a table, returning the replaced definition.
    pub(crate) fn insert_table(&mut self, table: Arc<Table>) -> Option<Arc<Table>> {
        self.tables.insert(table.name().as_str().to_string(), table)
    }

    pub(crate) fn insert_vindex(&mut self, vindex: Arc<Vindex>) -> Option<Arc<Vindex>> {
        self.vindexes.insert(vindex.name().to_string(), vindex)
    }
}
