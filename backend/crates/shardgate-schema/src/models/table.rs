use std::sync::Arc;

use shardgate_commons::TableName;
use shardgate_sharding::Vindex;
use shardgate_sql::ColumnType;

use super::Keyspace;

/// Binding type recorded for vindexes inferred from index definitions.
pub const INDEX_BINDING: &str = "index";

/// Column name and semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Binds a table to one vindex of its keyspace.
#[derive(Debug, Clone)]
pub struct ColumnVindex {
    /// Vindex name, equal to `vindex.name()`
    pub name: String,
    /// How the binding was declared, currently always [`INDEX_BINDING`]
    pub binding_type: &'static str,
    /// Indexed columns, in index declaration order
    pub columns: Vec<String>,
    /// True when this table is the authoritative source of the vindex values
    pub owned: bool,
    pub ordered: bool,
    pub vindex: Arc<Vindex>,
}

/// A table of a keyspace.
///
/// Built in one pass by the table builder and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Table {
    name: TableName,
    keyspace: Arc<Keyspace>,
    columns: Vec<Column>,
    column_vindexes: Vec<ColumnVindex>,
}

impl Table {
    pub fn new(
        name: impl Into<TableName>,
        keyspace: Arc<Keyspace>,
        columns: Vec<Column>,
        column_vindexes: Vec<ColumnVindex>,
    ) -> Self {
        Self {
            name: name.into(),
            keyspace,
            columns,
            column_vindexes,
        }
    }

    /// Stand-in for a table an unsharded keyspace does not declare: no columns, no vindexes.
    pub fn undeclared(name: impl Into<TableName>, keyspace: Arc<Keyspace>) -> Self {
        Self::new(name, keyspace, Vec::new(), Vec::new())
    }

    pub fn name(&self) -> &TableName {
        &self.name
    }

    pub fn keyspace(&self) -> &Arc<Keyspace> {
        &self.keyspace
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// All vindex bindings, in index declaration order.
    pub fn column_vindexes(&self) -> &[ColumnVindex] {
        &self.column_vindexes
    }

    pub fn owned_vindexes(&self) -> impl Iterator<Item = &ColumnVindex> {
        self.column_vindexes.iter().filter(|binding| binding.owned)
    }

    /// Bindings usable for range decisions. Inference never produces ordered
    /// bindings, so this is empty for tables built from DDL.
    pub fn ordered_vindexes(&self) -> impl Iterator<Item = &ColumnVindex> {
        self.column_vindexes.iter().filter(|binding| binding.ordered)
    }
}
