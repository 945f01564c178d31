//! Turns one CREATE TABLE statement into a table or a lookup vindex.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use shardgate_commons::NamingConventions;
use shardgate_sharding::Vindex;
use shardgate_sql::CreateTableStatement;

use super::vindex_inference::{VindexInference, VindexStage};
use crate::error::Result;
use crate::models::{Column, ColumnVindex, KeyspaceSchema, Table, INDEX_BINDING};
use crate::vschema::TableOrVindex;

/// Builds tables of one keyspace.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'a> {
    conventions: &'a NamingConventions,
}

impl<'a> TableBuilder<'a> {
    pub fn new(conventions: &'a NamingConventions) -> Self {
        Self { conventions }
    }

    /// Applies `statement` to `keyspace`.
    ///
    /// A statement whose options declare a lookup table registers a lookup
    /// vindex named after the table and creates no table. Any other statement
    /// creates a table, replacing an earlier one of the same name.
    ///
    /// On error nothing is registered: vindexes inferred for the failing
    /// statement are dropped along with the table.
    pub fn build(
        &self,
        keyspace: &mut KeyspaceSchema,
        statement: &CreateTableStatement,
    ) -> Result<TableOrVindex> {
        if self.conventions.is_lookup_table(&statement.options) {
            return self
                .build_lookup_vindex(keyspace, statement)
                .map(TableOrVindex::Vindex);
        }
        self.build_table(keyspace, statement).map(TableOrVindex::Table)
    }

    fn build_lookup_vindex(
        &self,
        keyspace: &mut KeyspaceSchema,
        statement: &CreateTableStatement,
    ) -> Result<Arc<Vindex>> {
        let name = statement.table.name().as_str();
        let from: Vec<&str> = statement
            .column_names()
            .filter(|column| self.conventions.is_lookup_from_column(column))
            .collect();
        let to = statement
            .column_names()
            .find(|column| self.conventions.is_lookup_to_column(column))
            .unwrap_or_default();

        let params = BTreeMap::from([
            ("table".to_string(), name.to_string()),
            ("from".to_string(), from.join(",")),
            ("to".to_string(), to.to_string()),
            (
                "autocommit".to_string(),
                self.conventions.lookup_autocommit.to_string(),
            ),
        ]);
        let vindex = Arc::new(Vindex::lookup(name, &params)?);

        if keyspace.insert_vindex(Arc::clone(&vindex)).is_some() {
            warn!(
                "Lookup table '{}' replaces vindex '{}' in keyspace '{}'; tables bound earlier keep the old vindex",
                name,
                name,
                keyspace.keyspace().name()
            );
        }
        debug!(
            "Registered lookup vindex '{}' in keyspace '{}' (from: {}, to: {})",
            name,
            keyspace.keyspace().name(),
            from.join(","),
            to
        );
        Ok(vindex)
    }

    fn build_table(
        &self,
        keyspace: &mut KeyspaceSchema,
        statement: &CreateTableStatement,
    ) -> Result<Arc<Table>> {
        let name = statement.table.name().as_str();
        let columns: Vec<Column> = statement
            .columns
            .iter()
            .map(|column| Column::new(column.name.clone(), column.column_type.clone()))
            .collect();

        let inference = VindexInference::new(self.conventions);
        let mut stage = VindexStage::new(keyspace.vindex_map());
        let mut bindings = Vec::new();
        for index in &statement.indexes {
            let Some(inferred) = inference.infer(name, index, &mut stage)? else {
                continue;
            };
            bindings.push(ColumnVindex {
                name: inferred.vindex.name().to_string(),
                binding_type: INDEX_BINDING,
                columns: index.info.columns.clone(),
                owned: inferred.owned,
                ordered: inferred.ordered,
                vindex: inferred.vindex,
            });
        }

        for vindex in stage.into_pending() {
            keyspace.insert_vindex(vindex);
        }

        let table = Arc::new(Table::new(
            name,
            Arc::clone(keyspace.keyspace()),
            columns,
            bindings,
        ));
        if keyspace.insert_table(Arc::clone(&table)).is_some() {
            warn!(
                "Table '{}' redefined in keyspace '{}'; the last definition wins",
                name,
                keyspace.keyspace().name()
            );
        }
        debug!(
            "Registered table '{}.{}' ({} columns, {} vindex bindings)",
            keyspace.keyspace().name(),
            name,
            table.columns().len(),
            table.column_vindexes().len()
        );
        Ok(table)
    }
}
