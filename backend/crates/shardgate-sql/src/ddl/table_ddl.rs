//! DDL that references tables without defining them.
//!
//! The builder only needs the keyspaces these statements mention.

use shardgate_commons::TableRef;
use sqlparser::ast::{ObjectType, Statement};

use crate::error::Result;
use crate::object_name::table_ref_from_object_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDdlStatement {
    /// Statement label, e.g. "DROP TABLE"
    pub action: &'static str,
    pub tables: Vec<TableRef>,
}

impl TableDdlStatement {
    pub fn from_ast(statement: &Statement) -> Result<Option<Self>> {
        match statement {
            Statement::Drop {
                object_type: ObjectType::Table,
                names,
                ..
            } => {
                let tables = names
                    .iter()
                    .map(table_ref_from_object_name)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Some(Self {
                    action: "DROP TABLE",
                    tables,
                }))
            }
            _ => Ok(None),
        }
    }
}
