//! DDL statements understood by the schema builder.
//!
//! Each statement kind lives in its own module and converts from the
//! `sqlparser` AST; [`DdlStatement::from_ast`] dispatches between them.

pub mod create_database;
pub mod create_table;
pub mod table_ddl;

pub use create_database::CreateDatabaseStatement;
pub use create_table::{ColumnSpec, CreateTableStatement, IndexDefinition, IndexInfo, IndexOption};
pub use table_ddl::TableDdlStatement;

use sqlparser::ast::Statement;

use crate::error::Result;

/// A statement as seen by the schema builder.
#[derive(Debug, Clone, PartialEq)]
pub enum DdlStatement {
    /// `CREATE DATABASE` or `CREATE SCHEMA`
    CreateDatabase(CreateDatabaseStatement),
    CreateTable(CreateTableStatement),
    /// DDL that names tables without defining them (`DROP TABLE`)
    TableDdl(TableDdlStatement),
    /// Anything the builder does not act on (queries, DML, session statements)
    Other,
}

impl DdlStatement {
    /// Classifies a parsed statement.
    pub fn from_ast(statement: Statement) -> Result<Self> {
        if let Some(create_database) = CreateDatabaseStatement::from_ast(&statement)? {
            return Ok(DdlStatement::CreateDatabase(create_database));
        }
        if let Some(table_ddl) = TableDdlStatement::from_ast(&statement)? {
            return Ok(DdlStatement::TableDdl(table_ddl));
        }
        match statement {
            Statement::CreateTable(create_table) => Ok(DdlStatement::CreateTable(
                CreateTableStatement::from_ast(&create_table)?,
            )),
            _ => Ok(DdlStatement::Other),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DdlStatement::CreateDatabase(_) => "CREATE DATABASE",
            DdlStatement::CreateTable(_) => "CREATE TABLE",
            DdlStatement::TableDdl(_) => "TABLE DDL",
            DdlStatement::Other => "OTHER",
        }
    }
}
