//! Shardgate SQL - turns DDL scripts into the statements the schema builder consumes.
//!
//! The builder never sees `sqlparser` types. [`SqlScriptReader`] parses a script one
//! statement at a time and yields [`DdlStatement`] values:
//!
//! - `CREATE DATABASE` / `CREATE SCHEMA` → [`DdlStatement::CreateDatabase`]
//! - `CREATE TABLE` → [`DdlStatement::CreateTable`] with columns, index definitions
//!   (including their `USING` markers) and normalized table options
//! - `DROP TABLE` → [`DdlStatement::TableDdl`]
//! - everything else → [`DdlStatement::Other`]
//!
//! # Example
//!
//! ```rust
//! use shardgate_sql::{dialect_by_name, DdlStatement, SqlScriptReader};
//!
//! # fn example() -> shardgate_sql::Result<()> {
//! let dialect = dialect_by_name("generic")?;
//! let sql = "CREATE DATABASE commerce; CREATE TABLE commerce.orders (id BIGINT, PRIMARY KEY (id) USING v_hash);";
//! let statements = SqlScriptReader::new(dialect.as_ref(), sql)?.collect::<Result<Vec<_>, _>>()?;
//! assert!(matches!(statements[0], DdlStatement::CreateDatabase(_)));
//! assert!(matches!(statements[1], DdlStatement::CreateTable(_)));
//! # Ok(())
//! # }
//! ```

pub mod column_type;
pub mod ddl;
mod error;
mod object_name;
mod reader;
mod tokens;

pub use column_type::ColumnType;
pub use ddl::{
    ColumnSpec, CreateDatabaseStatement, CreateTableStatement, DdlStatement, IndexDefinition,
    IndexInfo, IndexOption, TableDdlStatement,
};
pub use error::{Result, SqlError};
pub use object_name::table_ref_from_object_name;
pub use reader::{dialect_by_name, SqlScriptReader, StatementReader};
