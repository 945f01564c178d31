//! CREATE TABLE statement: columns, index definitions and table options.

mod parser;
mod types;

pub use types::{ColumnSpec, CreateTableStatement, IndexDefinition, IndexInfo, IndexOption};
