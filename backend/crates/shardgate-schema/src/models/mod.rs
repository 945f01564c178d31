//! Registry entities: keyspaces, tables, columns and vindex bindings.

mod keyspace;
mod keyspace_schema;
mod table;

pub use keyspace::Keyspace;
pub use keyspace_schema::KeyspaceSchema;
pub use table::{Column, ColumnVindex, Table, INDEX_BINDING};
