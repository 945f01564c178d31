//! Strongly typed names used across shardgate.

mod keyspace_name;
mod table_name;
mod table_ref;

pub use keyspace_name::KeyspaceName;
pub use table_name::TableName;
pub use table_ref::TableRef;
