//! Shardgate Commons - identifiers and conventions shared by every shardgate crate.
//!
//! This crate stays free of SQL parsing and sharding logic so the schema builder,
//! the sharding primitives and the routing resolver can all depend on it.
//!
//! # Example
//!
//! ```rust
//! use shardgate_commons::{KeyspaceName, TableRef};
//!
//! let table_ref = TableRef::parse("commerce.orders").unwrap();
//! assert_eq!(table_ref.qualifier(), Some(&KeyspaceName::new("commerce")));
//! assert_eq!(table_ref.name().as_str(), "orders");
//! ```

pub mod conventions;
pub mod errors;
pub mod models;

pub use conventions::NamingConventions;
pub use errors::{CommonError, Result};
pub use models::{KeyspaceName, TableName, TableRef};
