//! Shardgate schema - the keyspace registry and the DDL-driven builder that fills it.
//!
//! A [`VSchema`] maps keyspace names to [`KeyspaceSchema`]s: tables, their
//! columns and the vindexes (sharding indexes) bound to them. The
//! [`builder`] derives vindexes from naming conventions in plain DDL.
//!
//! ```rust
//! use shardgate_schema::{load_script, LoaderOptions};
//!
//! let vschema = load_script(
//!     "generic",
//!     "CREATE TABLE ks.orders (id BIGINT, PRIMARY KEY (id) USING v_hash)",
//!     LoaderOptions::default(),
//! )
//! .unwrap();
//! let table = vschema.find_table("ks", "orders").unwrap();
//! assert_eq!(table.owned_vindexes().next().unwrap().name, "orders_primary_key");
//! ```

pub mod builder;
pub mod error;
pub mod models;
pub mod vschema;

pub use builder::{load_script, LoaderOptions, SchemaLoader, TableBuilder, VindexInference};
pub use error::{LookupError, Result, SchemaError, SchemaLoadError};
pub use models::{Column, ColumnVindex, Keyspace, KeyspaceSchema, Table};
pub use vschema::{TableOrVindex, VSchema};
