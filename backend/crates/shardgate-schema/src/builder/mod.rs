//! Builds a [`VSchema`](crate::VSchema) from DDL statements.
//!
//! - [`loader`] walks the statement stream and creates keyspaces
//! - [`table_builder`] turns one CREATE TABLE into a table or a lookup vindex
//! - [`vindex_inference`] decides which index definitions declare vindexes

pub mod loader;
pub mod table_builder;
pub mod vindex_inference;

pub use loader::{load_script, LoaderOptions, SchemaLoader};
pub use table_builder::TableBuilder;
pub use vindex_inference::{InferredVindex, VindexInference, VindexStage, ORDERED};
