//! Shardgate Sharding - the vocabulary of routing.
//!
//! - [`Vindex`]: a sharding index that maps column values to keyspace ids
//! - [`KeyspaceId`] and [`Destination`]: where a query may be narrowed to
//! - [`TabletType`]: which replica role serves a query
//! - [`Splitter`]: the pluggable policy that turns a raw table reference into
//!   a tablet type, a destination and an effective keyspace

mod destination;
mod error;
mod keyspace_id;
mod splitter;
mod tablet_type;
mod vindex;

pub use destination::Destination;
pub use error::{Result, VindexError};
pub use keyspace_id::KeyspaceId;
pub use splitter::{splitter_or_default, DefaultSplitter, KeyspaceIdSplitter, Split, Splitter};
pub use tablet_type::TabletType;
pub use vindex::{LookupParams, Vindex, VindexKind};
