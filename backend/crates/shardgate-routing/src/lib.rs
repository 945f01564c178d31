//! Shardgate routing - resolves the table references of a query.
//!
//! [`ContextSchema`] combines a [`Splitter`](shardgate_sharding::Splitter), an
//! optional default keyspace and a loaded
//! [`VSchema`](shardgate_schema::VSchema). Each lookup produces a [`Route`]:
//! the resolved table (or vindex), its effective keyspace, the tablet type and
//! an optional narrowed destination.

mod context;
mod error;
mod route;

pub use context::ContextSchema;
pub use error::{Result, RoutingError};
pub use route::Route;
