use std::fmt;

use crate::KeyspaceId;

/// Narrows a query to part of a keyspace.
///
/// A route without a destination targets the whole keyspace; the executor
/// decides how to fan out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The single shard that owns this keyspace id
    KeyspaceId(KeyspaceId),
    /// A shard addressed by name, e.g. `-80`
    Shard(String),
    /// Every shard of the keyspace
    AllShards,
    /// Any one shard of the keyspace
    AnyShard,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::KeyspaceId(id) => write!(f, "keyspace_id:{}", id),
            Destination::Shard(shard) => write!(f, "shard:{}", shard),
            Destination::AllShards => f.write_str("all_shards"),
            Destination::AnyShard => f.write_str("any_shard"),
        }
    }
}
