use std::fmt;

use shardgate_commons::KeyspaceName;

/// A named partition of the schema.
///
/// The `sharded` flag is fixed when the keyspace is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    name: KeyspaceName,
    sharded: bool,
}

impl Keyspace {
    pub fn new(name: impl Into<KeyspaceName>, sharded: bool) -> Self {
        Self {
            name: name.into(),
            sharded,
        }
    }

    pub fn name(&self) -> &KeyspaceName {
        &self.name
    }

    pub fn is_sharded(&self) -> bool {
        self.sharded
    }
}

impl fmt::Display for Keyspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
