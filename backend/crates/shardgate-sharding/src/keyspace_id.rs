use std::fmt;

/// Opaque byte string that places a row on exactly one shard.
///
/// Shards own contiguous ranges of keyspace ids; vindexes produce them from
/// column values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyspaceId(Vec<u8>);

impl KeyspaceId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Lower-case hex, the usual way keyspace ids are printed in shard names and logs.
impl fmt::Display for KeyspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<&[u8]> for KeyspaceId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
