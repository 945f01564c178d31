//! Splitting strategies: decide tablet type, destination and keyspace for a
//! raw table reference before any schema lookup happens.

use std::sync::Arc;

use shardgate_commons::{KeyspaceName, TableName};

use crate::error::{Result, VindexError};
use crate::{Destination, TabletType, Vindex, VindexKind};

/// Outcome of splitting a table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub tablet_type: TabletType,
    /// `None` targets the whole keyspace
    pub destination: Option<Destination>,
    /// `None` means "use the configured default keyspace"
    pub keyspace: Option<KeyspaceName>,
}

/// Policy applied to every table reference a query names.
///
/// Implementations must be pure: the resolver calls them concurrently from any
/// number of threads.
pub trait Splitter: Send + Sync + std::fmt::Debug {
    fn split(&self, qualifier: Option<&KeyspaceName>, name: &TableName) -> Split;
}

/// Routes to the primary, never narrows the destination and uses the qualifier
/// as the keyspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSplitter;

impl Splitter for DefaultSplitter {
    fn split(&self, qualifier: Option<&KeyspaceName>, _name: &TableName) -> Split {
        Split {
            tablet_type: TabletType::Primary,
            destination: None,
            keyspace: qualifier.cloned(),
        }
    }
}

/// Treats the referenced name as a sharding key and narrows the destination to
/// the shard owning its keyspace id.
///
/// The keyspace id is computed with a byte oriented vindex: identity
/// (`binary`, the default) or `binary_md5`.
#[derive(Debug, Clone)]
pub struct KeyspaceIdSplitter {
    vindex: Vindex,
}

impl Default for KeyspaceIdSplitter {
    fn default() -> Self {
        Self {
            vindex: Vindex::binary("keyspace_id"),
        }
    }
}

impl KeyspaceIdSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `vindex` to compute keyspace ids.
    ///
    /// # Errors
    ///
    /// Only `Binary` and `BinaryMd5` accept arbitrary names; other kinds return
    /// [`VindexError::UnsupportedKind`].
    pub fn with_vindex(vindex: Vindex) -> Result<Self> {
        match vindex.kind() {
            VindexKind::Binary | VindexKind::BinaryMd5 => Ok(Self { vindex }),
            kind => Err(VindexError::UnsupportedKind {
                vindex: vindex.name().to_string(),
                kind: kind.as_str(),
                reason: "splitting needs a vindex that accepts any byte string",
            }),
        }
    }

    pub fn vindex(&self) -> &Vindex {
        &self.vindex
    }
}

impl Splitter for KeyspaceIdSplitter {
    fn split(&self, qualifier: Option<&KeyspaceName>, name: &TableName) -> Split {
        Split {
            tablet_type: TabletType::Primary,
            destination: self
                .vindex
                .map_bytes(name.as_str().as_bytes())
                .map(Destination::KeyspaceId),
            keyspace: qualifier.cloned(),
        }
    }
}

/// Substitutes [`DefaultSplitter`] when no strategy is configured.
pub fn splitter_or_default(splitter: Option<Arc<dyn Splitter>>) -> Arc<dyn Splitter> {
    splitter.unwrap_or_else(|| Arc::new(DefaultSplitter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyspaceId;

    #[test]
    fn test_default_splitter_keeps_qualifier() {
        let ks = KeyspaceName::new("ks");
        let split = DefaultSplitter.split(Some(&ks), &TableName::new("orders"));
        assert_eq!(split.tablet_type, TabletType::Primary);
        assert_eq!(split.destination, None);
        assert_eq!(split.keyspace, Some(ks));

        let split = DefaultSplitter.split(None, &TableName::new("orders"));
        assert_eq!(split.keyspace, None);
    }

    #[test]
    fn test_keyspace_id_splitter_narrows_to_name() {
        let split = KeyspaceIdSplitter::new().split(None, &TableName::new("user1"));
        assert_eq!(split.tablet_type, TabletType::Primary);
        assert_eq!(
            split.destination,
            Some(Destination::KeyspaceId(KeyspaceId::new(b"user1".to_vec())))
        );
        assert_eq!(split.keyspace, None);
    }

    #[test]
    fn test_keyspace_id_splitter_with_md5() {
        let splitter = KeyspaceIdSplitter::with_vindex(Vindex::binary_md5("md5")).unwrap();
        let split = splitter.split(None, &TableName::new(""));
        assert_eq!(
            split.destination.unwrap().to_string(),
            "keyspace_id:d41d8cd98f00b204e9800998ecf8427e"
        );
        assert!(KeyspaceIdSplitter::with_vindex(Vindex::hash("h")).is_err());
    }

    #[test]
    fn test_missing_splitter_defaults() {
        let splitter = splitter_or_default(None);
        let split = splitter.split(None, &TableName::new("t"));
        assert_eq!(split, DefaultSplitter.split(None, &TableName::new("t")));
    }
}
