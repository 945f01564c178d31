use std::fmt;

use shardgate_commons::KeyspaceName;
use shardgate_sharding::{Destination, TabletType};

/// A routing decision for one table reference.
#[derive(Debug, Clone)]
pub struct Route<T> {
    /// What the reference resolved to
    pub target: T,
    /// Effective keyspace, after default keyspace fallback
    pub keyspace: KeyspaceName,
    pub tablet_type: TabletType,
    /// `None` targets the whole keyspace
    pub destination: Option<Destination>,
}

impl<T> Route<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Route<U> {
        Route {
            target: f(self.target),
            keyspace: self.keyspace,
            tablet_type: self.tablet_type,
            destination: self.destination,
        }
    }
}

/// `keyspace@tablet_type`, followed by `/destination` when narrowed.
impl<T> fmt::Display for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.keyspace, self.tablet_type)?;
        if let Some(destination) = &self.destination {
            write!(f, "/{}", destination)?;
        }
        Ok(())
    }
}
