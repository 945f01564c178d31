//! Table reference resolution against a loaded schema.

use std::sync::Arc;

use log::trace;
use shardgate_commons::{KeyspaceName, TableRef};
use shardgate_schema::{Keyspace, LookupError, Table, TableOrVindex, VSchema};
use shardgate_sharding::{splitter_or_default, Split, Splitter, TabletType};

use crate::error::{Result, RoutingError};
use crate::route::Route;

/// Resolves table references for one session.
///
/// Holds no locks and never mutates the schema; share it freely between
/// threads.
#[derive(Debug, Clone)]
pub struct ContextSchema {
    splitter: Arc<dyn Splitter>,
    default_keyspace: Option<Arc<Keyspace>>,
    vschema: Arc<VSchema>,
}

impl ContextSchema {
    /// Builds a resolver.
    ///
    /// A missing splitter means [`DefaultSplitter`](shardgate_sharding::DefaultSplitter).
    /// An empty `default_keyspace` configures none.
    ///
    /// # Errors
    ///
    /// [`LookupError::KeyspaceNotFound`] when a non-empty default keyspace is not in `vschema`.
    pub fn new(
        splitter: Option<Arc<dyn Splitter>>,
        default_keyspace: &str,
        vschema: Arc<VSchema>,
    ) -> Result<Self> {
        let default_keyspace = if default_keyspace.is_empty() {
            None
        } else {
            let schema = vschema.keyspace(default_keyspace).ok_or_else(|| {
                LookupError::KeyspaceNotFound(KeyspaceName::new(default_keyspace))
            })?;
            Some(Arc::clone(schema.keyspace()))
        };

        Ok(Self {
            splitter: splitter_or_default(splitter),
            default_keyspace,
            vschema,
        })
    }

    pub fn vschema(&self) -> &Arc<VSchema> {
        &self.vschema
    }

    pub fn splitter(&self) -> &Arc<dyn Splitter> {
        &self.splitter
    }

    /// The configured default keyspace.
    pub fn default_keyspace(&self) -> Result<&Keyspace> {
        self.default_keyspace
            .as_deref()
            .ok_or(RoutingError::NoDefaultKeyspace)
    }

    /// Session target: `<default keyspace>@primary`, or `@primary` without a default.
    pub fn target_string(&self) -> String {
        match &self.default_keyspace {
            Some(keyspace) => format!("{}@{}", keyspace.name(), TabletType::Primary),
            None => format!("@{}", TabletType::Primary),
        }
    }

    /// Resolves `table` to a table of its effective keyspace.
    pub fn find_table(&self, table: &TableRef) -> Result<Route<Arc<Table>>> {
        let (keyspace, split) = self.split(table)?;
        let found = self
            .vschema
            .find_table(keyspace.as_str(), table.name().as_str())?;
        Ok(route(found, keyspace, split))
    }

    /// Like [`find_table`](Self::find_table), but also accepts vindex names.
    pub fn find_table_or_vindex(&self, table: &TableRef) -> Result<Route<TableOrVindex>> {
        let (keyspace, split) = self.split(table)?;
        let found = self
            .vschema
            .find_table_or_vindex(keyspace.as_str(), table.name().as_str())?;
        Ok(route(found, keyspace, split))
    }

    fn split(&self, table: &TableRef) -> Result<(KeyspaceName, Split)> {
        let mut split = self.splitter.split(table.qualifier(), table.name());
        let keyspace = match split.keyspace.take().filter(|name| !name.is_empty()) {
            Some(keyspace) => keyspace,
            None => self.default_keyspace()?.name().clone(),
        };
        trace!(
            "Split '{}' into keyspace '{}' ({})",
            table,
            keyspace,
            split.tablet_type
        );
        Ok((keyspace, split))
    }
}

fn route<T>(target: T, keyspace: KeyspaceName, split: Split) -> Route<T> {
    Route {
        target,
        keyspace,
        tablet_type: split.tablet_type,
        destination: split.destination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardgate_schema::{load_script, LoaderOptions};
    use shardgate_sharding::{Destination, KeyspaceIdSplitter};

    fn vschema() -> Arc<VSchema> {
        Arc::new(
            load_script(
                "generic",
                "CREATE TABLE ks.accounts (id BIGINT, PRIMARY KEY (id) USING v_hash); \
                 CREATE TABLE ks.by_owner (fowner BIGINT, tid VARBINARY(16)) WITH (type = 'vindex'); \
                 CREATE DATABASE other;",
                LoaderOptions::default(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_unqualified_reference_uses_default_keyspace() {
        let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
        let route = ctx.find_table(&TableRef::unqualified("accounts")).unwrap();
        assert_eq!(route.target.name().as_str(), "accounts");
        assert_eq!(route.keyspace.as_str(), "ks");
        assert_eq!(route.tablet_type, TabletType::Primary);
        assert!(route.destination.is_none());
        assert_eq!(route.to_string(), "ks@primary");
    }

    #[test]
    fn test_qualifier_overrides_default() {
        let ctx = ContextSchema::new(None, "other", vschema()).unwrap();
        let route = ctx.find_table(&TableRef::qualified("ks", "accounts")).unwrap();
        assert_eq!(route.keyspace.as_str(), "ks");
    }

    #[test]
    fn test_empty_default_keyspace() {
        let ctx = ContextSchema::new(None, "", vschema()).unwrap();
        assert_eq!(
            ctx.find_table(&TableRef::unqualified("accounts")).unwrap_err(),
            RoutingError::NoDefaultKeyspace
        );
        assert_eq!(ctx.default_keyspace().unwrap_err(), RoutingError::NoDefaultKeyspace);
        assert_eq!(ctx.target_string(), "@primary");
    }

    #[test]
    fn test_unknown_default_keyspace_fails_construction() {
        let err = ContextSchema::new(None, "missing", vschema()).unwrap_err();
        assert_eq!(
            err,
            RoutingError::Lookup(LookupError::KeyspaceNotFound(KeyspaceName::new("missing")))
        );
    }

    #[test]
    fn test_unknown_qualifier() {
        let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
        assert!(matches!(
            ctx.find_table(&TableRef::qualified("nowhere", "accounts")),
            Err(RoutingError::Lookup(LookupError::KeyspaceNotFound(_)))
        ));
    }

    #[test]
    fn test_table_or_vindex() {
        let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
        let route = ctx
            .find_table_or_vindex(&TableRef::unqualified("by_owner"))
            .unwrap();
        let vindex = route.target.as_vindex().unwrap();
        assert_eq!(vindex.lookup_params().unwrap().to, "tid");

        assert!(matches!(
            ctx.find_table(&TableRef::unqualified("by_owner")),
            Err(RoutingError::Lookup(LookupError::TableNotFound { .. }))
        ));
    }

    #[test]
    fn test_keyspace_id_splitter_narrows_destination() {
        let splitter: Arc<dyn Splitter> = Arc::new(KeyspaceIdSplitter::new());
        let ctx = ContextSchema::new(Some(splitter), "ks", vschema()).unwrap();
        let route = ctx.find_table(&TableRef::unqualified("accounts")).unwrap();
        match route.destination {
            Some(Destination::KeyspaceId(id)) => assert_eq!(id.as_bytes(), b"accounts"),
            other => panic!("unexpected destination {:?}", other),
        }
        assert_eq!(ctx.target_string(), "ks@primary");
    }

    #[test]
    fn test_custom_splitter_can_pick_keyspace() {
        #[derive(Debug)]
        struct ReplicaSplitter;

        impl Splitter for ReplicaSplitter {
            fn split(&self, _qualifier: Option<&KeyspaceName>, _name: &shardgate_commons::TableName) -> Split {
                Split {
                    tablet_type: TabletType::Replica,
                    destination: Some(Destination::AnyShard),
                    keyspace: Some(KeyspaceName::new("ks")),
                }
            }
        }

        let ctx = ContextSchema::new(Some(Arc::new(ReplicaSplitter)), "", vschema()).unwrap();
        let route = ctx.find_table(&TableRef::unqualified("accounts")).unwrap();
        assert_eq!(route.tablet_type, TabletType::Replica);
        assert_eq!(route.to_string(), "ks@replica/any_shard");
    }
}
