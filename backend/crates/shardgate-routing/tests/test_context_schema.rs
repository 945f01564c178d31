//! Resolution scenarios over schemas loaded from DDL.

use std::sync::Arc;
use std::thread;

use shardgate_commons::TableRef;
use shardgate_routing::{ContextSchema, RoutingError};
use shardgate_schema::{load_script, LoaderOptions, LookupError, VSchema};
use shardgate_sharding::{Destination, KeyspaceIdSplitter, Splitter, TabletType, Vindex};

const DDL: &str = r#"
CREATE DATABASE ks;
CREATE TABLE ks.accounts (id BIGINT, owner_name VARCHAR(64), PRIMARY KEY (id) USING v_hash);
CREATE TABLE ks.owner_lookup (fowner VARCHAR(64), taccount VARBINARY(16)) WITH (type = 'vindex');
"#;

fn vschema() -> Arc<VSchema> {
    Arc::new(load_script("generic", DDL, LoaderOptions::default()).unwrap())
}

#[test]
fn test_resolution_scenario() {
    let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
    let route = ctx.find_table(&TableRef::parse("accounts").unwrap()).unwrap();

    assert_eq!(route.target.name().as_str(), "accounts");
    assert_eq!(route.keyspace.as_str(), "ks");
    assert_eq!(route.tablet_type, TabletType::Primary);
    assert_eq!(route.destination, None);
    assert_eq!(ctx.default_keyspace().unwrap().name().as_str(), "ks");
    assert_eq!(ctx.target_string(), "ks@primary");
}

#[test]
fn test_missing_default_keyspace_only_fails_resolution() {
    let ctx = ContextSchema::new(None, "", vschema()).unwrap();
    assert_eq!(
        ctx.find_table_or_vindex(&TableRef::parse("accounts").unwrap())
            .unwrap_err(),
        RoutingError::NoDefaultKeyspace
    );
    let qualified = ctx.find_table(&TableRef::parse("ks.accounts").unwrap()).unwrap();
    assert_eq!(qualified.keyspace.as_str(), "ks");
}

#[test]
fn test_unknown_keyspaces() {
    assert!(matches!(
        ContextSchema::new(None, "nope", vschema()),
        Err(RoutingError::Lookup(LookupError::KeyspaceNotFound(_)))
    ));

    let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
    let err = ctx
        .find_table(&TableRef::parse("nope.accounts").unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "Keyspace 'nope' not found");
}

#[test]
fn test_vindex_resolution() {
    let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
    let route = ctx
        .find_table_or_vindex(&TableRef::parse("ks.owner_lookup").unwrap())
        .unwrap();
    let vindex = route.target.as_vindex().unwrap();
    assert_eq!(vindex.cost(), 20);
    assert_eq!(vindex.lookup_params().unwrap().from_expression(), "fowner");

    let table = ctx
        .find_table_or_vindex(&TableRef::parse("ks.accounts").unwrap())
        .unwrap();
    assert!(table.target.as_table().is_some());
}

#[test]
fn test_md5_keyspace_id_splitter() {
    let splitter: Arc<dyn Splitter> =
        Arc::new(KeyspaceIdSplitter::with_vindex(Vindex::binary_md5("ksid")).unwrap());
    let ctx = ContextSchema::new(Some(splitter), "ks", vschema()).unwrap();
    let route = ctx.find_table(&TableRef::parse("accounts").unwrap()).unwrap();
    let expected = Vindex::binary_md5("ksid").map(b"accounts").unwrap();
    assert_eq!(route.destination, Some(Destination::KeyspaceId(expected)));
}

#[test]
fn test_concurrent_resolution() {
    let ctx = ContextSchema::new(None, "ks", vschema()).unwrap();
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let route = ctx.find_table(&TableRef::parse("accounts").unwrap()).unwrap();
                    assert_eq!(route.keyspace.as_str(), "ks");
                }
            });
        }
    });
}
