//! Keyspace id mapping and splitting through the public API.

use std::collections::BTreeMap;

use shardgate_commons::{KeyspaceName, TableName};
use shardgate_sharding::{
    DefaultSplitter, Destination, KeyspaceIdSplitter, Splitter, TabletType, Vindex, VindexError,
};

#[test]
fn test_functional_mappings() {
    let binary = Vindex::binary("b");
    assert_eq!(binary.map(b"\x01\x02").unwrap().as_bytes(), &[1u8, 2][..]);

    let md5 = Vindex::binary_md5("m");
    assert_eq!(
        md5.map(b"").unwrap().to_string(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );

    let hash = Vindex::hash("h");
    let first = hash.map(b"42").unwrap();
    assert_eq!(first.as_bytes().len(), 8);
    assert_eq!(hash.map(b" 42 ").unwrap(), first);
    assert_ne!(hash.map(b"43").unwrap(), first);
    assert!(matches!(
        hash.map(b"forty-two"),
        Err(VindexError::InvalidValue { .. })
    ));
}

#[test]
fn test_lookup_requires_table() {
    let params: BTreeMap<String, String> = [("table", "t"), ("from", "fa, fb"), ("to", "tx")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let lookup = Vindex::lookup("l", &params).unwrap();
    assert_eq!(lookup.lookup_params().unwrap().from, vec!["fa", "fb"]);
    assert!(!lookup.lookup_params().unwrap().autocommit);
    assert_eq!(
        lookup.map(b"x").unwrap_err(),
        VindexError::RequiresLookup("l".to_string())
    );
}

#[test]
fn test_splitters_agree_on_keyspace() {
    let qualifier = KeyspaceName::new("ks");
    let name = TableName::new("users");

    let plain = DefaultSplitter.split(Some(&qualifier), &name);
    let narrowed = KeyspaceIdSplitter::new().split(Some(&qualifier), &name);

    assert_eq!(plain.keyspace, narrowed.keyspace);
    assert_eq!(plain.tablet_type, TabletType::Primary);
    assert_eq!(narrowed.tablet_type, TabletType::Primary);
    assert_eq!(plain.destination, None);
    assert_eq!(
        narrowed.destination.map(|d| d.to_string()),
        Some("keyspace_id:7573657273".to_string())
    );

    let unqualified = DefaultSplitter.split(None, &name);
    assert!(unqualified.keyspace.is_none());
    assert!(matches!(
        KeyspaceIdSplitter::new().split(None, &name).destination,
        Some(Destination::KeyspaceId(_))
    ));
}
