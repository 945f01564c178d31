//! Config files and full runs through the library API.

use std::io::Write;

use shardgate_cli::config::SplitterKind;
use shardgate_cli::{run, CliError, OutputFormat, RunOptions, ShardgateConfig};

const DDL: &str = r#"
CREATE DATABASE commerce;
CREATE TABLE commerce.orders (
    order_id BIGINT,
    customer_email VARCHAR(64),
    PRIMARY KEY (order_id) USING v_hash,
    INDEX by_email USING v_md5 (customer_email)
);
CREATE TABLE commerce.email_lookup (femail VARCHAR(64), torder VARBINARY(8)) WITH (type = 'vindex');
"#;

#[test]
fn test_config_file_drives_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [schema]
        default_keyspace = "commerce"

        [routing]
        splitter = "keyspace_id"

        [logging]
        level = "debug"
        "#
    )
    .unwrap();

    let config = ShardgateConfig::from_file(file.path()).unwrap();
    assert_eq!(config.routing.splitter, SplitterKind::KeyspaceId);
    assert_eq!(config.logging.level, "debug");

    let options = RunOptions {
        schema: config.schema,
        splitter: config.routing.splitter,
        references: vec!["orders".to_string(), "email_lookup".to_string()],
        keep_partial: false,
    };
    let report = run(DDL, &options).unwrap();
    assert_eq!(report.target, "commerce@primary");
    assert_eq!(report.resolutions[0].kind, Some("table"));
    assert!(report.resolutions[0].destination.is_some());
    assert_eq!(report.resolutions[1].kind, Some("vindex"));

    let json = report.render(OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let orders = &value["keyspaces"][0]["tables"][0];
    assert_eq!(orders["name"], "orders");
    assert_eq!(orders["vindexes"][0]["owned"], true);
    assert_eq!(orders["vindexes"][1]["name"], "by_email");
    assert_eq!(orders["vindexes"][1]["owned"], false);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ShardgateConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CliError::Configuration(_)));
}

#[test]
fn test_no_config_uses_defaults() {
    let config = ShardgateConfig::load(None).unwrap();
    let report = run(
        DDL,
        &RunOptions {
            schema: config.schema,
            references: vec!["orders".to_string()],
            ..RunOptions::default()
        },
    )
    .unwrap();
    assert_eq!(report.target, "@primary");
    assert_eq!(
        report.resolutions[0].error.as_deref(),
        Some("No default keyspace configured")
    );
    let text = report.render(OutputFormat::Text).unwrap();
    assert!(text.contains("orders -> error: No default keyspace configured"));
}
