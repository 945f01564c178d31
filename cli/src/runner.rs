//! Load a script, build the resolver, resolve references.

use std::sync::Arc;

use log::{info, warn};
use shardgate_commons::TableRef;
use shardgate_routing::ContextSchema;
use shardgate_schema::load_script;

use crate::config::{SchemaSettings, SplitterKind};
use crate::error::Result;
use crate::output::{summarize_vschema, Report, ResolutionSummary};

/// Everything one invocation needs, after merging config file and flags.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub schema: SchemaSettings,
    pub splitter: SplitterKind,
    /// Table references to resolve, `table` or `keyspace.table`
    pub references: Vec<String>,
    /// Report the partial schema instead of failing when the load stops early
    pub keep_partial: bool,
}

pub fn run(sql: &str, options: &RunOptions) -> Result<Report> {
    let (vschema, load_error) = match load_script(
        &options.schema.dialect,
        sql,
        options.schema.loader_options(),
    ) {
        Ok(vschema) => (vschema, None),
        Err(e) if options.keep_partial => {
            warn!("Keeping partial schema: {}", e);
            let message = e.to_string();
            (e.into_partial(), Some(message))
        }
        Err(e) => return Err(e.into()),
    };
    info!("Loaded {} keyspace(s)", vschema.len());

    let vschema = Arc::new(vschema);
    let context = ContextSchema::new(
        Some(options.splitter.build()?),
        &options.schema.default_keyspace,
        Arc::clone(&vschema),
    )?;

    let resolutions = options
        .references
        .iter()
        .map(|reference| match TableRef::parse(reference) {
            Ok(table) => {
                ResolutionSummary::from_result(reference, context.find_table_or_vindex(&table))
            }
            Err(e) => ResolutionSummary::failed(reference, e.to_string()),
        })
        .collect();

    Ok(Report {
        target: context.target_string(),
        load_error,
        keyspaces: summarize_vschema(&vschema),
        resolutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    const DDL: &str = "CREATE TABLE main.users (id BIGINT, PRIMARY KEY (id) USING v_hash); \
                       CREATE TABLE main.name_idx (fname VARCHAR(32), tuser VARBINARY(8)) WITH (type = 'vindex');";

    fn options(references: &[&str]) -> RunOptions {
        RunOptions {
            schema: SchemaSettings {
                default_keyspace: "main".to_string(),
                ..SchemaSettings::default()
            },
            references: references.iter().map(|r| r.to_string()).collect(),
            ..RunOptions::default()
        }
    }

    #[test]
    fn test_resolves_references() {
        let report = run(DDL, &options(&["users", "main.name_idx", "main.nothing", "a.b.c"])).unwrap();
        assert_eq!(report.target, "main@primary");
        assert_eq!(report.resolutions[0].kind, Some("table"));
        assert_eq!(report.resolutions[0].keyspace.as_deref(), Some("main"));
        assert_eq!(report.resolutions[1].kind, Some("vindex"));
        assert!(report.resolutions[2].is_error());
        assert!(report.resolutions[3].is_error());
    }

    #[test]
    fn test_keyspace_id_splitter_destination() {
        let mut opts = options(&["users"]);
        opts.splitter = SplitterKind::KeyspaceId;
        let report = run(DDL, &opts).unwrap();
        assert_eq!(
            report.resolutions[0].destination.as_deref(),
            Some("keyspace_id:7573657273")
        );
    }

    #[test]
    fn test_missing_default_keyspace() {
        let mut opts = options(&[]);
        opts.schema.default_keyspace = "elsewhere".to_string();
        assert!(matches!(run(DDL, &opts), Err(CliError::Routing(_))));
    }

    #[test]
    fn test_partial_load() {
        let sql = "CREATE TABLE main.users (id BIGINT); CREATE TABLE (;";
        assert!(matches!(run(sql, &options(&[])), Err(CliError::Load(_))));

        let mut opts = options(&["users"]);
        opts.keep_partial = true;
        let report = run(sql, &opts).unwrap();
        assert!(report.load_error.is_some());
        assert!(!report.resolutions[0].is_error());
    }
}
