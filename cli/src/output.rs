//! Report rendering: plain text or JSON.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shardgate_routing::{Route, RoutingError};
use shardgate_schema::{KeyspaceSchema, Table, TableOrVindex, VSchema};
use shardgate_sharding::Vindex;

use crate::error::Result;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Session target of the resolver
    pub target: String,
    /// Set when the load stopped early and the schema below is partial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
    pub keyspaces: Vec<KeyspaceSummary>,
    pub resolutions: Vec<ResolutionSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyspaceSummary {
    pub name: String,
    pub sharded: bool,
    pub tables: Vec<TableSummary>,
    pub vindexes: Vec<VindexSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub columns: Vec<ColumnSummary>,
    pub vindexes: Vec<BindingSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BindingSummary {
    pub name: String,
    pub columns: Vec<String>,
    pub owned: bool,
    pub ordered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct VindexSummary {
    pub name: String,
    pub kind: String,
    pub unique: bool,
    pub cost: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<LookupSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupSummary {
    pub table: String,
    pub from: Vec<String>,
    pub to: String,
    pub autocommit: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolutionSummary {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionSummary {
    pub fn from_result(
        reference: &str,
        result: std::result::Result<Route<TableOrVindex>, RoutingError>,
    ) -> Self {
        match result {
            Ok(route) => Self {
                reference: reference.to_string(),
                kind: Some(match route.target {
                    TableOrVindex::Table(_) => "table",
                    TableOrVindex::Vindex(_) => "vindex",
                }),
                keyspace: Some(route.keyspace.to_string()),
                tablet_type: Some(route.tablet_type.to_string()),
                destination: route.destination.as_ref().map(ToString::to_string),
                error: None,
            },
            Err(e) => Self::failed(reference, e.to_string()),
        }
    }

    pub fn failed(reference: &str, error: String) -> Self {
        Self {
            reference: reference.to_string(),
            kind: None,
            keyspace: None,
            tablet_type: None,
            destination: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

pub fn summarize_vschema(vschema: &VSchema) -> Vec<KeyspaceSummary> {
    vschema
        .keyspace_names()
        .into_iter()
        .filter_map(|name| vschema.keyspace(name))
        .map(summarize_keyspace)
        .collect()
}

fn summarize_keyspace(schema: &KeyspaceSchema) -> KeyspaceSummary {
    KeyspaceSummary {
        name: schema.keyspace().name().to_string(),
        sharded: schema.keyspace().is_sharded(),
        tables: schema
            .table_names()
            .into_iter()
            .filter_map(|name| schema.table(name))
            .map(|table| summarize_table(table))
            .collect(),
        vindexes: schema
            .vindex_names()
            .into_iter()
            .filter_map(|name| schema.vindex(name))
            .map(|vindex| summarize_vindex(vindex))
            .collect(),
    }
}

fn summarize_table(table: &Table) -> TableSummary {
    TableSummary {
        name: table.name().to_string(),
        columns: table
            .columns()
            .iter()
            .map(|column| ColumnSummary {
                name: column.name.clone(),
                column_type: column.column_type.to_string(),
            })
            .collect(),
        vindexes: table
            .column_vindexes()
            .iter()
            .map(|binding| BindingSummary {
                name: binding.name.clone(),
                columns: binding.columns.clone(),
                owned: binding.owned,
                ordered: binding.ordered,
            })
            .collect(),
    }
}

fn summarize_vindex(vindex: &Vindex) -> VindexSummary {
    VindexSummary {
        name: vindex.name().to_string(),
        kind: vindex.kind().to_string(),
        unique: vindex.is_unique(),
        cost: vindex.cost(),
        lookup: vindex.lookup_params().map(|params| LookupSummary {
            table: params.table.clone(),
            from: params.from.clone(),
            to: params.to.clone(),
            autocommit: params.autocommit,
        }),
    }
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = writeln!(out, "target: {}", self.target);
        if let Some(error) = &self.load_error {
            let _ = writeln!(out, "load stopped early: {}", error);
        }
        for keyspace in &self.keyspaces {
            let _ = writeln!(
                out,
                "keyspace {} ({})",
                keyspace.name,
                if keyspace.sharded { "sharded" } else { "unsharded" }
            );
            for vindex in &keyspace.vindexes {
                let _ = write!(out, "  vindex {} [{}]", vindex.name, vindex.kind);
                if let Some(lookup) = &vindex.lookup {
                    let _ = write!(
                        out,
                        " table={} from={} to={}",
                        lookup.table,
                        lookup.from.join(","),
                        lookup.to
                    );
                }
                let _ = writeln!(out);
            }
            for table in &keyspace.tables {
                let columns: Vec<String> = table
                    .columns
                    .iter()
                    .map(|c| format!("{} {}", c.name, c.column_type))
                    .collect();
                let _ = writeln!(out, "  table {} ({})", table.name, columns.join(", "));
                for binding in &table.vindexes {
                    let _ = writeln!(
                        out,
                        "    vindex {} on ({}){}",
                        binding.name,
                        binding.columns.join(", "),
                        if binding.owned { " owned" } else { "" }
                    );
                }
            }
        }
        for resolution in &self.resolutions {
            match &resolution.error {
                Some(error) => {
                    let _ = writeln!(out, "{} -> error: {}", resolution.reference, error);
                }
                None => {
                    let _ = write!(
                        out,
                        "{} -> {} {}@{}",
                        resolution.reference,
                        resolution.kind.unwrap_or("table"),
                        resolution.keyspace.as_deref().unwrap_or_default(),
                        resolution.tablet_type.as_deref().unwrap_or_default()
                    );
                    if let Some(destination) = &resolution.destination {
                        let _ = write!(out, " {}", destination);
                    }
                    let _ = writeln!(out);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardgate_schema::{load_script, LoaderOptions};

    fn report() -> Report {
        let vschema = load_script(
            "generic",
            "CREATE TABLE ks.orders (id BIGINT, PRIMARY KEY (id) USING v_hash); \
             CREATE TABLE ks.by_code (fcode VARCHAR(8), tid VARBINARY(8)) WITH (type = 'vindex');",
            LoaderOptions::default(),
        )
        .unwrap();
        Report {
            target: "ks@primary".to_string(),
            load_error: None,
            keyspaces: summarize_vschema(&vschema),
            resolutions: vec![ResolutionSummary::failed("nope.t", "Keyspace 'nope' not found".to_string())],
        }
    }

    #[test]
    fn test_text_report() {
        let text = report().render(OutputFormat::Text).unwrap();
        assert!(text.contains("keyspace ks (sharded)"));
        assert!(text.contains("  vindex by_code [lookup] table=by_code from=fcode to=tid"));
        assert!(text.contains("  table orders (id INT64)"));
        assert!(text.contains("    vindex orders_primary_key on (id) owned"));
        assert!(text.contains("nope.t -> error: Keyspace 'nope' not found"));
    }

    #[test]
    fn test_json_report() {
        let json = report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keyspace = &value["keyspaces"][0];
        assert_eq!(keyspace["name"], "ks");
        assert_eq!(keyspace["tables"][0]["columns"][0]["type"], "INT64");
        assert_eq!(keyspace["vindexes"][1]["name"], "orders_primary_key");
        assert_eq!(keyspace["vindexes"][1]["kind"], "hash");
        assert!(keyspace["vindexes"][1].get("lookup").is_none());
        assert_eq!(value["resolutions"][0]["error"], "Keyspace 'nope' not found");
        assert!(value.get("load_error").is_none());
    }
}
