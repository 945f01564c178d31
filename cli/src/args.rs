use std::path::PathBuf;

use clap::Parser;
use shardgate_cli::config::SplitterKind;
use shardgate_cli::OutputFormat;

/// Shardgate - load DDL into a sharded schema and resolve table references
#[derive(Parser, Debug)]
#[command(name = "shardgate")]
#[command(version)]
#[command(about = "Build a sharded schema from DDL and resolve table references", long_about = None)]
pub struct Cli {
    /// DDL script to load ("-" reads stdin)
    pub file: PathBuf,

    /// Configuration file path
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// SQL dialect of the script (overrides config)
    #[arg(long = "dialect")]
    pub dialect: Option<String>,

    /// Keyspace of unqualified table names (overrides config)
    #[arg(short = 'k', long = "default-keyspace")]
    pub default_keyspace: Option<String>,

    /// Create keyspaces as unsharded
    #[arg(long = "unsharded")]
    pub unsharded: bool,

    /// Splitting strategy (overrides config)
    #[arg(long = "splitter", value_enum)]
    pub splitter: Option<SplitterKind>,

    /// Table reference to resolve, `table` or `keyspace.table` (repeatable)
    #[arg(short = 'r', long = "resolve")]
    pub resolve: Vec<String>,

    /// Report the partial schema when the script fails halfway
    #[arg(long = "keep-partial")]
    pub keep_partial: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (overrides config)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose", conflicts_with = "log_level")]
    pub verbose: bool,
}
