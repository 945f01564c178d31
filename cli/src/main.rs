//! Shardgate CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the schema built from a script
//! shardgate schema.sql
//!
//! # Resolve references against it
//! shardgate schema.sql -k commerce -r orders -r customer.users --format json
//! ```

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use shardgate_cli::logging::init_logging;
use shardgate_cli::{run, RunOptions, ShardgateConfig};

mod args;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ShardgateConfig::load(cli.config.as_deref())?;
    if let Some(dialect) = cli.dialect {
        config.schema.dialect = dialect;
    }
    if let Some(default_keyspace) = cli.default_keyspace {
        config.schema.default_keyspace = default_keyspace;
    }
    if cli.unsharded {
        config.schema.sharded = false;
    }
    if let Some(splitter) = cli.splitter {
        config.routing.splitter = splitter;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    } else if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_logging(
        &config.logging.level,
        &config.logging.format,
        &config.logging.targets,
    )?;

    let sql = read_script(&cli.file)?;
    let options = RunOptions {
        schema: config.schema,
        splitter: config.routing.splitter,
        references: cli.resolve,
        keep_partial: cli.keep_partial,
    };
    let report = run(&sql, &options)?;
    println!("{}", report.render(cli.format)?);

    let failed = report.resolutions.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        anyhow::bail!("{} reference(s) failed to resolve", failed);
    }
    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut sql = String::new();
        std::io::stdin()
            .read_to_string(&mut sql)
            .context("Failed to read script from stdin")?;
        return Ok(sql);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
