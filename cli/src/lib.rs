//! Library entry point for shardgate-cli components.
//!
//! Exposes config, logging, output and the run loop so integration tests can
//! drive them without going through the binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;

pub use config::ShardgateConfig;
pub use error::{CliError, Result};
pub use output::{OutputFormat, Report};
pub use runner::{run, RunOptions};
