// Logging - powered by tracing-subscriber
//
// Library crates log through the `log` facade; `tracing_log::LogTracer`
// forwards those records into the subscriber installed here. Output goes to
// stderr so stdout only carries the report.

use std::collections::HashMap;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text: timestamp LEVEL target: message
    Compact,
    /// JSON Lines
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Base level, then noisy-crate caps, then per-target overrides.
pub fn build_env_filter(
    level: &str,
    target_levels: &HashMap<String, String>,
) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];

    let noisy: &[(&str, &str)] = &[("sqlparser", "warn"), ("tracing", "warn")];
    for (target, lvl) in noisy {
        directives.push(format!("{}={}", target, lvl));
    }

    let mut overrides: Vec<_> = target_levels.iter().collect();
    overrides.sort();
    for (target, lvl) in overrides {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Installs the global subscriber.
pub fn init_logging(
    level: &str,
    format: &str,
    target_levels: &HashMap<String, String>,
) -> anyhow::Result<()> {
    tracing_log::LogTracer::init().ok(); // ok() in case already initialized

    let filter = build_env_filter(level, target_levels)?;
    let layer = match LogFormat::parse(format) {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::trace!("Logging initialized: level={}, format={}", level, format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("jsonl"), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Compact);
    }

    #[test]
    fn test_filter_accepts_overrides() {
        let mut targets = HashMap::new();
        targets.insert("shardgate_schema".to_string(), "debug".to_string());
        assert!(build_env_filter("info", &targets).is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        assert!(build_env_filter("info", &HashMap::from([("a".to_string(), "loud".to_string())])).is_err());
    }
}
