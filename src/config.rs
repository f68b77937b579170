//! Environment-driven configuration for the operator CLI.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

pub const OUTPUT_ENV: &str = "REGISTRY_ACCESS_OUTPUT";
pub const LOG_ENV: &str = "REGISTRY_ACCESS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") { OutputFormat::Json } else { OutputFormat::Table }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub output: OutputFormat,
    /// Filter used when RUST_LOG is unset.
    pub log_filter: String,
    /// Configured filter that failed to parse and was replaced by the default.
    pub rejected_log_filter: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { output: OutputFormat::Table, log_filter: DEFAULT_LOG_FILTER.to_string(), rejected_log_filter: None }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let output = lookup(OUTPUT_ENV).map(|v| OutputFormat::parse(&v)).unwrap_or_default();
        let configured = lookup(LOG_ENV).filter(|v| !v.trim().is_empty());
        let (log_filter, rejected_log_filter) = match configured {
            Some(v) if EnvFilter::try_new(&v).is_ok() => (v, None),
            Some(v) => (DEFAULT_LOG_FILTER.to_string(), Some(v)),
            None => (DEFAULT_LOG_FILTER.to_string(), None),
        };
        Self { output, log_filter, rejected_log_filter }
    }

    /// Install the global tracing subscriber. RUST_LOG wins over the configured filter;
    /// an unparsable filter from either source falls back to the default.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;
        if let Some(bad) = &self.rejected_log_filter {
            warn!(target: "registry_access::config", filter = ?bad, "ignoring unparsable {}; using '{}'", LOG_ENV, DEFAULT_LOG_FILTER);
        }
        Ok(())
    }
}
