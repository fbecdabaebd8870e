//! Runtime helpers shared across binaries.
//!
//! Centralizes environment configuration and logging setup so CLIs read the
//! same variables instead of re-implementing them. Command-line flags always
//! override what is read here.

use anyhow::{Result, bail};
use std::env;
use tracing_subscriber::EnvFilter;

/// Default output format for `skill-report` (`text` or `json`).
pub const FORMAT_ENV: &str = "SKILLMATCH_FORMAT";
/// Log filter directive; falls back to `RUST_LOG`, then `warn`.
pub const LOG_ENV: &str = "SKILLMATCH_LOG";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown format '{other}' (expected text|json)"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Output format requested through the environment, if any.
///
/// Unset or blank means "not configured"; an unrecognized value is an error
/// so typos don't silently change the output shape.
pub fn format_from_env() -> Result<Option<OutputFormat>> {
    match env::var(FORMAT_ENV) {
        Ok(raw) if !raw.trim().is_empty() => OutputFormat::parse(&raw).map(Some),
        _ => Ok(None),
    }
}

fn log_filter() -> EnvFilter {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the stderr log subscriber; stdout stays reserved for output.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(" text\n").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn format_names_round_trip() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::parse(format.as_str()).unwrap(), format);
        }
    }
}
