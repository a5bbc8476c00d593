//! Tracing subscriber setup
//!
//! Log output goes to stderr so the interactive menu owns stdout.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{ClinicError, Result};

/// Build the filter: `RUST_LOG` wins, then `verbose`, then the configured level
pub fn build_filter(config: &LogConfig, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::try_new(level.to_lowercase())
        .map_err(|e| ClinicError::configuration(format!("Invalid log level '{level}': {e}")))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LogConfig, verbose: bool) -> Result<()> {
    let filter = build_filter(config, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ClinicError::configuration(format!("Failed to initialise logging: {e}")))
}
