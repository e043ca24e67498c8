//! CLI command implementations.

pub mod check;
pub mod emit;
pub mod levels;
pub mod tree;
pub mod version;

use anyhow::{Context, Result};
use nslog_core::Registry;
use nslog_types::LoggingConfig;

/// Apply a configuration to the process-wide registry.
pub(crate) fn configured(config: &LoggingConfig) -> Result<&'static Registry> {
    nslog_core::state::apply(config).context("Failed to apply logging configuration")?;
    Ok(nslog_core::global())
}
