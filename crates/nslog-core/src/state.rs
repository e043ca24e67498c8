//! The process-wide registry.
//!
//! Libraries and applications that don't want to pass a [`Registry`]
//! around share this one. It is created on first use and lives for the
//! rest of the process; tests should build their own registries instead.

use crate::logger::Logger;
use crate::registry::Registry;
use nslog_types::{LoggingConfig, Options, Result};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Get a logger from the process-wide registry.
pub fn get_logger(namespace: &str) -> Logger {
    GLOBAL.get_logger(namespace)
}

/// Replace the options of the process-wide registry.
pub fn configure(options: Options) -> Result<()> {
    GLOBAL.configure(options)
}

/// Apply a complete configuration to the process-wide registry.
pub fn apply(config: &LoggingConfig) -> Result<()> {
    GLOBAL.apply(config)
}
