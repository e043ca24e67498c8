//! Diagnostics for nslog itself.
//!
//! The library reports its own activity (logger creation, configuration
//! loading) through `tracing`. These helpers install a formatting
//! subscriber for binaries that have none.

use nslog_types::{NslogError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "nslog=info";

/// Install a subscriber filtered by `RUST_LOG`, or [`DEFAULT_DIRECTIVE`].
pub fn init_default() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    init(filter)
}

/// Install a subscriber with an explicit filter directive.
pub fn init_with_filter(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| NslogError::Config(format!("Invalid filter '{}': {}", directive, e)))?;
    init(filter)
}

fn init(filter: EnvFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| NslogError::Other(format!("Failed to install diagnostics subscriber: {}", e)))
}
