//! # nslog Core
//!
//! Hierarchical, namespace-based loggers with cascading enablement.
//!
//! This crate provides:
//!
//! - **Registry**: one logger per dot-delimited namespace, ancestors created
//!   on demand, all rooted at a single `global` logger
//! - **Loggers**: enable/disable cascading to descendants, per-logger level
//!   thresholds inherited at creation time
//! - **Emitter**: timestamp/namespace/level prefixes and optional call-site
//!   suffixes, written to an injected sink
//! - **Configuration**: layered YAML/environment configuration
//! - **Diagnostics**: a `tracing` subscriber for the library's own activity
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use nslog_core::{sink::MemorySink, Registry};
//! use nslog_types::Options;
//!
//! let sink = Arc::new(MemorySink::new());
//! let registry = Registry::builder()
//!     .sink(sink.clone())
//!     .options(Options { show_timestamp: false, ..Options::default() })
//!     .build();
//!
//! let button = registry.get_logger("app.ui.button");
//! registry.get_logger("app").set_level("info");
//!
//! nslog_core::info!(button, "clicked {} times", 3);
//! nslog_core::debug!(button, "still shown: levels are inherited only at creation");
//!
//! assert_eq!(sink.lines()[0], "app.ui.button - INFO - clicked 3 times");
//! assert_eq!(sink.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod diag;
pub mod emitter;
pub mod logger;
mod macros;
pub mod registry;
pub mod sink;
pub mod state;
pub mod term;
pub mod time;
pub mod util;

// Re-export commonly used items
pub use config::ConfigLoader;
pub use emitter::{Emitter, LocationCallSite, Record};
pub use logger::Logger;
pub use nslog_types::{Level, LoggingConfig, Namespace, NslogError, Options, Result};
pub use registry::{Registry, RegistryBuilder};
pub use state::{configure, get_logger, global};

/// nslog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
