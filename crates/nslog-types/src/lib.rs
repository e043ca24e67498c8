//! # nslog Types
//!
//! Core types, traits, and the level table shared across all nslog crates.
//!
//! This crate provides the vocabulary of the hierarchical logger:
//!
//! - The fixed, ordered level table used for filtering
//! - Normalized, dot-delimited logger namespaces
//! - Configuration types for rendering options and per-namespace settings
//! - The collaborator traits for sinks and call-site detection
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use nslog_types::{Level, Namespace, NamespaceRules};
//!
//! // Level names are case-insensitive
//! assert_eq!(Level::lookup("WARNING"), Some(Level::Warning));
//! assert_eq!(Level::lookup("bogus"), None);
//!
//! // Namespaces are always rooted at the global segment
//! let ns = Namespace::parse("app.ui.button", &NamespaceRules::default());
//! assert_eq!(ns.as_str(), "global.app.ui.button");
//! assert_eq!(ns.name(), "button");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod level;
pub mod namespace;
pub mod traits;

// Re-export common types for convenience
pub use config::{LoggerSettings, LoggingConfig, Options};
pub use errors::{NslogError, Result};
pub use level::{severity_of, Level};
pub use namespace::{Namespace, NamespaceRules};
pub use traits::{CallSiteStrategy, Sink};
