//! Error types for nslog operations.
//!
//! The logging path itself never fails; these errors only surface from
//! configuration parsing and loading.

use thiserror::Error;

/// The main error type for nslog operations.
#[derive(Error, Debug)]
pub enum NslogError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A level name that is not part of the level table
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON conversion error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for nslog operations.
pub type Result<T> = std::result::Result<T, NslogError>;

/// Helper macro to bail out with an NslogError
///
/// # Example
///
/// ```ignore
/// if path.is_empty() {
///     bail!(Config, "no configuration path given");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::NslogError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::NslogError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::NslogError::Other($msg.to_string()))
    };
}
