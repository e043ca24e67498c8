//! The level table.
//!
//! Six fixed levels with strictly increasing severities. Level names are
//! matched case-insensitively; `warn` is accepted as an alias of `warning`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::errors::{NslogError, Result};

/// Log level enumeration, ordered from most verbose to most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Catch-all minimum; a logger at this level lets everything through
    #[default]
    All,
    /// Debug messages
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warning,
    /// Errors
    Error,
    /// Unrecoverable failures
    Fatal,
}

impl Level {
    /// Every level in ascending order of severity.
    pub const ALL_LEVELS: [Level; 6] = [
        Level::All,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric severity used for filter comparisons.
    pub const fn severity(self) -> u8 {
        match self {
            Level::All => 0,
            Level::Debug => 10,
            Level::Info => 20,
            Level::Warning => 30,
            Level::Error => 40,
            Level::Fatal => 50,
        }
    }

    /// Canonical lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Level::All => "all",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Upper-case label used in rendered prefixes.
    pub const fn label(self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Look up a level by name, ignoring case and surrounding whitespace.
    ///
    /// Unknown names yield `None`; this is the lookup the logging path uses,
    /// since an unknown name there is never an error.
    pub fn lookup(name: &str) -> Option<Level> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Level::All),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warning" | "warn" => Some(Level::Warning),
            "error" => Some(Level::Error),
            "fatal" => Some(Level::Fatal),
            _ => None,
        }
    }

    /// Whether a message at `self` passes a threshold of `threshold`.
    pub const fn passes(self, threshold: Level) -> bool {
        self.severity() >= threshold.severity()
    }
}

/// Severity of a level name, or `None` for names outside the table.
pub fn severity_of(name: &str) -> Option<u8> {
    Level::lookup(name).map(Level::severity)
}

impl FromStr for Level {
    type Err = NslogError;

    fn from_str(s: &str) -> Result<Self> {
        Level::lookup(s).ok_or_else(|| NslogError::InvalidLevel(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
