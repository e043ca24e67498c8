//! Configuration types and structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::errors::Result;
use crate::level::Level;
use crate::namespace::{NamespaceRules, DEFAULT_DELIMITER, DEFAULT_ROOT};

/// Global rendering and namespace options.
///
/// Only `delimiter` and `root` affect the registry; the remaining fields
/// are read by the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Namespace segment delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Name of the root segment
    #[serde(default = "default_root")]
    pub root: String,
    /// Include the namespace in rendered lines
    #[serde(default = "default_true")]
    pub show_namespace: bool,
    /// Include a timestamp in rendered lines
    #[serde(default = "default_true")]
    pub show_timestamp: bool,
    /// Append the call site to rendered lines
    #[serde(default)]
    pub show_call_site: bool,
    /// Colour the level label
    #[serde(default)]
    pub color: bool,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            root: default_root(),
            show_namespace: true,
            show_timestamp: true,
            show_call_site: false,
            color: false,
        }
    }
}

impl Options {
    /// Validate the namespace-related fields.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a whitespace delimiter or an
    /// unusable root segment.
    pub fn rules(&self) -> Result<NamespaceRules> {
        NamespaceRules::new(self.delimiter, self.root.clone())
    }
}

/// Declarative state for a single logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Enable (cascading) or disable (cascading) the logger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Threshold level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
}

/// Complete logging configuration: options plus per-namespace settings.
///
/// Loggers are applied in declaration order, so a parent listed before
/// its children lets the children override the cascaded state.
///
/// # Example
///
/// ```
/// use nslog_types::{Level, LoggingConfig};
///
/// let config = LoggingConfig::from_yaml_str(r#"
/// options:
///   show_timestamp: false
/// loggers:
///   app:
///     enabled: true
///     level: info
///   app.db:
///     level: debug
/// "#).unwrap();
///
/// assert!(!config.options.show_timestamp);
/// assert_eq!(config.loggers["app.db"].level, Some(Level::Debug));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Rendering and namespace options
    #[serde(default)]
    pub options: Options,
    /// Per-namespace settings, in declaration order
    #[serde(default)]
    pub loggers: IndexMap<String, LoggerSettings>,
}

impl LoggingConfig {
    /// Parse a configuration document from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: LoggingConfig = serde_yaml::from_str(content)?;
        config.options.rules()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NslogError;

    #[test]
    fn test_options_defaults() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.delimiter, '.');
        assert_eq!(options.root, "global");
        assert!(options.show_namespace);
        assert!(options.show_timestamp);
        assert!(!options.show_call_site);
    }

    #[test]
    fn test_loggers_keep_declaration_order() {
        let config = LoggingConfig::from_yaml_str(
            "loggers:\n  zeta: {enabled: true}\n  alpha: {level: error}\n  mid: {}\n",
        )
        .unwrap();
        let keys: Vec<&str> = config.loggers.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(config.loggers["mid"], LoggerSettings::default());
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = LoggingConfig::from_yaml_str("loggers:\n  app: {level: loud}\n").unwrap_err();
        assert!(matches!(err, NslogError::Yaml(_)));
    }

    #[test]
    fn test_rejects_bad_rules() {
        let err = LoggingConfig::from_yaml_str("options:\n  root: \"a.b\"\n").unwrap_err();
        assert!(matches!(err, NslogError::Config(_)));
    }
}
