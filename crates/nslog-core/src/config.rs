//! Layered configuration loading.
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`NSLOG_*`)
//! 2. Programmatically set values
//! 3. Values loaded from a YAML file
//! 4. Default values
//!
//! Layers are deep-merged into a single document which deserializes into a
//! [`LoggingConfig`].
//!
//! ## Example
//!
//! ```
//! use nslog_core::config::ConfigLoader;
//! use nslog_types::Level;
//!
//! let mut loader = ConfigLoader::new()
//!     .with_env_vars([("NSLOG_SHOW_TIMESTAMP", "false"), ("NSLOG_ENABLE", "app")]);
//! loader.set("options.color", true).unwrap();
//!
//! let config = loader.build().unwrap();
//! assert!(config.options.color);
//! assert!(!config.options.show_timestamp);
//! assert_eq!(config.loggers["app"].enabled, Some(true));
//! ```

use crate::util::data::{deep_merge, get_path};
use nslog_types::{bail, Level, LoggerSettings, LoggingConfig, NslogError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Prefix of recognised environment variables.
pub const ENV_PREFIX: &str = "NSLOG_";

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values set programmatically
    Set = 2,
    /// Values from environment variables
    Environment = 3,
}

impl ConfigLayer {
    /// Layers from lowest to highest priority.
    pub const ASCENDING: [ConfigLayer; 4] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Set,
        ConfigLayer::Environment,
    ];
}

/// Multi-layer configuration loader.
#[derive(Clone, Debug)]
pub struct ConfigLoader {
    layers: HashMap<ConfigLayer, Value>,
}

impl ConfigLoader {
    /// A loader holding only the default values.
    pub fn new() -> Self {
        let mut layers = HashMap::new();
        // LoggingConfig is plain data; serializing it cannot fail.
        let defaults = serde_json::to_value(LoggingConfig::default()).unwrap_or(Value::Null);
        layers.insert(ConfigLayer::Default, defaults);

        Self { layers }
    }

    /// Load a YAML file on top of the defaults.
    ///
    /// A missing file is not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = crate::util::expand_path(path);
        let mut loader = Self::new();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| NslogError::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

            let value: Value = serde_yaml::from_str(&content)
                .map_err(|e| NslogError::Config(format!("Failed to parse config {:?}: {}", path, e)))?;

            // An empty document parses as null
            if !value.is_null() {
                loader.layers.insert(ConfigLayer::Loaded, value);
            }
            debug!(path = ?path, "loaded logging configuration");
        } else {
            debug!(path = ?path, "no logging configuration file");
        }

        Ok(loader)
    }

    /// Load from [`ConfigLoader::default_path`], or defaults only if no
    /// configuration directory is known.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::new()),
        }
    }

    /// The default configuration file location (`<config dir>/nslog/config.yml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nslog").join("config.yml"))
    }

    /// Apply the process environment as the highest-priority layer.
    pub fn with_environment(self) -> Self {
        self.with_env_vars(std::env::vars())
    }

    /// Apply the given variables as the environment layer.
    ///
    /// Recognised variables: `NSLOG_DELIMITER`, `NSLOG_ROOT`,
    /// `NSLOG_SHOW_NAMESPACE`, `NSLOG_SHOW_TIMESTAMP`, `NSLOG_SHOW_CALL_SITE`,
    /// `NSLOG_COLOR`, `NSLOG_LEVEL` (root logger level), and `NSLOG_ENABLE` /
    /// `NSLOG_DISABLE` (comma-separated namespaces). Unusable values are
    /// skipped with a warning.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Map::new();
        let mut loggers = Map::new();

        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref().trim();

            match name {
                "DELIMITER" => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => {
                            options.insert("delimiter".into(), Value::String(c.to_string()));
                        }
                        _ => warn!("ignoring {}DELIMITER={:?}: expected one character", ENV_PREFIX, value),
                    }
                }
                "ROOT" => {
                    options.insert("root".into(), Value::String(value.to_string()));
                }
                "SHOW_NAMESPACE" | "SHOW_TIMESTAMP" | "SHOW_CALL_SITE" | "COLOR" => {
                    match parse_flag(value) {
                        Some(flag) => {
                            options.insert(name.to_ascii_lowercase(), Value::Bool(flag));
                        }
                        None => warn!("ignoring {}{}={:?}: expected a boolean", ENV_PREFIX, name, value),
                    }
                }
                "LEVEL" => match Level::lookup(value) {
                    Some(level) => {
                        merge_logger(&mut loggers, "", "level", Value::String(level.name().into()));
                    }
                    None => warn!("ignoring {}LEVEL={:?}: unknown level", ENV_PREFIX, value),
                },
                "ENABLE" | "DISABLE" => {
                    let enabled = name == "ENABLE";
                    for namespace in value.split(',').map(str::trim).filter(|ns| !ns.is_empty()) {
                        merge_logger(&mut loggers, namespace, "enabled", Value::Bool(enabled));
                    }
                }
                _ => debug!("ignoring unrecognised variable {}{}", ENV_PREFIX, name),
            }
        }

        let mut layer = Map::new();
        if !options.is_empty() {
            layer.insert("options".into(), Value::Object(options));
        }
        if !loggers.is_empty() {
            layer.insert("loggers".into(), Value::Object(loggers));
        }
        if layer.is_empty() {
            self.layers.remove(&ConfigLayer::Environment);
        } else {
            self.layers.insert(ConfigLayer::Environment, Value::Object(layer));
        }
        self
    }

    /// Get a configuration value by dotted key, respecting layer priority.
    ///
    /// Returns None if the key doesn't exist in any layer.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        for layer in ConfigLayer::ASCENDING.iter().rev() {
            if let Some(value) = self.layers.get(layer).and_then(|data| get_path(data, key)) {
                if let Ok(typed) = serde_json::from_value(value.clone()) {
                    return Some(typed);
                }
            }
        }
        None
    }

    /// Set a configuration value programmatically by dotted key.
    ///
    /// Logger namespaces contain dots themselves; use
    /// [`ConfigLoader::set_logger`] for those.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert_with(|| Value::Object(Map::new()));
        set_value_at_path(layer, key, value)
    }

    /// Set the settings of one logger programmatically.
    pub fn set_logger(&mut self, namespace: &str, settings: &LoggerSettings) -> Result<()> {
        let settings = serde_json::to_value(settings)?;
        let layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert_with(|| Value::Object(Map::new()));

        let mut loggers = Map::new();
        loggers.insert(namespace.to_string(), settings);
        let mut overlay = Map::new();
        overlay.insert("loggers".into(), Value::Object(loggers));

        *layer = deep_merge(std::mem::take(layer), Value::Object(overlay));
        Ok(())
    }

    /// Merge every layer into one document.
    pub fn merged(&self) -> Value {
        ConfigLayer::ASCENDING
            .iter()
            .filter_map(|layer| self.layers.get(layer))
            .fold(Value::Object(Map::new()), |merged, data| {
                deep_merge(merged, data.clone())
            })
    }

    /// Resolve the final configuration.
    ///
    /// # Errors
    ///
    /// Fails when the merged document does not describe a valid
    /// configuration, e.g. an unknown level name or unusable namespace rules.
    pub fn build(&self) -> Result<LoggingConfig> {
        let config: LoggingConfig = serde_json::from_value(self.merged())
            .map_err(|e| NslogError::Config(format!("Failed to parse logging config: {}", e)))?;
        config.options.rules()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn merge_logger(loggers: &mut Map<String, Value>, namespace: &str, field: &str, value: Value) {
    let entry = loggers
        .entry(namespace.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(settings) = entry {
        settings.insert(field.to_string(), value);
    }
}

fn set_value_at_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
    let parts: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        bail!(Config, "Empty path");
    };
    if parts.iter().any(|part| part.is_empty()) {
        bail!(Config, "Invalid config key '{}'", path);
    }

    // Navigate to parent, creating intermediate objects as needed
    let mut current = data;
    for part in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = match current {
            Value::Object(map) => map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            _ => unreachable!("replaced with an object above"),
        };
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Value::Object(map) = current {
        map.insert(last.to_string(), value);
    }
    Ok(())
}
