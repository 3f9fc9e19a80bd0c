use crate::error::{AtlasError, Result};
use crate::fixtures;
use crate::models::search::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default delay before a search stops loading, in milliseconds
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the dashboard
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub initial_state: ConfigValue<String>,
    pub search_delay_ms: ConfigValue<u64>,
    pub history_capacity: ConfigValue<usize>,
    pub sidebar_open: ConfigValue<bool>,
    pub analytics_open: ConfigValue<bool>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            initial_state: ConfigValue::new(
                fixtures::DEFAULT_STATE.to_string(),
                ConfigSource::Default,
            ),
            search_delay_ms: ConfigValue::new(DEFAULT_SEARCH_DELAY_MS, ConfigSource::Default),
            history_capacity: ConfigValue::new(DEFAULT_HISTORY_CAPACITY, ConfigSource::Default),
            sidebar_open: ConfigValue::new(true, ConfigSource::Default),
            analytics_open: ConfigValue::new(false, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| AtlasError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| AtlasError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(initial_state) = file_config.initial_state {
            self.initial_state.update(initial_state, ConfigSource::File);
        }

        if let Some(delay) = file_config.search_delay_ms {
            self.search_delay_ms.update(delay, ConfigSource::File);
        }

        if let Some(capacity) = file_config.history_capacity {
            self.history_capacity.update(capacity, ConfigSource::File);
        }

        if let Some(open) = file_config.sidebar_open {
            self.sidebar_open.update(open, ConfigSource::File);
        }

        if let Some(open) = file_config.analytics_open {
            self.analytics_open.update(open, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FRA_ATLAS_INITIAL_STATE
        if let Ok(state) = env::var("FRA_ATLAS_INITIAL_STATE") {
            self.initial_state.update(state, ConfigSource::Environment);
        }

        // FRA_ATLAS_SEARCH_DELAY_MS
        if let Ok(delay_str) = env::var("FRA_ATLAS_SEARCH_DELAY_MS") {
            match delay_str.parse::<u64>() {
                Ok(delay) => self.search_delay_ms.update(delay, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FRA_ATLAS_SEARCH_DELAY_MS value '{}': expected milliseconds",
                    delay_str
                ),
            }
        }

        // FRA_ATLAS_HISTORY_CAPACITY
        if let Ok(capacity_str) = env::var("FRA_ATLAS_HISTORY_CAPACITY") {
            match capacity_str.parse::<usize>() {
                Ok(capacity) => self.history_capacity.update(capacity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FRA_ATLAS_HISTORY_CAPACITY value '{}': expected a positive integer",
                    capacity_str
                ),
            }
        }

        // FRA_ATLAS_SIDEBAR_OPEN
        if let Ok(open_str) = env::var("FRA_ATLAS_SIDEBAR_OPEN") {
            match parse_bool(&open_str) {
                Ok(open) => self.sidebar_open.update(open, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FRA_ATLAS_SIDEBAR_OPEN value '{}': expected true or false",
                    open_str
                ),
            }
        }

        // FRA_ATLAS_ANALYTICS_OPEN
        if let Ok(open_str) = env::var("FRA_ATLAS_ANALYTICS_OPEN") {
            match parse_bool(&open_str) {
                Ok(open) => self.analytics_open.update(open, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FRA_ATLAS_ANALYTICS_OPEN value '{}': expected true or false",
                    open_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(initial_state) = overrides.initial_state {
            self.initial_state.update(initial_state, ConfigSource::Cli);
        }

        if let Some(delay) = overrides.search_delay_ms {
            self.search_delay_ms.update(delay, ConfigSource::Cli);
        }

        if let Some(capacity) = overrides.history_capacity {
            self.history_capacity.update(capacity, ConfigSource::Cli);
        }

        if let Some(open) = overrides.sidebar_open {
            self.sidebar_open.update(open, ConfigSource::Cli);
        }

        if let Some(open) = overrides.analytics_open {
            self.analytics_open.update(open, ConfigSource::Cli);
        }
    }

    /// Validate the merged values
    pub fn resolve(&self) -> Result<DashboardConfig> {
        if fixtures::find_state(&self.initial_state.value).is_none() {
            let known: Vec<&str> = fixtures::STATES.iter().map(|s| s.id).collect();
            return Err(AtlasError::ConfigInvalid {
                key: "initial_state".to_string(),
                reason: format!(
                    "Unknown state '{}'. Use one of: {}",
                    self.initial_state.value,
                    known.join(", ")
                ),
            });
        }

        if self.history_capacity.value == 0 {
            return Err(AtlasError::ConfigInvalid {
                key: "history_capacity".to_string(),
                reason: "History capacity must be at least 1".to_string(),
            });
        }

        Ok(DashboardConfig {
            initial_state: self.initial_state.value.clone(),
            search_delay_ms: self.search_delay_ms.value,
            history_capacity: self.history_capacity.value,
            sidebar_open: self.sidebar_open.value,
            analytics_open: self.analytics_open.value,
        })
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "initial_state".to_string(),
            (self.initial_state.value.clone(), self.initial_state.source),
        );

        map.insert(
            "search_delay_ms".to_string(),
            (self.search_delay_ms.value.to_string(), self.search_delay_ms.source),
        );

        map.insert(
            "history_capacity".to_string(),
            (self.history_capacity.value.to_string(), self.history_capacity.source),
        );

        map.insert(
            "sidebar_open".to_string(),
            (self.sidebar_open.value.to_string(), self.sidebar_open.source),
        );

        map.insert(
            "analytics_open".to_string(),
            (self.analytics_open.value.to_string(), self.analytics_open.source),
        );

        map
    }
}

/// Validated settings used to build a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub initial_state: String,
    pub search_delay_ms: u64,
    pub history_capacity: usize,
    pub sidebar_open: bool,
    pub analytics_open: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_state: fixtures::DEFAULT_STATE.to_string(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            sidebar_open: true,
            analytics_open: false,
        }
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    initial_state: Option<String>,
    search_delay_ms: Option<u64>,
    history_capacity: Option<usize>,
    sidebar_open: Option<bool>,
    analytics_open: Option<bool>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub initial_state: Option<String>,
    pub search_delay_ms: Option<u64>,
    pub history_capacity: Option<usize>,
    pub sidebar_open: Option<bool>,
    pub analytics_open: Option<bool>,
}

/// Parse a boolean flag from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AtlasError::ConfigInvalid {
            key: "bool".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.initial_state.value, "madhya-pradesh");
        assert_eq!(config.initial_state.source, ConfigSource::Default);
        assert_eq!(config.search_delay_ms.value, 1000);
        assert_eq!(config.history_capacity.value, 5);
        assert_eq!(config.resolve().unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
initial_state = "odisha"
search_delay_ms = 250
history_capacity = 8
analytics_open = true
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.initial_state.value, "odisha");
        assert_eq!(config.initial_state.source, ConfigSource::File);
        assert_eq!(config.search_delay_ms.value, 250);
        assert_eq!(config.history_capacity.value, 8);
        assert!(config.analytics_open.value);
        assert_eq!(config.sidebar_open.source, ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            initial_state: Some("tripura".to_string()),
            search_delay_ms: Some(0),
            ..Default::default()
        };

        config.update_from_cli(overrides);

        assert_eq!(config.initial_state.value, "tripura");
        assert_eq!(config.initial_state.source, ConfigSource::Cli);
        assert_eq!(config.search_delay_ms.value, 0);
        assert_eq!(config.history_capacity.source, ConfigSource::Default);
    }

    #[test]
    fn test_resolve_rejects_unknown_state_and_zero_capacity() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            initial_state: Some("kerala".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            config.resolve(),
            Err(AtlasError::ConfigInvalid { ref key, .. }) if key == "initial_state"
        ));

        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            history_capacity: Some(0),
            ..Default::default()
        });
        assert!(matches!(
            config.resolve(),
            Err(AtlasError::ConfigInvalid { ref key, .. }) if key == "history_capacity"
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let map = LayeredConfig::with_defaults().to_inspection_map();
        assert_eq!(map.len(), 5);
        assert_eq!(
            map.get("search_delay_ms"),
            Some(&("1000".to_string(), ConfigSource::Default))
        );
    }
}
