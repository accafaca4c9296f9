//! Configuration loading and typed config structures for the habitat world.
//!
//! The configuration lives in `habitat-config.yaml`. Every field has a
//! default, so an empty document is a valid configuration.

use std::path::Path;

use serde::Deserialize;

use crate::patch::INITIAL_SPECIES_POPULATION;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "HABITAT_LOG_LEVEL";

/// Top-level habitat configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HabitatConfig {
    /// World-level settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Species population defaults.
    #[serde(default)]
    pub population: PopulationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HabitatConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `HABITAT_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable world name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Patch selected as current once the starting map is built.
    #[serde(default)]
    pub starting_patch: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            starting_patch: 0,
        }
    }
}

/// Population configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulationConfig {
    /// Population given to seed species in the starting map.
    #[serde(default = "default_initial_species_population")]
    pub initial_species_population: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_species_population: default_initial_species_population(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `HABITAT_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_level_override(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// Replace the level when an override value is present.
    pub fn apply_level_override(&mut self, value: Option<String>) {
        if let Some(val) = value {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_world_name() -> String {
    "Primordial Sea".to_owned()
}

const fn default_initial_species_population() -> u32 {
    INITIAL_SPECIES_POPULATION
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = HabitatConfig::parse("{}");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.world.name, "Primordial Sea");
        assert_eq!(config.world.starting_patch, 0);
        assert_eq!(config.population.initial_species_population, 100);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let yaml = "
world:
  name: Test Ocean
  starting_patch: 2
population:
  initial_species_population: 250
";
        let config = HabitatConfig::parse(yaml).unwrap_or_default();
        assert_eq!(config.world.name, "Test Ocean");
        assert_eq!(config.world.starting_patch, 2);
        assert_eq!(config.population.initial_species_population, 250);
    }

    #[test]
    fn log_level_defaults_to_info() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");

        let mut logging = LoggingConfig::default();
        logging.apply_level_override(None);
        assert_eq!(logging.level, "info");
    }

    #[test]
    fn log_level_override_replaces_yaml_value() {
        let config = HabitatConfig::parse("logging:\n  level: warn\n").unwrap_or_default();
        let mut logging = config.logging;
        logging.apply_level_override(Some("trace".to_owned()));
        assert_eq!(logging.level, "trace");
    }

    #[test]
    fn env_override_only_applies_when_set() {
        let mut logging = LoggingConfig::default();
        logging.apply_env_overrides();
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(val) => assert_eq!(logging.level, val),
            Err(_) => assert_eq!(logging.level, "info"),
        }
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = HabitatConfig::parse("world: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = HabitatConfig::from_file(Path::new("/nonexistent/habitat-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
