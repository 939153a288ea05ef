//! Configuration management and validation.
//!
//! Provides the aggregation parameters (year bounds, ranking limits) and
//! logging settings, loaded in layers: built-in defaults, an optional TOML
//! file, then `UFO_*` environment variables. CLI flags are applied last by
//! the command layer.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_MAX_YEAR_EXCLUSIVE,
    DEFAULT_MIN_YEAR_EXCLUSIVE, DEFAULT_TOP_CITIES, DEFAULT_TOP_LOCATIONS, ENV_PREFIX,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aggregation parameters
    pub aggregation: AggregationConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Parameters for the yearly, location and extremal aggregations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Years must be strictly greater than this to count
    pub min_year_exclusive: i32,

    /// Years must be strictly less than this to enter the yearly series
    pub max_year_exclusive: i32,

    /// Number of countries kept in the location breakdown
    pub top_locations: usize,

    /// Number of cities kept per country
    pub top_cities: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            min_year_exclusive: DEFAULT_MIN_YEAR_EXCLUSIVE,
            max_year_exclusive: DEFAULT_MAX_YEAR_EXCLUSIVE,
            top_locations: DEFAULT_TOP_LOCATIONS,
            top_cities: DEFAULT_TOP_CITIES,
        }
    }
}

impl AggregationConfig {
    /// Set the exclusive year bounds
    pub fn with_year_bounds(mut self, min_exclusive: i32, max_exclusive: i32) -> Self {
        self.min_year_exclusive = min_exclusive;
        self.max_year_exclusive = max_exclusive;
        self
    }

    /// Set the number of countries kept
    pub fn with_top_locations(mut self, top_locations: usize) -> Self {
        self.top_locations = top_locations;
        self
    }

    /// Set the number of cities kept per country
    pub fn with_top_cities(mut self, top_cities: usize) -> Self {
        self.top_cities = top_cities;
        self
    }

    /// Year accepted by the yearly series (both bounds)
    pub fn accepts_series_year(&self, year: i32) -> bool {
        year > self.min_year_exclusive && year < self.max_year_exclusive
    }

    /// Year accepted by the extremal search (lower bound only)
    pub fn accepts_extremal_year(&self, year: i32) -> bool {
        year > self.min_year_exclusive
    }

    /// Validate the aggregation parameters
    pub fn validate(&self) -> Result<()> {
        if self.min_year_exclusive >= self.max_year_exclusive {
            return Err(Error::configuration(format!(
                "min_year_exclusive ({}) must be less than max_year_exclusive ({})",
                self.min_year_exclusive, self.max_year_exclusive
            )));
        }
        if self.top_locations == 0 {
            return Err(Error::configuration("top_locations must be at least 1"));
        }
        if self.top_cities == 0 {
            return Err(Error::configuration("top_cities must be at least 1"));
        }
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Default config file location (~/.config/ufo-processor/config.toml)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid config file: {}", e)))
    }

    /// Load with layered configuration (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply `UFO_*` overrides using the supplied variable lookup
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = var("MIN_YEAR") {
            self.aggregation.min_year_exclusive = parse_env("MIN_YEAR", &value)?;
        }
        if let Some(value) = var("MAX_YEAR") {
            self.aggregation.max_year_exclusive = parse_env("MAX_YEAR", &value)?;
        }
        if let Some(value) = var("TOP_LOCATIONS") {
            self.aggregation.top_locations = parse_env("TOP_LOCATIONS", &value)?;
        }
        if let Some(value) = var("TOP_CITIES") {
            self.aggregation.top_cities = parse_env("TOP_CITIES", &value)?;
        }
        if let Some(value) = var("LOG_LEVEL") {
            self.logging.level = value;
        }
        Ok(())
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.aggregation.validate()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        Error::configuration(format!(
            "Invalid value for {}{}: '{}'",
            ENV_PREFIX, name, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.aggregation.min_year_exclusive, 1900);
        assert_eq!(config.aggregation.max_year_exclusive, 2025);
        assert_eq!(config.aggregation.top_locations, 5);
        assert_eq!(config.aggregation.top_cities, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_year_predicates() {
        let config = AggregationConfig::default();
        assert!(!config.accepts_series_year(1900));
        assert!(config.accepts_series_year(1901));
        assert!(config.accepts_series_year(2024));
        assert!(!config.accepts_series_year(2025));

        assert!(!config.accepts_extremal_year(1900));
        assert!(config.accepts_extremal_year(2025));
        assert!(config.accepts_extremal_year(2100));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let inverted = AggregationConfig::default().with_year_bounds(2000, 1990);
        assert!(matches!(
            inverted.validate(),
            Err(Error::Configuration { .. })
        ));

        let equal = AggregationConfig::default().with_year_bounds(2000, 2000);
        assert!(equal.validate().is_err());

        assert!(AggregationConfig::default().with_top_locations(0).validate().is_err());
        assert!(AggregationConfig::default().with_top_cities(0).validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
[aggregation]
max_year_exclusive = 2030
top_cities = 3
"#,
        )
        .unwrap();

        assert_eq!(config.aggregation.min_year_exclusive, 1900);
        assert_eq!(config.aggregation.max_year_exclusive, 2030);
        assert_eq!(config.aggregation.top_locations, 5);
        assert_eq!(config.aggregation.top_cities, 3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[aggregation\nmin_year_exclusive = ");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.aggregation, AggregationConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::from_file(Path::new("/nonexistent/ufo/config.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("UFO_MIN_YEAR", "1950"),
            ("UFO_MAX_YEAR", "2000"),
            ("UFO_TOP_LOCATIONS", "3"),
            ("UFO_LOG_LEVEL", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.aggregation.min_year_exclusive, 1950);
        assert_eq!(config.aggregation.max_year_exclusive, 2000);
        assert_eq!(config.aggregation.top_locations, 3);
        assert_eq!(config.aggregation.top_cities, 5);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = Config::default();
        let result = config.apply_env_overrides_from(|key| {
            (key == "UFO_TOP_CITIES").then(|| "lots".to_string())
        });
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
