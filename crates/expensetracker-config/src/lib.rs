//! Configuration management for expensetracker
//!
//! Loads and validates the YAML configuration used by the command-line
//! driver. Every field has a default, so an empty file is a valid config.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigErrorCode, ConfigErrorSeverity, ConfigResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ==================== Configuration Types ====================

/// Data file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Seed file with the transactions to load
    #[serde(default = "default_transactions_file")]
    pub transactions_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            transactions_file: default_transactions_file(),
        }
    }
}

fn default_transactions_file() -> PathBuf {
    PathBuf::from("transactions.yaml")
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol printed before amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: default_decimal_places(),
            thousands_separator: default_thousands_sep(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ",".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data file settings
    #[serde(default)]
    pub data: DataConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of {}", LOG_LEVELS.join(", ")),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        if self.data.transactions_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.transactions_file".to_string(),
                reason: "A transactions file path is required".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.transactions_file, PathBuf::from("transactions.yaml"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.currency.decimal_places, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("currency:\n  symbol: \"€\"\n").unwrap();
        assert_eq!(config.currency.symbol, "€");
        assert_eq!(config.currency.thousands_separator, ",");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_default_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.data.transactions_file, PathBuf::from("transactions.yaml"));
        assert_eq!(config.currency.decimal_places, 2);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_yaml("logging:\n  level: loud\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_invalid_decimal_places() {
        let err = Config::from_yaml("currency:\n  decimal_places: 11\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml("logging: [unclosed").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidYaml);
        assert_eq!(err.severity(), ConfigErrorSeverity::Error);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.yaml")).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::FileNotFound);
        assert_eq!(err.severity(), ConfigErrorSeverity::Warning);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data:\n  transactions_file: seed.yaml\nlogging:\n  level: debug").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data.transactions_file, PathBuf::from("seed.yaml"));
        assert_eq!(config.logging.level, "debug");
    }
}
