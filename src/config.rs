//! Clinic configuration
//!
//! Settings are read from a JSON file. Missing fields fall back to their
//! defaults, so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::dates::DEFAULT_DATE_FORMAT;
use crate::error::{ClinicError, Result};
use crate::types::DEFAULT_CURRENCY_SYMBOL;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Pre-populate the registry with sample doctors, patients and records
    pub seed_sample_data: bool,
    /// `chrono` format used to read dates typed by the operator
    pub date_format: String,
    /// Prefix for bill amounts
    pub currency_symbol: String,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl ClinicConfig {
    pub fn with_sample_data(mut self, enabled: bool) -> Self {
        self.seed_sample_data = enabled;
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log.level = level.into();
        self
    }

    /// Default location: `<config dir>/octofhir-clinic/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("octofhir-clinic").join("config.json"))
    }

    /// Validate all settings
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(ClinicError::configuration("Date format cannot be empty"));
        }

        // The format must be able to read back a date it wrote
        let probe = chrono::NaiveDate::from_ymd_opt(2000, 12, 31)
            .ok_or_else(|| ClinicError::configuration("Invalid probe date"))?;
        let mut rendered = String::new();
        write!(rendered, "{}", probe.format(&self.date_format)).map_err(|_| {
            ClinicError::configuration(format!("Invalid date format: {}", self.date_format))
        })?;
        if chrono::NaiveDate::parse_from_str(&rendered, &self.date_format) != Ok(probe) {
            return Err(ClinicError::configuration(format!(
                "Date format '{}' cannot round-trip a calendar date",
                self.date_format
            )));
        }

        if !LOG_LEVELS.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ClinicError::configuration(format!(
                "Unknown log level: {}",
                self.log.level
            )));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClinicError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: ClinicConfig = serde_json::from_str(&content).map_err(|e| {
            ClinicError::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// An explicit path must exist. Without one, the default path is used
    /// when present, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.is_file() => {
                tracing::debug!("Loading config from {}", default.display());
                Self::load_from_file(&default)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClinicConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.seed_sample_data);
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_config_validation() {
        assert!(ClinicConfig::default().with_date_format("").validate().is_err());
        assert!(ClinicConfig::default().with_date_format("%H:%M").validate().is_err());
        assert!(ClinicConfig::default().with_date_format("%d.%m.%Y").validate().is_ok());
        assert!(ClinicConfig::default().with_log_level("loud").validate().is_err());
        assert!(ClinicConfig::default().with_log_level("DEBUG").validate().is_ok());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("clinic").join("config.json");

        let config = ClinicConfig::default()
            .with_sample_data(false)
            .with_currency_symbol("€");
        config.save_to_file(&config_path).unwrap();

        let loaded = ClinicConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "seed_sample_data": false }"#).unwrap();

        let loaded = ClinicConfig::load_from_file(&config_path).unwrap();
        assert!(!loaded.seed_sample_data);
        assert_eq!(loaded.log, LogConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.json");
        let err = ClinicConfig::load_or_default(Some(&missing)).unwrap_err();
        assert_eq!(err.category(), "configuration");
    }
}
