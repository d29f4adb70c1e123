//! Configuration management for tubedash
//!
//! This module provides TOML persistence for tick intervals, clock formats,
//! gauge dimensions and the optional simulation seed.

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// tubedash configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General display options
    #[serde(default)]
    pub general: GeneralConfig,
    /// Ring gauge dimensions
    #[serde(default)]
    pub gauge: GaugeConfig,
    /// Metrics simulation options
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// General display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Clock refresh interval in milliseconds
    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,
    /// Metrics refresh interval in milliseconds
    #[serde(default = "default_metrics_interval")]
    pub metrics_interval_ms: u64,
    /// strftime pattern for the time of day (`%X` is the locale's layout)
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// strftime pattern for the full date
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Locale for day and month names, e.g. `id_ID` (detected when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Ring gauge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Outer diameter of the ring
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    /// Width of the ring stroke
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

/// Simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed for reproducible runs (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default value functions
fn default_clock_interval() -> u64 {
    1000
}

fn default_metrics_interval() -> u64 {
    1400
}

fn default_time_format() -> String {
    "%X".to_string()
}

fn default_date_format() -> String {
    "%A, %-d %B %Y".to_string()
}

fn default_diameter() -> f64 {
    160.0
}

fn default_stroke_width() -> f64 {
    14.0
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval(),
            metrics_interval_ms: default_metrics_interval(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            locale: None,
        }
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            diameter: default_diameter(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl Config {
    /// Get the default configuration directory
    ///
    /// Returns `~/.config/tubedash` on Unix-like systems,
    /// or `%APPDATA%\tubedash` on Windows.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(windows) {
            std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        } else {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|_| PathBuf::from(".config"))
        };

        Ok(config_dir.join("tubedash"))
    }

    /// Load configuration from the default path
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_file = Self::default_path()?.join("config.toml");

        if !config_file.exists() {
            log::debug!("no config at {}, using defaults", config_file.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::default_path()?;
        std::fs::create_dir_all(&config_dir)?;
        self.save_to(&config_dir.join("config.toml"))
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Reject values the dashboard cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.general.clock_interval_ms == 0 {
            return Err(DashError::Config(
                "clock_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.general.metrics_interval_ms == 0 {
            return Err(DashError::Config(
                "metrics_interval_ms must be greater than zero".to_string(),
            ));
        }
        for pattern in [&self.general.time_format, &self.general.date_format] {
            let malformed = chrono::format::StrftimeItems::new(pattern)
                .any(|item| matches!(item, chrono::format::Item::Error));
            if malformed {
                return Err(DashError::Config(format!(
                    "invalid time/date format: {:?}",
                    pattern
                )));
            }
        }
        if let Some(tag) = &self.general.locale {
            if crate::clock::parse_locale(tag).is_none() {
                return Err(DashError::Config(format!("unknown locale: {:?}", tag)));
            }
        }
        crate::gauge::validate_dimensions(self.gauge.diameter, self.gauge.stroke_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.clock_interval_ms, 1000);
        assert_eq!(config.general.metrics_interval_ms, 1400);
        assert_eq!(config.gauge.diameter, 160.0);
        assert_eq!(config.gauge.stroke_width, 14.0);
        assert!(config.simulation.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.simulation.seed = Some(7);
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[general]\nmetrics_interval_ms = 500\n").unwrap();
        assert_eq!(config.general.metrics_interval_ms, 500);
        assert_eq!(config.general.clock_interval_ms, 1000);
        assert_eq!(config.general.time_format, "%X");
        assert!(config.general.locale.is_none());
        assert_eq!(config.gauge, GaugeConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.general.clock_interval_ms = 0;
        assert!(matches!(config.validate(), Err(DashError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_stroke() {
        let mut config = Config::default();
        config.gauge.stroke_width = 200.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let mut config = Config::default();
        config.general.date_format = "%Q".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_locale_override() {
        let config: Config = toml::from_str("[general]\nlocale = \"id_ID.UTF-8\"\n").unwrap();
        assert_eq!(config.general.locale.as_deref(), Some("id_ID.UTF-8"));
        assert!(config.validate().is_ok());

        let config: Config = toml::from_str("[general]\nlocale = \"klingon\"\n").unwrap();
        assert!(matches!(config.validate(), Err(DashError::Config(_))));
    }

    #[test]
    fn test_save_and_load_from() {
        let path = std::env::temp_dir().join(format!("tubedash-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.general.time_format = "%I:%M %p".to_string();
        config.general.locale = Some("de_DE".to_string());
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
