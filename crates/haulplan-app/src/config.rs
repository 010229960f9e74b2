//! Configuration management for haulplan
//!
//! Config stored at: ~/.config/haulplan/config.json

use haulplan_types::{ConfigError, LegalLimits, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Legal road-transport limits; jurisdiction-specific overrides
    #[serde(default)]
    pub limits: LegalLimits,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Custom trailer catalog file; built-in catalog when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: LegalLimits::default(),
            output_format: OutputFormat::Table,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulplan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulplan Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Max legal length:  {:.1} ft", self.limits.max_legal_length)?;
        writeln!(f, "Max legal width:   {:.1} ft", self.limits.max_legal_width)?;
        writeln!(f, "Max legal height:  {:.1} ft", self.limits.max_legal_height)?;
        writeln!(f, "Max legal weight:  {:.0} lbs", self.limits.max_legal_weight)?;
        writeln!(f, "Per-axle limit:    {:.0} lbs", self.limits.per_axle_weight_limit)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(
            f,
            "Catalog:           {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.catalog_path.is_none());
        assert!((config.limits.max_legal_weight - 80_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.limits.max_legal_width = 9.0;
        config.output_format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!((loaded.limits.max_legal_width - 9.0).abs() < f64::EPSILON);
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"limits": {"maxLegalWidth": 10.0}}"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert!((loaded.limits.max_legal_width - 10.0).abs() < f64::EPSILON);
        assert!((loaded.limits.max_legal_length - 53.0).abs() < f64::EPSILON);
        assert_eq!(loaded.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_limits_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"limits": {"maxLegalWidth": -1.0}}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
