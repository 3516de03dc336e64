//! Configuration management for maunts CLI

use anyhow::{Context, Result};
use maunts::DEFAULT_REALM;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "eu";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub region: Option<String>,
    pub default_realm: Option<String>,
    /// Full API base, e.g. `http://eu.battle.net/api/wow`; wins over `region`
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("maunts");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or use defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub fn default_realm(&self) -> &str {
        self.default_realm.as_deref().unwrap_or(DEFAULT_REALM)
    }

    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    /// Configured timeout; zero is treated as unset
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.region(), "eu");
        assert_eq!(config.default_realm(), "Ravencrest");
        assert_eq!(config.api_base(), None);
        assert_eq!(config.timeout_secs(), 10);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse("region = \"us\"\ntimeout_secs = 30\n").unwrap();
        assert_eq!(config.region(), "us");
        assert_eq!(config.timeout_secs(), 30);
        assert_eq!(config.default_realm(), "Ravencrest");
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = Config::parse("timeout_secs = 0\n").unwrap();
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            region: Some("kr".to_string()),
            default_realm: Some("Azshara".to_string()),
            api_base: None,
            timeout_secs: Some(5),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with("maunts/config.toml"));
    }
}
