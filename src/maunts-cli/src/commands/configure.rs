//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up maunts defaults.

use crate::config::Config;
use anyhow::{bail, Result};

/// Values the configure command can change
#[derive(Debug, Default)]
pub struct ConfigChanges {
    pub region: Option<String>,
    pub realm: Option<String>,
    pub api_base: Option<String>,
    pub timeout: Option<u64>,
}

impl ConfigChanges {
    fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.realm.is_none()
            && self.api_base.is_none()
            && self.timeout.is_none()
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `changes` - Settings to store
/// * `show` - If true, show current configuration
pub fn handle(changes: ConfigChanges, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if changes.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, changes)?;
    config.save()?;

    println!("Configuration saved");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Apply changes to a loaded configuration
fn apply(config: &mut Config, changes: ConfigChanges) -> Result<()> {
    if let Some(timeout) = changes.timeout {
        if timeout == 0 {
            bail!("Timeout must be at least one second");
        }
        config.timeout_secs = Some(timeout);
    }
    if let Some(region) = changes.region {
        config.region = Some(region.trim().to_lowercase());
    }
    if let Some(realm) = changes.realm {
        config.default_realm = Some(realm.trim().to_string());
    }
    if let Some(base) = changes.api_base {
        config.api_base = Some(base.trim().to_string());
    }
    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Region: {}", config.region());
    println!("Default realm: {}", config.default_realm());
    match config.api_base() {
        Some(base) => println!("API base: {}", base),
        None => println!("API base: (from region)"),
    }
    println!("Timeout: {}s", config.timeout_secs());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: maunts configure --region eu --realm Ravencrest");
    println!("   or: maunts configure --show");
    println!();
    println!("Note: a realm=<name> line in chars.txt overrides the default realm");
    println!("      for the characters listed after it.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_normalizes_values() {
        let mut config = Config::default();
        apply(
            &mut config,
            ConfigChanges {
                region: Some(" US ".to_string()),
                realm: Some("Area 52 ".to_string()),
                api_base: None,
                timeout: Some(20),
            },
        )
        .unwrap();

        assert_eq!(config.region(), "us");
        assert_eq!(config.default_realm(), "Area 52");
        assert_eq!(config.timeout_secs(), 20);
        assert_eq!(config.api_base(), None);
    }

    #[test]
    fn test_apply_rejects_zero_timeout() {
        let mut config = Config::default();
        let changes = ConfigChanges {
            timeout: Some(0),
            ..Default::default()
        };
        assert!(apply(&mut config, changes).is_err());
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_empty_changes() {
        assert!(ConfigChanges::default().is_empty());
    }
}
