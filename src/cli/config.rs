//! Configuration CLI command handlers

use std::path::{Path, PathBuf};

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{Config, OutputFormat};
use crate::error::{EmotiglassError, Result};

/// Handle configuration commands
///
/// `path` is the config file to operate on (from --config or the default).
pub fn handle_config(command: ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, &value, path),
        ConfigCommand::Get { key } => handle_get(key, path),
        ConfigCommand::Reset { key } => handle_reset(key, path),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Config file path: explicit override or the platform default
pub fn resolve_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => Config::config_path(),
    }
}

/// Apply a textual value to a config key
pub fn apply_value(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::TickRate => {
            let ms: u64 = value.trim().parse().map_err(|_| {
                EmotiglassError::InvalidInput(format!(
                    "Invalid tick rate '{}'. Expected milliseconds, e.g. 100",
                    value
                ))
            })?;
            config.set_tick_rate(ms)?;
        }
        ConfigKey::Animations => {
            config.animations = parse_bool(value).ok_or_else(|| {
                EmotiglassError::InvalidInput(format!(
                    "Invalid value '{}'. Use on/off, true/false or yes/no",
                    value
                ))
            })?;
        }
        ConfigKey::AdjustStep => {
            let step: f64 = value.trim().parse().map_err(|_| {
                EmotiglassError::InvalidInput(format!(
                    "Invalid step '{}'. Expected a number, e.g. 0.05",
                    value
                ))
            })?;
            config.set_adjust_step(step)?;
        }
        ConfigKey::Format => {
            config.default_format = OutputFormat::parse(value).ok_or_else(|| {
                EmotiglassError::InvalidInput(format!(
                    "Invalid format '{}'. Available formats: text, json",
                    value
                ))
            })?;
        }
    }
    Ok(())
}

/// Current value of a config key as text
pub fn read_value(config: &Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::TickRate => config.tick_rate_ms.to_string(),
        ConfigKey::Animations => (if config.animations { "on" } else { "off" }).to_string(),
        ConfigKey::AdjustStep => config.adjust_step.to_string(),
        ConfigKey::Format => config.default_format.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: &str, path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    apply_value(&mut config, key, value)?;
    config.save_to(path)?;

    println!("{} set to: {}", key.name(), read_value(&config, key));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey, path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    println!("{}: {}", key.name(), read_value(&config, key));
    Ok(())
}

/// Handle resetting a configuration value
fn handle_reset(key: ConfigKey, path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    let defaults = Config::default();

    match key {
        ConfigKey::TickRate => config.tick_rate_ms = defaults.tick_rate_ms,
        ConfigKey::Animations => config.animations = defaults.animations,
        ConfigKey::AdjustStep => config.adjust_step = defaults.adjust_step,
        ConfigKey::Format => config.default_format = defaults.default_format,
    }
    config.save_to(path)?;

    println!(
        "{} reset to default: {}",
        key.name(),
        read_value(&config, key)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_values() {
        let mut config = Config::default();
        apply_value(&mut config, ConfigKey::TickRate, "250").unwrap();
        apply_value(&mut config, ConfigKey::Animations, "off").unwrap();
        apply_value(&mut config, ConfigKey::AdjustStep, "0.1").unwrap();
        apply_value(&mut config, ConfigKey::Format, "JSON").unwrap();

        assert_eq!(config.tick_rate_ms, 250);
        assert!(!config.animations);
        assert_eq!(config.adjust_step, 0.1);
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply_value(&mut config, ConfigKey::TickRate, "fast").is_err());
        assert!(apply_value(&mut config, ConfigKey::TickRate, "1").is_err());
        assert!(apply_value(&mut config, ConfigKey::Animations, "maybe").is_err());
        assert!(apply_value(&mut config, ConfigKey::Format, "xml").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_value() {
        let config = Config::default();
        assert_eq!(read_value(&config, ConfigKey::TickRate), "100");
        assert_eq!(read_value(&config, ConfigKey::Animations), "on");
        assert_eq!(read_value(&config, ConfigKey::Format), "text");
    }

    #[test]
    fn test_set_then_reset_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle_set(ConfigKey::TickRate, "40", &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().tick_rate_ms, 40);

        handle_reset(ConfigKey::TickRate, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().tick_rate_ms, 100);
    }
}
