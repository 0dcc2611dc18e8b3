//! Application configuration management
//!
//! Handles loading and saving user preferences:
//! - Animation tick rate and on/off switch
//! - Slider step used on the capture screen
//! - Default CLI output format

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{EmotiglassError, Result};

/// Valid tick rate range in milliseconds
pub const TICK_RATE_RANGE: std::ops::RangeInclusive<u64> = 16..=2000;

/// Largest allowed slider step
pub const MAX_ADJUST_STEP: f64 = 0.5;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Animation clock period in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Play result screen animations
    #[serde(default = "default_animations")]
    pub animations: bool,

    /// Intensity change per key press on the capture screen
    #[serde(default = "default_adjust_step")]
    pub adjust_step: f64,

    /// Output format used when a command doesn't pass --format
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animations() -> bool {
    true
}

fn default_adjust_step() -> f64 {
    0.05
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animations: default_animations(),
            adjust_step: default_adjust_step(),
            default_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file, or defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            tracing::debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "saved configuration");

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "emotiglass", "emotiglass")
            .ok_or_else(|| EmotiglassError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Set the tick rate, rejecting values outside [`TICK_RATE_RANGE`]
    pub fn set_tick_rate(&mut self, ms: u64) -> Result<()> {
        if !TICK_RATE_RANGE.contains(&ms) {
            return Err(EmotiglassError::InvalidInput(format!(
                "Tick rate must be between {} and {} ms, got {}",
                TICK_RATE_RANGE.start(),
                TICK_RATE_RANGE.end(),
                ms
            )));
        }
        self.tick_rate_ms = ms;
        Ok(())
    }

    /// Set the slider step, which must be in (0, MAX_ADJUST_STEP]
    pub fn set_adjust_step(&mut self, step: f64) -> Result<()> {
        if !(step > 0.0 && step <= MAX_ADJUST_STEP) {
            return Err(EmotiglassError::InvalidInput(format!(
                "Adjust step must be greater than 0 and at most {}, got {}",
                MAX_ADJUST_STEP, step
            )));
        }
        self.adjust_step = step;
        Ok(())
    }

    /// Tick rate clamped into the valid range, for configs edited by hand
    pub fn effective_tick_rate(&self) -> u64 {
        self.tick_rate_ms
            .clamp(*TICK_RATE_RANGE.start(), *TICK_RATE_RANGE.end())
    }

    /// Slider step with hand-edited garbage replaced by the default
    pub fn effective_adjust_step(&self) -> f64 {
        if self.adjust_step > 0.0 && self.adjust_step <= MAX_ADJUST_STEP {
            self.adjust_step
        } else {
            default_adjust_step()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.animations);
        assert_eq!(config.adjust_step, 0.05);
        assert_eq!(config.default_format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse(" TEXT "), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_tick_rate(250).unwrap();
        config.animations = false;
        config.default_format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "animations = false\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.animations);
        assert_eq!(loaded.tick_rate_ms, 100);
    }

    #[test]
    fn test_invalid_file_is_toml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(EmotiglassError::Toml(_))
        ));
    }

    #[test]
    fn test_setters_validate() {
        let mut config = Config::default();
        assert!(config.set_tick_rate(5).is_err());
        assert!(config.set_tick_rate(5000).is_err());
        assert_eq!(config.tick_rate_ms, 100);

        assert!(config.set_adjust_step(0.0).is_err());
        assert!(config.set_adjust_step(0.9).is_err());
        assert!(config.set_adjust_step(f64::NAN).is_err());
        config.set_adjust_step(0.1).unwrap();
        assert_eq!(config.adjust_step, 0.1);
    }

    #[test]
    fn test_effective_values() {
        let config = Config {
            tick_rate_ms: 1,
            adjust_step: -2.0,
            ..Config::default()
        };
        assert_eq!(config.effective_tick_rate(), 16);
        assert_eq!(config.effective_adjust_step(), 0.05);
    }
}
