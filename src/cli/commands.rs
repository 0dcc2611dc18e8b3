//! CLI command definitions using clap
//!
//! Defines the command structure for the `emotiglass` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::config::OutputFormat;

/// emotiglass - mood tracking in the terminal
///
/// Capture how you feel and see which emotion dominates.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "emotiglass", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "EMOTIGLASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pre-fill the capture screen with scores (JSON object)
    #[arg(long)]
    pub scores: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the dominant emotion in a set of scores
    Analyze(AnalyzeArgs),

    /// Show how an emotion is presented
    Present(PresentArgs),

    /// List the tracked emotions
    Labels(LabelsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format flag
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl FormatArg {
    pub fn to_output_format(self) -> OutputFormat {
        match self {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analyze Command
// ─────────────────────────────────────────────────────────────────────────────

/// Analyze command
///
/// Scores come from --json, --file, `label=value` pairs, or JSON on stdin
/// when none of these are given.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Scores as a JSON object, e.g. '{"joy": 0.8, "sadness": 0.1}'
    #[arg(long, conflicts_with_all = ["file", "pairs"])]
    pub json: Option<String>,

    /// Read scores from a JSON file
    #[arg(short, long, conflicts_with = "pairs")]
    pub file: Option<PathBuf>,

    /// Scores as label=value pairs, e.g. joy=0.8 energy=60
    pub pairs: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(long)]
    pub format: Option<FormatArg>,

    /// Reject intensities outside 0..1 and factors outside 0..100
    #[arg(long)]
    pub strict: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Present Command
// ─────────────────────────────────────────────────────────────────────────────

/// Present command
#[derive(Parser, Debug)]
pub struct PresentArgs {
    /// Emotion label (unknown labels show the default entry)
    pub label: String,

    /// Output format (defaults to the configured format)
    #[arg(long)]
    pub format: Option<FormatArg>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Labels Command
// ─────────────────────────────────────────────────────────────────────────────

/// Labels command
#[derive(Parser, Debug)]
pub struct LabelsArgs {
    /// Output format (defaults to the configured format)
    #[arg(long)]
    pub format: Option<FormatArg>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Reset a configuration value to its default
    Reset {
        /// Configuration key
        key: ConfigKey,
    },

    /// Print the configuration file path
    Path,
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Animation tick rate in milliseconds
    #[value(name = "tick-rate")]
    TickRate,

    /// Enable or disable result animations
    #[value(name = "animations")]
    Animations,

    /// Slider step on the capture screen
    #[value(name = "adjust-step")]
    AdjustStep,

    /// Default output format
    #[value(name = "format")]
    Format,
}

impl ConfigKey {
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::TickRate => "tick-rate",
            ConfigKey::Animations => "animations",
            ConfigKey::AdjustStep => "adjust-step",
            ConfigKey::Format => "format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["emotiglass"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_analyze_pairs() {
        let cli =
            Cli::try_parse_from(["emotiglass", "analyze", "joy=0.8", "fear=0.1", "--strict"])
                .unwrap();
        match cli.command {
            Some(Commands::Analyze(args)) => {
                assert_eq!(args.pairs, vec!["joy=0.8", "fear=0.1"]);
                assert!(args.strict);
                assert!(args.json.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_json_conflicts_with_pairs() {
        let result = Cli::try_parse_from(["emotiglass", "analyze", "--json", "{}", "joy=1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["emotiglass", "config", "set", "tick-rate", "50"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommand::Set { key, value },
            })) => {
                assert!(matches!(key, ConfigKey::TickRate));
                assert_eq!(value, "50");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
