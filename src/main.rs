//! emotiglass - mood tracking in the terminal
//!
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.
//!
//! Also available as the `eg` command.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use emotiglass::cli::analyze;
use emotiglass::cli::commands::{Cli, Commands};
use emotiglass::cli::{config, present};
use emotiglass::core::config::Config;
use emotiglass::error::Result;
use emotiglass::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = config::resolve_path(cli.config);

    match cli.command {
        // Config commands need a real path to write to
        Some(Commands::Config(args)) => config::handle_config(args.command, &config_path?),

        // No subcommand - launch TUI mode
        None => {
            let settings = load_config(config_path.as_ref().ok())?;
            run_tui(settings, config_path.ok(), cli.scores.as_deref()).await
        }

        Some(command) => {
            let settings = load_config(config_path.as_ref().ok())?;

            match command {
                Commands::Analyze(args) => analyze::handle_analyze(args, &settings),
                Commands::Present(args) => present::handle_present(args, &settings),
                Commands::Labels(args) => present::handle_labels(args, &settings),
                Commands::Config(_) => unreachable!(),
            }
        }
    }
}

/// Load configuration, falling back to defaults when there's no config location
fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => {
            tracing::warn!("no configuration directory available, using defaults");
            Ok(Config::default())
        }
    }
}

/// Run the TUI application
async fn run_tui(settings: Config, config_path: Option<PathBuf>, scores: Option<&str>) -> Result<()> {
    let mut app = App::new(settings);

    if let Some(path) = config_path {
        app = app.with_config_path(path);
    }

    if let Some(json) = scores {
        app = app.with_scores(analyze::parse_json(json)?);
    }

    app.run().await
}
