//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod export;
pub mod upgrade;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dxp_core::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = ".dxp/config.toml";

/// dxp - Document Export Page builder
#[derive(Debug, Parser)]
#[command(name = "dxp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DXP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the export of a content snapshot
    Export(export::ExportArgs),

    /// Upgrade stored parameters to the current version
    Upgrade(upgrade::UpgradeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone();

    // Dispatch to command handler
    match cli.command {
        Commands::Export(args) => export::execute(args, &load_config(config_path.as_deref())?),
        Commands::Upgrade(args) => upgrade::execute(args),
        Commands::Config(cmd) => config::execute(cmd, config_path.as_deref()),
    }
}

/// Path of the configuration file in use
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load the configuration, falling back to defaults when the default file is absent
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit);

    if explicit.is_none() && !path.exists() {
        tracing::debug!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .context(format!("Failed to read configuration {}", path.display()))?;
    let config = toml::from_str(&content)
        .context(format!("Invalid configuration {}", path.display()))?;

    tracing::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
