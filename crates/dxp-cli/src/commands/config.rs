//! Config command
//!
//! Manage dxp configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use dxp_core::config::Config;

use super::{config_path, load_config};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(explicit, json),
        ConfigCommand::Init { force } => init_config(explicit, force),
    }
}

fn show_config(explicit: Option<&Path>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let path = config_path(explicit);
    let config = load_config(explicit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if path.exists() {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults)".dimmed());
    }
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(explicit: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = config_path(explicit);

    if path.exists() && !force {
        eprintln!(
            "{} Configuration already exists at {}. Use '{}' to overwrite.",
            "⚠".yellow(),
            path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let content = format!(
        "# dxp configuration\n\n{}",
        toml::to_string_pretty(&Config::default())?
    );
    fs::write(&path, content).context(format!("Failed to write {}", path.display()))?;

    eprintln!("{} Configuration written to {}", "✓".green(), path.display());
    Ok(())
}
