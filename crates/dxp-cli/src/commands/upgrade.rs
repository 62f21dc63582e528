//! Upgrade command
//!
//! Bring parameters stored by an older release up to the current layout.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use dxp_core::upgrade::{StoredContent, Upgrader};
use dxp_core::ParamsVersion;

/// Arguments for the upgrade command
#[derive(Debug, Args)]
pub struct UpgradeArgs {
    /// Stored content (JSON object with `params` and `extras`)
    #[arg(long, short)]
    pub input: PathBuf,

    /// Version the content was saved with, as `major.minor`
    #[arg(long, value_parser = parse_version)]
    pub from: ParamsVersion,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn parse_version(s: &str) -> std::result::Result<ParamsVersion, String> {
    ParamsVersion::parse(s).map_err(|e| e.to_string())
}

/// Execute the upgrade command
pub fn execute(args: UpgradeArgs) -> Result<()> {
    use colored::Colorize;

    let json = fs::read_to_string(&args.input)
        .context(format!("Failed to read {}", args.input.display()))?;
    let content: StoredContent = serde_json::from_str(&json)
        .context(format!("Invalid stored content {}", args.input.display()))?;

    let upgrader = Upgrader::new();
    if !upgrader.needs_upgrade(args.from) {
        eprintln!(
            "{} Content is already at {}",
            "✓".green(),
            upgrader.current_version().to_string().cyan()
        );
    }

    let outcome = upgrader.upgrade(args.from, content)?;
    for version in &outcome.applied {
        eprintln!("{} Applied upgrade {}", "✓".green(), version.to_string().yellow());
    }

    let output = serde_json::to_string_pretty(&outcome.content)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Written to {}", "✓".green(), output_path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}
