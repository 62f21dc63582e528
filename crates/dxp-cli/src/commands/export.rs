//! Export command
//!
//! Build the export of a content snapshot in one of the available formats.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use dxp_core::config::Config;
use dxp_core::content::ContentSnapshot;
use dxp_core::error::ExportError;
use dxp_core::export::ExportManager;
use dxp_core::page::{ExportPage, LoggingObserver};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// HTML fragment for inline display
    Html,
    /// Standalone HTML document
    HtmlPage,
    /// Export model as pretty JSON
    Json,
    /// Export model as single-line JSON
    JsonCompact,
}

impl ExportFormat {
    /// Format name registered with the export manager
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::HtmlPage => "html-page",
            ExportFormat::Json => "json",
            ExportFormat::JsonCompact => "json-compact",
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Content snapshot (JSON), `-` for stdin
    #[arg(long, short)]
    pub input: PathBuf,

    /// Export format (defaults to the configured format)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Submit the export after building it
    #[arg(long)]
    pub submit: bool,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let json = read_input(&args.input)?;
    let snapshot = ContentSnapshot::from_json(&json)
        .context(format!("Invalid content snapshot {}", args.input.display()))?;
    let builder = snapshot.into_builder(config);

    if args.submit && !builder.submit_enabled() {
        return Err(ExportError::SubmitDisabled).context("Failed to submit export");
    }

    let format_name = match args.format {
        Some(format) => format.name(),
        None => config.export.default_format.as_str(),
    };

    eprintln!(
        "Exporting {} as {}...",
        builder.title().strip_tags().cyan(),
        format_name.yellow()
    );

    let output = ExportManager::new().export(&builder, format_name)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Exported to {}", "✓".green(), output_path.display());
    } else {
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    let mut page = ExportPage::new(builder.document());
    page.subscribe(Box::new(LoggingObserver));

    if args.submit {
        let data = page.submit().context("Failed to submit export")?;
        eprintln!(
            "{} Submitted at {}",
            "✓".green(),
            data.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    page.close();

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
}
