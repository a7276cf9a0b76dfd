//! Command-line entry point: load a receipt, split it, print the report.

pub mod output;
pub mod report;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::info;

use crate::{
    config::{ConfigError, ConfigManager},
    currency::CurrencyCode,
    errors::{SplitError, ValidationError},
    split::split_receipt,
    storage::{FileReceiptSource, ReceiptFormat, ReceiptSource},
    utils::{self, build_info},
};

pub use report::{render_json, render_text, RenderOptions};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Could not render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Split(err.into())
    }
}

/// Split a restaurant receipt between the people who shared it.
#[derive(Debug, Parser)]
#[command(name = "tabsplit", version, long_version = build_info::LONG_VERSION)]
pub struct Cli {
    /// Receipt file (YAML or JSON). Defaults to the configured receipt.
    pub receipt: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override format detection from the file extension
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// ISO currency code used for display
    #[arg(long)]
    pub currency: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl From<InputFormat> for ReceiptFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Yaml => ReceiptFormat::Yaml,
            InputFormat::Json => ReceiptFormat::Json,
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    utils::init_tracing(cli.verbose);
    let rendered = execute(&cli)?;
    print!("{rendered}");
    Ok(())
}

/// Runs one split and returns the rendered report.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::from_env(),
    };
    let mut config = manager.load()?;
    if let Some(code) = &cli.currency {
        config.currency = CurrencyCode::new(code.as_str());
    }
    if cli.no_color {
        config.ui_color_enabled = false;
    }
    let color = config.ui_color_enabled && std::io::stdout().is_terminal();
    output::set_preferences(output::OutputPreferences { color });

    let path = cli
        .receipt
        .clone()
        .unwrap_or_else(|| config.default_receipt.clone());
    let mut source = FileReceiptSource::new(path);
    if let Some(format) = cli.input_format {
        source = source.with_format(format.into());
    }
    let receipt = source.load()?;
    let report = split_receipt(&receipt)?;
    info!(
        path = %source.path().display(),
        people = report.people.len(),
        grand_total = report.grand_total,
        "split computed"
    );

    let options = RenderOptions {
        locale: config.locale(),
        currency: config.currency,
        color,
        tolerance: config.reconciliation_tolerance,
    };
    match cli.format {
        OutputFormat::Text => Ok(render_text(&report, &options)),
        OutputFormat::Json => {
            let mut json = render_json(&report, &options)?;
            json.push('\n');
            Ok(json)
        }
    }
}
