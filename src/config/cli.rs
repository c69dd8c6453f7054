//! CLI types - Cli, Command, and per-command argument structs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default decision-tree summary path
pub const DEFAULT_DT_PATH: &str = "results/dt_empirical_study.csv";
/// Default random-forest summary path
pub const DEFAULT_RF_PATH: &str = "results/rf_empirical_study.csv";

/// Informar: empirical-study LaTeX table builder
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "informar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Render decision-tree and random-forest study results as LaTeX tables")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render the three result tables as LaTeX
    Tables(TablesArgs),

    /// Check that both result files load cleanly
    Validate(ValidateArgs),

    /// Show which (dataset, method) results are present
    Info(InfoArgs),
}

/// Arguments for the tables command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TablesArgs {
    /// Decision-tree summary CSV
    #[arg(long, default_value = DEFAULT_DT_PATH)]
    pub dt: PathBuf,

    /// Random-forest summary CSV
    #[arg(long, default_value = DEFAULT_RF_PATH)]
    pub rf: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Decision-tree summary CSV
    #[arg(long, default_value = DEFAULT_DT_PATH)]
    pub dt: PathBuf,

    /// Random-forest summary CSV
    #[arg(long, default_value = DEFAULT_RF_PATH)]
    pub rf: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Decision-tree summary CSV
    #[arg(long, default_value = DEFAULT_DT_PATH)]
    pub dt: PathBuf,

    /// Random-forest summary CSV
    #[arg(long, default_value = DEFAULT_RF_PATH)]
    pub rf: PathBuf,
}

/// Output format for the tables command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
