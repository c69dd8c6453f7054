//! Informar CLI
//!
//! One-shot entry point for rendering empirical-study result tables.
//!
//! # Usage
//!
//! ```bash
//! # Render the three LaTeX tables to stdout
//! informar tables
//!
//! # Explicit input paths
//! informar tables --dt results/dt_empirical_study.csv --rf results/rf_empirical_study.csv
//!
//! # Machine-readable matrices
//! informar tables --format json
//!
//! # Check that both result files load cleanly
//! informar validate
//!
//! # Show which (dataset, method) results are present
//! informar info
//! ```

use clap::Parser;
use informar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
