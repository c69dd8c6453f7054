//! Render the empirical-study result tables.

use crate::cli::LogLevel;
use crate::config::{OutputFormat, TablesArgs};
use crate::report::latex::to_latex;
use crate::report::loader::load_results;
use crate::report::pivot::build_tables;
use crate::report::schema::{DATASETS, DT_SCHEMA, RF_SCHEMA};

pub fn run_tables(args: TablesArgs, log_level: LogLevel) -> Result<(), String> {
    let dt = load_results(&args.dt, &DT_SCHEMA, Some(&DATASETS[..]))
        .map_err(|e| format!("Failed to load decision-tree summary: {e}"))?;
    let rf = load_results(&args.rf, &RF_SCHEMA, None)
        .map_err(|e| format!("Failed to load random-forest summary: {e}"))?;

    if log_level == LogLevel::Verbose {
        eprintln!(
            "Loaded {} decision-tree row(s) from {}, {} random-forest row(s) from {}",
            dt.len(),
            args.dt.display(),
            rf.len(),
            args.rf.display(),
        );
    }

    let tables = build_tables(&dt, &rf);

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tables)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("=== LaTeX Table 1: Test Accuracy ===");
            println!(
                "{}",
                to_latex(&tables.accuracy, "Test Accuracy Results", "tab:test_acc")
            );
            println!("=== LaTeX Table 2: Test MCC ===");
            println!(
                "{}",
                to_latex(
                    &tables.mcc,
                    "Test Matthews Correlation Coefficient Results",
                    "tab:test_mcc"
                )
            );
            println!("=== LaTeX Table 3: Depth with Number of Nodes ===");
            println!(
                "{}",
                to_latex(
                    &tables.depth_leaves,
                    "Tree Depth with Number of Leaves (in brackets)",
                    "tab:depth_nodes"
                )
            );
        }
    }

    Ok(())
}
