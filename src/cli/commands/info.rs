//! Show which (dataset, method) results are present.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::InfoArgs;
use crate::report::loader::{load_results, ResultSet};
use crate::report::schema::{DATASETS, DT_METHODS, DT_SCHEMA, RF_METHODS, RF_SCHEMA};

pub fn run_info(args: InfoArgs, log_level: LogLevel) -> Result<(), String> {
    let dt = load_results(&args.dt, &DT_SCHEMA, Some(&DATASETS[..]))
        .map_err(|e| format!("Failed to load decision-tree summary: {e}"))?;
    let rf = load_results(&args.rf, &RF_SCHEMA, None)
        .map_err(|e| format!("Failed to load random-forest summary: {e}"))?;

    log(
        log_level,
        LogLevel::Normal,
        &format!("Decision-tree summary: {} ({} row(s))", args.dt.display(), dt.len()),
    );
    log(
        log_level,
        LogLevel::Normal,
        &format!("Random-forest summary: {} ({} row(s))", args.rf.display(), rf.len()),
    );
    log(log_level, LogLevel::Normal, "");

    let mut header = format!("{:<22}", "DATASET");
    for (_, column) in DT_METHODS.iter().chain(RF_METHODS.iter()) {
        header.push_str(&format!("{column:<11}"));
    }
    log(log_level, LogLevel::Normal, header.trim_end());
    log(log_level, LogLevel::Normal, &"-".repeat(22 + 11 * 7));

    for dataset in DATASETS {
        let mut line = format!("{dataset:<22}");
        for (set, methods) in [(&dt, &DT_METHODS[..]), (&rf, &RF_METHODS[..])] {
            for (method, _) in methods {
                line.push_str(&format!("{:<11}", presence(set, dataset, method)));
            }
        }
        log(log_level, LogLevel::Normal, line.trim_end());
    }

    Ok(())
}

fn presence(set: &ResultSet, dataset: &str, method: &str) -> &'static str {
    if set.get(dataset, method).is_some() {
        "x"
    } else {
        "-"
    }
}
