//! Check that both result files load cleanly.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ValidateArgs;
use crate::report::loader::load_results;
use crate::report::schema::{DATASETS, DT_SCHEMA, RF_SCHEMA};

pub fn run_validate(args: ValidateArgs, log_level: LogLevel) -> Result<(), String> {
    let dt = load_results(&args.dt, &DT_SCHEMA, Some(&DATASETS[..]))
        .map_err(|e| format!("Decision-tree summary failed validation: {e}"))?;
    log(
        log_level,
        LogLevel::Normal,
        &format!("✓ {}: {} row(s)", args.dt.display(), dt.len()),
    );

    let rf = load_results(&args.rf, &RF_SCHEMA, None)
        .map_err(|e| format!("Random-forest summary failed validation: {e}"))?;
    log(
        log_level,
        LogLevel::Normal,
        &format!("✓ {}: {} row(s)", args.rf.display(), rf.len()),
    );

    log(log_level, LogLevel::Normal, "Both result files loaded cleanly");
    Ok(())
}
