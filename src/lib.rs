//! Informar: LaTeX table generation for empirical study results
//!
//! Loads decision-tree and random-forest experiment summaries from CSV and
//! renders the study's fixed-layout result tables as LaTeX markup.
//!
//! # Architecture
//!
//! - `report`: source schemas, CSV decoding, pivoting, LaTeX rendering
//! - `config`: CLI argument types
//! - `cli`: command handlers
//! - `error`: crate-wide error type
//!
//! # Example
//!
//! ```no_run
//! use informar::report::{build_tables, load_results, to_latex};
//! use informar::report::schema::{DATASETS, DT_SCHEMA, RF_SCHEMA};
//! use std::path::Path;
//!
//! let dt = load_results(Path::new("results/dt_empirical_study.csv"), &DT_SCHEMA, Some(&DATASETS[..]))?;
//! let rf = load_results(Path::new("results/rf_empirical_study.csv"), &RF_SCHEMA, None)?;
//! let tables = build_tables(&dt, &rf);
//! println!("{}", to_latex(&tables.accuracy, "Test Accuracy Results", "tab:test_acc"));
//! # Ok::<(), informar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use error::{Error, Result};
