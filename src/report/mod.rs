//! Empirical-study table building (INF-012)
//!
//! Pipeline for turning experiment summary CSVs into the study's LaTeX
//! result tables: load → pivot → render.
//!
//! ## Architecture
//!
//! - `schema`: source schemas, the dataset allow-list, and method mappings
//! - `loader`: CSV decoding into typed result rows with a lookup index
//! - `pivot`: dataset × method matrices of formatted metric strings
//! - `latex`: LaTeX table rendering

pub mod latex;
pub mod loader;
pub mod pivot;
pub mod schema;

pub use latex::{to_latex, MISSING_MARKER};
pub use loader::{load_results, ResultSet};
pub use pivot::{build_tables, MetricTable, StudyTables};
pub use schema::ResultRow;
