//! Source schemas and the fixed table layout.
//!
//! The two experiment summaries name their columns differently; a
//! [`SourceSchema`] maps each source's column names onto the common
//! [`ResultRow`] fields. The dataset allow-list, method mappings, and output
//! column order are fixed by the study design and are not configurable.

use serde::Serialize;

/// Datasets included in the rendered tables, in row order.
///
/// SA Heart is deliberately absent; rows for it are dropped during load and
/// never reach an output table.
pub const DATASETS: [&str; 6] = [
    "Banknote",
    "Pima Indians",
    "Haberman",
    "Ozone",
    "Spam",
    "Wisc. Breast Cancer",
];

/// Decision-tree methods: source identifier → output column.
pub const DT_METHODS: [(&str, &str); 4] =
    [("MD", "MD"), ("CCP", "CCP"), ("ES", "ES"), ("TS", "TS")];

/// Random-forest algorithms: source identifier → output column.
pub const RF_METHODS: [(&str, &str); 3] =
    [("MD_scikit", "MD_scikit"), ("IGES", "IGES"), ("UGES", "UGES")];

/// Output column order shared by all three tables.
pub const COLUMN_ORDER: [&str; 7] = ["MD", "CCP", "ES", "TS", "MD_scikit", "IGES", "UGES"];

/// Column names a source file uses for the common result fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSchema {
    pub dataset: &'static str,
    pub method: &'static str,
    pub accuracy: &'static str,
    pub mcc: &'static str,
    pub depth: &'static str,
    pub leaves: &'static str,
}

/// Schema of the decision-tree summary (`dt_empirical_study.csv`)
pub const DT_SCHEMA: SourceSchema = SourceSchema {
    dataset: "dataset",
    method: "method",
    accuracy: "test_acc_mean",
    mcc: "test_mcc_mean",
    depth: "depth_mean",
    leaves: "n_leaves_mean",
};

/// Schema of the random-forest summary (`rf_empirical_study.csv`)
pub const RF_SCHEMA: SourceSchema = SourceSchema {
    dataset: "dataset",
    method: "algorithm_name",
    accuracy: "test_acc (mean)",
    mcc: "mcc_test (mean)",
    depth: "mean_depth (mean)",
    leaves: "mean_n_leaves (mean)",
};

/// One summary record: mean metrics for a (dataset, method) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// Dataset the experiment ran on
    pub dataset: String,
    /// Method/algorithm identifier in source terms
    pub method: String,
    /// Mean test accuracy
    pub accuracy: f64,
    /// Mean test Matthews correlation coefficient
    pub mcc: f64,
    /// Mean tree depth
    pub depth: f64,
    /// Mean leaf count
    pub leaves: f64,
}
