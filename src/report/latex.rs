//! LaTeX table rendering.
//!
//! Serializes a [`MetricTable`] into a captioned, labeled floating table
//! using booktabs rules. Rendering is pure string building and deterministic:
//! the same table always yields the same bytes.

use crate::report::pivot::MetricTable;

/// Rendered in place of a cell with no source data
pub const MISSING_MARKER: &str = "-";

/// Render `table` as a LaTeX floating table with the given caption and label.
///
/// Layout: one left-aligned dataset column followed by one centered column
/// per method, a `Dataset & ...` header row, and one data row per dataset.
pub fn to_latex(table: &MetricTable, caption: &str, label: &str) -> String {
    let mut latex = String::new();

    latex.push_str("\\begin{table}[htbp]\n");
    latex.push_str("\\centering\n");
    latex.push_str(&format!("\\caption{{{caption}}}\n"));
    latex.push_str(&format!("\\label{{{label}}}\n"));
    latex.push_str(&format!(
        "\\begin{{tabular}}{{l{}}}\n",
        "c".repeat(table.columns().len())
    ));
    latex.push_str("\\toprule\n");

    latex.push_str(&format!("Dataset & {} \\\\\n", table.columns().join(" & ")));
    latex.push_str("\\midrule\n");

    for (i, dataset) in table.datasets().iter().enumerate() {
        let cells: Vec<&str> = table
            .row(i)
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(MISSING_MARKER))
            .collect();
        latex.push_str(&format!("{dataset} & {} \\\\\n", cells.join(" & ")));
    }

    latex.push_str("\\bottomrule\n");
    latex.push_str("\\end{tabular}\n");
    latex.push_str("\\end{table}\n");

    latex
}
