//! Dataset × method metric matrices.
//!
//! Pivots loaded result rows into the study's three fixed-layout tables.
//! Every cell exists structurally; a cell stays `None` when its (dataset,
//! method) pair has no source row, and the renderer prints the missing
//! marker for it.

use serde::Serialize;

use crate::report::loader::ResultSet;
use crate::report::schema::{COLUMN_ORDER, DATASETS, DT_METHODS, RF_METHODS};

/// A dataset × method grid of formatted metric strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTable {
    datasets: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Option<String>>>,
}

impl MetricTable {
    /// Empty table over the given row and column orders
    pub fn new(datasets: &[&str], columns: &[&str]) -> Self {
        Self {
            datasets: datasets.iter().map(ToString::to_string).collect(),
            columns: columns.iter().map(ToString::to_string).collect(),
            cells: vec![vec![None; columns.len()]; datasets.len()],
        }
    }

    /// Dataset names in row order
    pub fn datasets(&self) -> &[String] {
        &self.datasets
    }

    /// Column names in output order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cells of row `index`, in column order
    pub fn row(&self, index: usize) -> &[Option<String>] {
        &self.cells[index]
    }

    /// Formatted value at (dataset, column), if the pair had source data
    pub fn get(&self, dataset: &str, column: &str) -> Option<&str> {
        let r = self.datasets.iter().position(|d| d == dataset)?;
        let c = self.columns.iter().position(|col| col == column)?;
        self.cells[r][c].as_deref()
    }

    fn set(&mut self, dataset: &str, column: &str, value: String) {
        if let (Some(r), Some(c)) = (
            self.datasets.iter().position(|d| d == dataset),
            self.columns.iter().position(|col| col == column),
        ) {
            self.cells[r][c] = Some(value);
        }
    }
}

/// The three metric tables of the study
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyTables {
    /// Mean test accuracy, 2 decimal places
    pub accuracy: MetricTable,
    /// Mean test MCC, 2 decimal places
    pub mcc: MetricTable,
    /// Mean depth with mean leaf count in parentheses, 1 decimal place each
    pub depth_leaves: MetricTable,
}

/// Pivot both sources into the fixed-layout tables.
///
/// Lookup goes through the load-time (dataset, method) index, so duplicate
/// source rows resolve to the first occurrence.
pub fn build_tables(dt: &ResultSet, rf: &ResultSet) -> StudyTables {
    let mut tables = StudyTables {
        accuracy: MetricTable::new(&DATASETS, &COLUMN_ORDER),
        mcc: MetricTable::new(&DATASETS, &COLUMN_ORDER),
        depth_leaves: MetricTable::new(&DATASETS, &COLUMN_ORDER),
    };
    fill(&mut tables, dt, &DT_METHODS);
    fill(&mut tables, rf, &RF_METHODS);
    tables
}

fn fill(tables: &mut StudyTables, source: &ResultSet, methods: &[(&str, &str)]) {
    for dataset in DATASETS {
        for (method, column) in methods {
            if let Some(row) = source.get(dataset, method) {
                tables
                    .accuracy
                    .set(dataset, column, format!("{:.2}", row.accuracy));
                tables.mcc.set(dataset, column, format!("{:.2}", row.mcc));
                tables.depth_leaves.set(
                    dataset,
                    column,
                    format!("{:.1} ({:.1})", row.depth, row.leaves),
                );
            }
        }
    }
}
