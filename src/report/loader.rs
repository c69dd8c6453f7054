//! CSV decoding into typed result rows.
//!
//! Decodes a header-first comma-separated summary into [`ResultRow`]s plus an
//! index keyed by (dataset, method), built once during load. Decoding is
//! strict: a missing required column, a short record, or a malformed numeric
//! field fails the whole load. Field values may be double-quoted.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::report::schema::{ResultRow, SourceSchema};

/// Loaded result rows with a (dataset, method) lookup index
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
    index: HashMap<(String, String), usize>,
}

impl ResultSet {
    /// Record a row. The first row for a (dataset, method) pair wins;
    /// later duplicates stay in row storage but are never indexed.
    pub fn insert(&mut self, row: ResultRow) {
        let key = (row.dataset.clone(), row.method.clone());
        let idx = self.rows.len();
        self.rows.push(row);
        self.index.entry(key).or_insert(idx);
    }

    /// First row recorded for (dataset, method), if any
    pub fn get(&self, dataset: &str, method: &str) -> Option<&ResultRow> {
        self.index
            .get(&(dataset.to_string(), method.to_string()))
            .map(|&i| &self.rows[i])
    }

    /// All rows in file order, duplicates included
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decode `path` into a result set.
///
/// `allow` restricts rows to the named datasets; rows outside the list are
/// dropped without error. With `allow = None` every row is kept.
pub fn load_results(
    path: &Path,
    schema: &SourceSchema,
    allow: Option<&[&str]>,
) -> Result<ResultSet> {
    let content = fs::read_to_string(path)?;
    parse_results(&content, path, schema, allow)
}

fn parse_results(
    content: &str,
    path: &Path,
    schema: &SourceSchema,
    allow: Option<&[&str]>,
) -> Result<ResultSet> {
    let mut lines = content.lines();
    let header = split_record(lines.next().unwrap_or(""));

    let column = |name: &'static str| -> Result<usize> {
        header
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::MissingColumn {
                path: path.display().to_string(),
                column: name.to_string(),
            })
    };

    let dataset_idx = column(schema.dataset)?;
    let method_idx = column(schema.method)?;
    let accuracy_idx = column(schema.accuracy)?;
    let mcc_idx = column(schema.mcc)?;
    let depth_idx = column(schema.depth)?;
    let leaves_idx = column(schema.leaves)?;

    let mut set = ResultSet::default();
    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // Header is line 1.
        let line_no = offset + 2;
        let fields = split_record(line);

        let dataset = text(&fields, dataset_idx, schema.dataset, path, line_no)?.to_string();
        if let Some(allow) = allow {
            if !allow.contains(&dataset.as_str()) {
                continue;
            }
        }

        set.insert(ResultRow {
            method: text(&fields, method_idx, schema.method, path, line_no)?.to_string(),
            accuracy: numeric(&fields, accuracy_idx, schema.accuracy, path, line_no)?,
            mcc: numeric(&fields, mcc_idx, schema.mcc, path, line_no)?,
            depth: numeric(&fields, depth_idx, schema.depth, path, line_no)?,
            leaves: numeric(&fields, leaves_idx, schema.leaves, path, line_no)?,
            dataset,
        });
    }

    Ok(set)
}

fn text<'a>(
    fields: &'a [String],
    idx: usize,
    column: &str,
    path: &Path,
    line: usize,
) -> Result<&'a str> {
    fields
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| Error::ShortRecord {
            path: path.display().to_string(),
            line,
            column: column.to_string(),
            expected: idx + 1,
            found: fields.len(),
        })
}

fn numeric(fields: &[String], idx: usize, column: &str, path: &Path, line: usize) -> Result<f64> {
    let raw = text(fields, idx, column, path, line)?;
    raw.trim().parse::<f64>().map_err(|_| Error::Numeric {
        path: path.display().to_string(),
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Split one CSV record. Fields may be double-quoted; `""` inside a quoted
/// field is an escaped quote.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::schema::DT_SCHEMA;

    const DT_HEADER: &str = "dataset,method,test_acc_mean,test_mcc_mean,depth_mean,n_leaves_mean";

    fn parse(content: &str, allow: Option<&[&str]>) -> Result<ResultSet> {
        parse_results(content, Path::new("dt.csv"), &DT_SCHEMA, allow)
    }

    #[test]
    fn test_split_record_plain() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_record_quoted_field() {
        assert_eq!(
            split_record("\"Pima, Indians\",MD,0.75"),
            vec!["Pima, Indians", "MD", "0.75"]
        );
    }

    #[test]
    fn test_split_record_escaped_quote() {
        assert_eq!(split_record("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn test_split_record_empty_fields() {
        assert_eq!(split_record("a,,c"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_parse_typed_row() {
        let content = format!("{DT_HEADER}\nBanknote,MD,0.9876,0.9701,4.26,12.7\n");
        let set = parse(&content, None).expect("parse should succeed");
        assert_eq!(set.len(), 1);
        let row = set.get("Banknote", "MD").expect("row should be indexed");
        assert_eq!(row.accuracy, 0.9876);
        assert_eq!(row.mcc, 0.9701);
        assert_eq!(row.depth, 4.26);
        assert_eq!(row.leaves, 12.7);
    }

    #[test]
    fn test_column_resolution_ignores_column_order() {
        let content =
            "method,dataset,n_leaves_mean,depth_mean,test_mcc_mean,test_acc_mean\nMD,Spam,9.0,3.5,0.8,0.9\n";
        let set = parse(content, None).expect("parse should succeed");
        let row = set.get("Spam", "MD").expect("row should be indexed");
        assert_eq!(row.leaves, 9.0);
        assert_eq!(row.accuracy, 0.9);
    }

    #[test]
    fn test_missing_column_fails() {
        let content = "dataset,method,test_acc_mean\nBanknote,MD,0.9\n";
        let err = parse(content, None).expect_err("load should fail");
        assert!(err.to_string().contains("test_mcc_mean"), "got: {err}");
    }

    #[test]
    fn test_empty_file_reports_missing_column() {
        let err = parse("", None).expect_err("load should fail");
        assert!(err.to_string().contains("missing required column"), "got: {err}");
    }

    #[test]
    fn test_malformed_numeric_fails_with_location() {
        let content = format!("{DT_HEADER}\nBanknote,MD,not-a-number,0.9,4.0,12.0\n");
        let err = parse(&content, None).expect_err("load should fail");
        let msg = err.to_string();
        assert!(msg.contains("not-a-number"), "got: {msg}");
        assert!(msg.contains("test_acc_mean"), "got: {msg}");
        assert!(msg.contains(":2:"), "got: {msg}");
    }

    #[test]
    fn test_short_record_fails() {
        let content = format!("{DT_HEADER}\nBanknote,MD\n");
        let err = parse(&content, None).expect_err("load should fail");
        assert!(err.to_string().contains("fields"), "got: {msg}", msg = err);
    }

    #[test]
    fn test_allow_list_drops_other_datasets() {
        let content = format!(
            "{DT_HEADER}\nSA Heart,MD,0.7,0.4,3.0,8.0\nBanknote,MD,0.99,0.98,4.0,12.0\n"
        );
        let set = parse(&content, Some(&["Banknote"])).expect("parse should succeed");
        assert_eq!(set.len(), 1);
        assert!(set.get("SA Heart", "MD").is_none());
        assert!(set.get("Banknote", "MD").is_some());
    }

    #[test]
    fn test_duplicate_pair_first_row_wins() {
        let content = format!(
            "{DT_HEADER}\nBanknote,MD,0.91,0.8,4.0,12.0\nBanknote,MD,0.42,0.1,9.0,99.0\n"
        );
        let set = parse(&content, None).expect("parse should succeed");
        assert_eq!(set.len(), 2);
        let row = set.get("Banknote", "MD").expect("row should be indexed");
        assert_eq!(row.accuracy, 0.91);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = format!("{DT_HEADER}\n\nBanknote,MD,0.9,0.8,4.0,12.0\n\n");
        let set = parse(&content, None).expect("parse should succeed");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_results(Path::new("no/such/file.csv"), &DT_SCHEMA, None)
            .expect_err("load should fail");
        assert!(matches!(err, Error::Io(_)));
    }
}
