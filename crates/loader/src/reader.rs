//! Low-level table access: header resolution and lenient value coercion.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::LoadError;

/// A fully read CSV table with trimmed headers and rows.
///
/// Rows may be ragged (`flexible` parsing); missing trailing cells read
/// as empty strings.
#[derive(Debug)]
pub(crate) struct TableReader {
    table: &'static str,
    headers: csv::StringRecord,
    rows: Vec<csv::StringRecord>,
}

impl TableReader {
    /// Reads `dir/file` in full. Unreadable or structurally invalid CSV
    /// is a [`LoadError::DataLoad`].
    pub(crate) fn open(dir: &Path, table: &'static str, file: &str) -> Result<Self, LoadError> {
        let path = dir.join(file);
        let data_load = |source: csv::Error, path: &PathBuf| LoadError::DataLoad {
            table,
            path: path.clone(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|e| data_load(e, &path))?;
        let headers = reader.headers().map_err(|e| data_load(e, &path))?.clone();
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| data_load(e, &path))?;

        debug!(table, path = %path.display(), rows = rows.len(), "read input table");

        Ok(Self {
            table,
            headers,
            rows,
        })
    }

    /// Index of a required column; [`LoadError::Schema`] when absent.
    /// Extra columns are simply never looked up.
    pub(crate) fn column(&self, name: &'static str) -> Result<usize, LoadError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or(LoadError::Schema {
                table: self.table,
                column: name,
            })
    }

    /// Index of an optional column, `None` when the header is absent.
    pub(crate) fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub(crate) fn rows(&self) -> &[csv::StringRecord] {
        &self.rows
    }

    pub(crate) fn name(&self) -> &'static str {
        self.table
    }
}

/// Cell accessor tolerant of ragged rows.
pub(crate) fn text(row: &csv::StringRecord, column: usize) -> String {
    row.get(column).unwrap_or("").to_string()
}

/// Lenient numeric coercion: empty, non-numeric, and non-finite cells
/// become `None` and never raise. Logged at debug level so row-level
/// anomalies stay observable without failing the run.
pub(crate) fn numeric(
    table: &'static str,
    column: &str,
    row: &csv::StringRecord,
    index: Option<usize>,
) -> Option<f64> {
    let raw = index.and_then(|index| row.get(index)).unwrap_or("").trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(table, column, value = raw, "non-numeric cell coerced to undefined");
            None
        }
    }
}
