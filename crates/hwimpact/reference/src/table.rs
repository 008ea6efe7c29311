//! Raw tabular reference data addressed by column name.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ReferenceError, ReferenceResult};

/// A loaded dataset: named columns over rows of text cells.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReferenceTable {
    /// Build a table, rejecting empty tables and ragged rows.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> ReferenceResult<Self> {
        let name = name.into();
        if rows.is_empty() {
            return Err(ReferenceError::EmptyTable { table: name });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(ReferenceError::RaggedRow {
                table: name,
                row,
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    /// Read a headed CSV document.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> ReferenceResult<Self> {
        let name = name.into();
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        debug!(table = %name, columns = columns.len(), rows = rows.len(), "Parsed CSV dataset");
        Self::new(name, columns, rows)
    }

    /// Read a CSV file; the table is named after the file stem.
    pub fn from_csv_path(path: impl AsRef<Path>) -> ReferenceResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path)?;
        Self::from_csv_reader(name, file)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> ReferenceResult<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| ReferenceError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Fail on the first expected column the table lacks.
    pub fn require_columns(&self, columns: &[&str]) -> ReferenceResult<Vec<usize>> {
        columns.iter().map(|c| self.column_index(c)).collect()
    }

    pub fn text(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }

    /// Parse a numeric cell; empty cells read as `None`.
    pub fn number(&self, row: usize, column: usize) -> ReferenceResult<Option<f64>> {
        let raw = self.text(row, column);
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ReferenceError::InvalidCell {
                table: self.name.clone(),
                row,
                column: self.columns[column].clone(),
                value: raw.to_string(),
            }),
        }
    }

    /// Parse a numeric cell that must be present.
    pub fn required_number(&self, row: usize, column: usize) -> ReferenceResult<f64> {
        self.number(row, column)?
            .ok_or_else(|| ReferenceError::InvalidCell {
                table: self.name.clone(),
                row,
                column: self.columns[column].clone(),
                value: String::new(),
            })
    }
}
