//! Crowdsourced RAM manufacturing dataset (density per manufacturer/process).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReferenceError, ReferenceResult};
use crate::fuzzy::NameMatcher;
use crate::table::ReferenceTable;

pub const RAM_TABLE: &str = "ram_manufacture";
pub const RAM_COLUMNS: [&str; 3] = ["manufacturer", "process", "density"];

/// One manufacturing reference: density in GB/cm² for a manufacturer and
/// process node (nm).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RamManufactureRow {
    pub manufacturer: String,
    pub process: Option<f64>,
    pub density: f64,
}

impl RamManufactureRow {
    pub fn new(manufacturer: impl Into<String>, process: Option<f64>, density: f64) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            process,
            density,
        }
    }
}

/// Validated, read-only RAM manufacture table.
#[derive(Clone, Debug)]
pub struct RamManufactureTable {
    rows: Vec<RamManufactureRow>,
    manufacturers: Vec<String>,
}

impl RamManufactureTable {
    pub fn from_rows(rows: Vec<RamManufactureRow>) -> ReferenceResult<Self> {
        if rows.is_empty() {
            return Err(ReferenceError::EmptyTable {
                table: RAM_TABLE.into(),
            });
        }
        if let Some((row, bad)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| !(r.density.is_finite() && r.density > 0.0))
        {
            return Err(ReferenceError::InvalidCell {
                table: RAM_TABLE.into(),
                row,
                column: "density".into(),
                value: bad.density.to_string(),
            });
        }

        let mut manufacturers: Vec<String> = Vec::new();
        for r in &rows {
            if !manufacturers.contains(&r.manufacturer) {
                manufacturers.push(r.manufacturer.clone());
            }
        }

        Ok(Self {
            rows,
            manufacturers,
        })
    }

    /// Extract the fixed columns from a raw table.
    pub fn from_table(table: &ReferenceTable) -> ReferenceResult<Self> {
        let idx = table.require_columns(&RAM_COLUMNS)?;
        let (manufacturer, process, density) = (idx[0], idx[1], idx[2]);

        let rows = (0..table.len())
            .map(|row| {
                Ok(RamManufactureRow {
                    manufacturer: table.text(row, manufacturer).to_string(),
                    process: table.number(row, process)?,
                    density: table.required_number(row, density)?,
                })
            })
            .collect::<ReferenceResult<Vec<_>>>()?;

        let loaded = Self::from_rows(rows)?;
        info!(
            table = table.name(),
            rows = loaded.len(),
            manufacturers = loaded.manufacturers.len(),
            "RAM manufacture dataset loaded"
        );
        Ok(loaded)
    }

    pub fn rows(&self) -> &[RamManufactureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct manufacturer labels in table order.
    pub fn manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    /// Snap a free-text manufacturer onto the table's canonical label.
    pub fn canonical_manufacturer(&self, input: &str, matcher: &NameMatcher) -> Option<&str> {
        matcher
            .best(input, self.manufacturers.iter().map(String::as_str))
            .map(|(idx, _)| self.manufacturers[idx].as_str())
    }
}
