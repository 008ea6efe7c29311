//! Crowdsourced GPU specification dataset, keyed by marketing name.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReferenceError, ReferenceResult};
use crate::fuzzy::NameMatcher;
use crate::table::ReferenceTable;

pub const GPU_TABLE: &str = "gpu_specs";
pub const GPU_COLUMNS: [&str; 5] = ["name", "tdp", "die_size", "vram_capacity", "pcb_size"];

/// One GPU reference. Units: W, mm², GB, cm².
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpuSpecRow {
    pub name: String,
    pub tdp: Option<f64>,
    pub die_size: Option<f64>,
    pub vram_capacity: Option<f64>,
    pub pcb_size: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct GpuSpecTable {
    rows: Vec<GpuSpecRow>,
}

impl GpuSpecTable {
    pub fn from_rows(rows: Vec<GpuSpecRow>) -> ReferenceResult<Self> {
        if rows.is_empty() {
            return Err(ReferenceError::EmptyTable {
                table: GPU_TABLE.into(),
            });
        }
        Ok(Self { rows })
    }

    pub fn from_table(table: &ReferenceTable) -> ReferenceResult<Self> {
        let idx = table.require_columns(&GPU_COLUMNS)?;

        let rows = (0..table.len())
            .map(|row| {
                Ok(GpuSpecRow {
                    name: table.text(row, idx[0]).to_string(),
                    tdp: table.number(row, idx[1])?,
                    die_size: table.number(row, idx[2])?,
                    vram_capacity: table.number(row, idx[3])?,
                    pcb_size: table.number(row, idx[4])?,
                })
            })
            .collect::<ReferenceResult<Vec<_>>>()?;

        let loaded = Self::from_rows(rows)?;
        info!(table = table.name(), rows = loaded.len(), "GPU spec dataset loaded");
        Ok(loaded)
    }

    pub fn rows(&self) -> &[GpuSpecRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row whose name is most similar to `name`.
    pub fn closest_by_name(&self, name: &str, matcher: &NameMatcher) -> Option<&GpuSpecRow> {
        matcher
            .best(name, self.rows.iter().map(|r| r.name.as_str()))
            .map(|(idx, _)| &self.rows[idx])
    }
}
