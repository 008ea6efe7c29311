//! Process-wide reference data, loaded once and shared read-only.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::error::{ReferenceError, ReferenceResult};
use crate::gpu::GpuSpecTable;
use crate::ram::RamManufactureTable;
use crate::table::ReferenceTable;

/// Every reference dataset the engine consults.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    ram: RamManufactureTable,
    gpu: GpuSpecTable,
}

impl ReferenceData {
    pub fn new(ram: RamManufactureTable, gpu: GpuSpecTable) -> Self {
        Self { ram, gpu }
    }

    /// Load both datasets from CSV files, failing fast on integrity errors.
    pub fn from_csv_paths(
        ram_path: impl AsRef<Path>,
        gpu_path: impl AsRef<Path>,
    ) -> ReferenceResult<Self> {
        let ram = RamManufactureTable::from_table(&ReferenceTable::from_csv_path(ram_path)?)?;
        let gpu = GpuSpecTable::from_table(&ReferenceTable::from_csv_path(gpu_path)?)?;
        info!(ram_rows = ram.len(), gpu_rows = gpu.len(), "Reference data loaded");
        Ok(Self::new(ram, gpu))
    }

    pub fn ram(&self) -> &RamManufactureTable {
        &self.ram
    }

    pub fn gpu(&self) -> &GpuSpecTable {
        &self.gpu
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

static INSTALLED: OnceLock<Arc<ReferenceData>> = OnceLock::new();

/// Install the process-wide reference data. Only the first call succeeds.
pub fn install(data: ReferenceData) -> ReferenceResult<Arc<ReferenceData>> {
    let shared = data.into_shared();
    INSTALLED
        .set(Arc::clone(&shared))
        .map_err(|_| ReferenceError::AlreadyInstalled)?;
    info!("Reference data installed");
    Ok(shared)
}

/// The installed reference data, if any.
pub fn installed() -> Option<Arc<ReferenceData>> {
    INSTALLED.get().cloned()
}
