//! # hwimpact-reference
//!
//! Read-only inputs of the hardware impact engine:
//!
//! - **Reference datasets**: crowdsourced RAM manufacture and GPU spec tables,
//!   loaded once (CSV or in-memory rows) and checked for integrity at load time
//! - **Fuzzy matching**: nearest-label lookup for free-text identifiers
//! - **Archetypes**: named default/min/max profiles per component kind
//! - **Impact factors**: per-item constants with uncertainty intervals
//!
//! Datasets are immutable after load and shared through `Arc`; [`install`]
//! publishes one copy for the whole process.

#![deny(unsafe_code)]

pub mod archetype;
pub mod data;
pub mod error;
pub mod factors;
pub mod fuzzy;
pub mod gpu;
pub mod ram;
pub mod table;

// ── Re-exports ──────────────────────────────────────────────────────

pub use archetype::{
    Archetype, ArchetypeEntry, ArchetypeField, ArchetypeProvider, ArchetypeValue,
    InMemoryArchetypes,
};
pub use data::{install, installed, ReferenceData};
pub use error::{ReferenceError, ReferenceResult};
pub use factors::{
    FactorRecord, ImpactFactorProvider, StaticFactorTable, FACTOR_DIE_IMPACT, FACTOR_IMPACT,
    ITEM_ELECTRICITY, ITEM_GPU, ITEM_RAM,
};
pub use fuzzy::NameMatcher;
pub use gpu::{GpuSpecRow, GpuSpecTable, GPU_COLUMNS, GPU_TABLE};
pub use ram::{RamManufactureRow, RamManufactureTable, RAM_COLUMNS, RAM_TABLE};
pub use table::ReferenceTable;
