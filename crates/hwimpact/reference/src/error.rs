use hwimpact_types::{ComponentKind, ImpactKind};
use thiserror::Error;

/// Errors from loading and querying reference data.
#[derive(Debug, Error)]
pub enum ReferenceError {
    // --- Dataset integrity (raised at load time) ---
    #[error("dataset {table} is missing column {column}")]
    MissingColumn { table: String, column: String },

    #[error("dataset {table} has no rows")]
    EmptyTable { table: String },

    #[error("dataset {table}, row {row}, column {column}: invalid value {value:?}")]
    InvalidCell {
        table: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("dataset {table}, row {row}: expected {expected} cells, got {actual}")]
    RaggedRow {
        table: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("reference data already installed for this process")]
    AlreadyInstalled,

    // --- Provider lookups ---
    #[error("unknown archetype {name} for {kind}")]
    UnknownArchetype { name: String, kind: ComponentKind },

    #[error("no impact factors for {item} ({kind})")]
    UnknownFactorItem { item: String, kind: ImpactKind },

    #[error("impact factor {item}.{field} ({kind}) not found")]
    MissingFactor {
        item: String,
        kind: ImpactKind,
        field: String,
    },
}

impl ReferenceError {
    /// True for errors describing a malformed reference dataset.
    pub fn is_dataset_integrity(&self) -> bool {
        matches!(
            self,
            ReferenceError::MissingColumn { .. }
                | ReferenceError::EmptyTable { .. }
                | ReferenceError::InvalidCell { .. }
                | ReferenceError::RaggedRow { .. }
        )
    }
}

/// Convenience type alias for reference results.
pub type ReferenceResult<T> = Result<T, ReferenceError>;
