use hwimpact_reference::ReferenceError;
use hwimpact_types::ImpactError;
use thiserror::Error;

/// Errors from the impact engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Impact(#[from] ImpactError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("invalid workload: {0}")]
    InvalidWorkload(String),

    #[error("invalid power curve: {0}")]
    InvalidCurve(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("tracing initialization failed: {0}")]
    Telemetry(String),
}

impl EngineError {
    /// True when a required attribute had no value, default or completion.
    pub fn is_missing_attribute(&self) -> bool {
        matches!(self, EngineError::Impact(e) if e.is_missing_attribute())
    }
}

/// Convenience type alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
