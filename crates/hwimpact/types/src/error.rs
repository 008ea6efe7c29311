use thiserror::Error;

/// Errors raised by slot resolution and interval arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("missing attribute: {attribute} has no value, no default and could not be completed")]
    MissingAttribute { attribute: String },

    #[error("invalid bounds for {attribute}: {detail}")]
    InvalidBounds { attribute: String, detail: String },

    #[error("division by an interval reaching zero (divisor min {divisor_min})")]
    DivisionByZero { divisor_min: f64 },

    #[error("{operation} requires non-negative operands, got {value}")]
    NegativeOperand { operation: &'static str, value: f64 },

    #[error("non-finite value in {0}")]
    NonFinite(String),
}

impl ImpactError {
    pub fn missing(attribute: impl Into<String>) -> Self {
        ImpactError::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    pub fn is_missing_attribute(&self) -> bool {
        matches!(self, ImpactError::MissingAttribute { .. })
    }
}

/// Convenience type alias for impact results.
pub type ImpactResult<T> = Result<T, ImpactError>;
