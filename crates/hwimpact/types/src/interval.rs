//! Interval arithmetic over non-negative quantities.
//!
//! Every quantity entering an impact formula is an [`ImpactFactor`]: a
//! central value with a `[min, max]` interval. Sums and products are bound-wise
//! (all operands are non-negative, so both are monotonic in every operand).
//! Quotients pair opposing bounds:
//!
//! ```text
//! min(a / b) = a.min / b.max
//! max(a / b) = a.max / b.min
//! ```

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};

/// Immutable `(value, min, max)` triple with `min <= value <= max`.
///
/// Deserialization goes through [`ImpactFactor::new`], so loaded factor
/// tables are held to the same bounds as hand-built ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImpactFactor")]
pub struct ImpactFactor {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Unchecked wire form of an [`ImpactFactor`].
#[derive(Deserialize)]
struct RawImpactFactor {
    value: f64,
    min: f64,
    max: f64,
}

impl TryFrom<RawImpactFactor> for ImpactFactor {
    type Error = ImpactError;

    fn try_from(raw: RawImpactFactor) -> ImpactResult<Self> {
        ImpactFactor::new(raw.value, raw.min, raw.max)
    }
}

impl ImpactFactor {
    /// Build a factor, rejecting non-finite numbers and inverted bounds.
    pub fn new(value: f64, min: f64, max: f64) -> ImpactResult<Self> {
        if !(value.is_finite() && min.is_finite() && max.is_finite()) {
            return Err(ImpactError::NonFinite(format!(
                "impact factor ({value}, {min}, {max})"
            )));
        }
        if min > value || value > max {
            return Err(ImpactError::InvalidBounds {
                attribute: "impact factor".into(),
                detail: format!("expected {min} <= {value} <= {max}"),
            });
        }
        Ok(Self { value, min, max })
    }

    /// A factor with no uncertainty.
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            min: value,
            max: value,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.min == self.value && self.value == self.max
    }

    pub fn is_non_negative(&self) -> bool {
        self.min >= 0.0
    }

    /// Width of the interval.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Bound-wise product of two non-negative intervals.
    pub fn checked_mul(&self, other: &ImpactFactor) -> ImpactResult<ImpactFactor> {
        require_non_negative("product", self)?;
        require_non_negative("product", other)?;
        Ok(ImpactFactor {
            value: self.value * other.value,
            min: self.min * other.min,
            max: self.max * other.max,
        })
    }

    /// Quotient of two non-negative intervals with opposing-bound pairing.
    pub fn checked_div(&self, divisor: &ImpactFactor) -> ImpactResult<ImpactFactor> {
        require_non_negative("quotient", self)?;
        require_non_negative("quotient", divisor)?;
        if divisor.min <= 0.0 {
            return Err(ImpactError::DivisionByZero {
                divisor_min: divisor.min,
            });
        }
        Ok(ImpactFactor {
            value: self.value / divisor.value,
            min: self.min / divisor.max,
            max: self.max / divisor.min,
        })
    }

    /// Multiply every bound by a non-negative constant.
    pub fn scale(&self, k: f64) -> ImpactResult<ImpactFactor> {
        if !(k.is_finite() && k >= 0.0) {
            return Err(ImpactError::NegativeOperand {
                operation: "scale",
                value: k,
            });
        }
        Ok(ImpactFactor {
            value: self.value * k,
            min: self.min * k,
            max: self.max * k,
        })
    }
}

impl Add for ImpactFactor {
    type Output = ImpactFactor;

    fn add(self, rhs: ImpactFactor) -> ImpactFactor {
        ImpactFactor {
            value: self.value + rhs.value,
            min: self.min + rhs.min,
            max: self.max + rhs.max,
        }
    }
}

impl From<f64> for ImpactFactor {
    fn from(value: f64) -> Self {
        ImpactFactor::exact(value)
    }
}

fn require_non_negative(operation: &'static str, f: &ImpactFactor) -> ImpactResult<()> {
    if f.min < 0.0 {
        return Err(ImpactError::NegativeOperand {
            operation,
            value: f.min,
        });
    }
    Ok(())
}
