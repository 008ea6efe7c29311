use serde::{Deserialize, Serialize};

use crate::interval::ImpactFactor;

/// Warning appended to every embedded-impact result.
pub const END_OF_LIFE_WARNING: &str = "End of life is not included in the calculation";

/// Result of an impact computation: value, precision, interval and caveats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedImpact {
    pub value: f64,
    pub significant_figures: u32,
    pub min: f64,
    pub max: f64,
    pub warnings: Vec<String>,
}

impl ComputedImpact {
    pub fn new(impact: ImpactFactor, significant_figures: u32, warnings: Vec<String>) -> Self {
        Self {
            value: impact.value,
            significant_figures,
            min: impact.min,
            max: impact.max,
            warnings,
        }
    }

    pub fn interval(&self) -> ImpactFactor {
        ImpactFactor {
            value: self.value,
            min: self.min,
            max: self.max,
        }
    }

    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|w| w == text)
    }
}

impl From<ComputedImpact> for (f64, u32, f64, f64, Vec<String>) {
    fn from(r: ComputedImpact) -> Self {
        (r.value, r.significant_figures, r.min, r.max, r.warnings)
    }
}
