use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environmental impact criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactKind {
    /// Global warming potential (kgCO2eq)
    Gwp,
    /// Abiotic depletion potential (kgSbeq)
    Adp,
    /// Primary energy (MJ)
    Pe,
}

impl ImpactKind {
    pub const ALL: [ImpactKind; 3] = [ImpactKind::Gwp, ImpactKind::Adp, ImpactKind::Pe];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactKind::Gwp => "gwp",
            ImpactKind::Adp => "adp",
            ImpactKind::Pe => "pe",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ImpactKind::Gwp => "kgCO2eq",
            ImpactKind::Adp => "kgSbeq",
            ImpactKind::Pe => "MJ",
        }
    }
}

impl fmt::Display for ImpactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gwp" => Ok(ImpactKind::Gwp),
            "adp" => Ok(ImpactKind::Adp),
            "pe" => Ok(ImpactKind::Pe),
            other => Err(format!("unknown impact kind: {other}")),
        }
    }
}

/// Kind of hardware component an archetype or factor applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Ram,
    Gpu,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Ram => "ram",
            ComponentKind::Gpu => "gpu",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
