//! Completion heuristics over the reference datasets.
//!
//! Lookups return records; the owning component distributes the fields onto
//! its slots. Nothing here mutates a slot.

use hwimpact_reference::{GpuSpecRow, NameMatcher, RamManufactureRow, ReferenceData};
use hwimpact_types::Completion;
use tracing::{debug, warn};

/// Outcome of a filter + aggregate lookup for one numeric attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// A single candidate row.
    Exact { value: f64, source: String },
    /// Several candidates: mean value, extreme bounds.
    Aggregate {
        value: f64,
        min: f64,
        max: f64,
        rows: usize,
    },
    /// Nothing to add: no candidate, or no reduction over an existing value.
    Unchanged,
}

impl Resolution {
    pub fn into_completion(self) -> Option<Completion<f64>> {
        match self {
            Resolution::Exact { value, source } => Some(Completion::exact(value, source)),
            Resolution::Aggregate {
                value,
                min,
                max,
                rows,
            } => Some(Completion::bounded(
                value,
                min,
                max,
                format!("Average of {rows} rows"),
            )),
            Resolution::Unchanged => None,
        }
    }
}

/// How a free-text manufacturer related to the dataset's labels.
#[derive(Clone, Debug, PartialEq)]
pub enum ManufacturerMatch {
    NotGiven,
    Canonical(String),
    Unmatched,
}

/// Result of the RAM density lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityLookup {
    pub manufacturer: ManufacturerMatch,
    pub density: Resolution,
}

/// Fields copied from the nearest GPU reference row.
#[derive(Clone, Debug, PartialEq)]
pub struct GpuNameLookup {
    pub source: String,
    pub tdp: Option<f64>,
    pub die_size: Option<f64>,
    pub vram_capacity: Option<f64>,
    pub pcb_size: Option<f64>,
}

impl From<&GpuSpecRow> for GpuNameLookup {
    fn from(row: &GpuSpecRow) -> Self {
        Self {
            source: row.name.clone(),
            tdp: row.tdp,
            die_size: row.die_size,
            vram_capacity: row.vram_capacity,
            pcb_size: row.pcb_size,
        }
    }
}

/// Resolves unknown attributes from shared reference data.
pub struct CompletionResolver<'a> {
    reference: &'a ReferenceData,
    matcher: NameMatcher,
}

impl<'a> CompletionResolver<'a> {
    pub fn new(reference: &'a ReferenceData, min_score: i64) -> Self {
        Self {
            reference,
            matcher: NameMatcher::new(min_score),
        }
    }

    /// Filter the RAM table by manufacturer and process, then aggregate
    /// density over the remaining rows.
    pub fn ram_density(
        &self,
        manufacturer: Option<&str>,
        process: Option<f64>,
        density_has_value: bool,
    ) -> DensityLookup {
        let table = self.reference.ram();
        let mut candidates: Vec<&RamManufactureRow> = table.rows().iter().collect();

        let manufacturer_match = match manufacturer {
            None => ManufacturerMatch::NotGiven,
            Some(input) => match table.canonical_manufacturer(input, &self.matcher) {
                Some(label) => {
                    candidates.retain(|r| r.manufacturer == label);
                    ManufacturerMatch::Canonical(label.to_string())
                }
                None => {
                    warn!(manufacturer = input, "No reference manufacturer matches");
                    candidates.clear();
                    ManufacturerMatch::Unmatched
                }
            },
        };

        if let Some(process) = process {
            candidates.retain(|r| r.process.is_some_and(|p| (p - process).abs() < 1e-9));
        }

        debug!(
            candidates = candidates.len(),
            total = table.len(),
            "RAM density candidates filtered"
        );

        DensityLookup {
            manufacturer: manufacturer_match,
            density: aggregate(
                &candidates,
                table.len(),
                density_has_value,
                |r| r.density,
                |r| r.manufacturer.clone(),
            ),
        }
    }

    /// Nearest GPU by name.
    pub fn gpu_by_name(&self, name: &str) -> Option<GpuNameLookup> {
        let found = self
            .reference
            .gpu()
            .closest_by_name(name, &self.matcher)
            .map(GpuNameLookup::from);
        match &found {
            Some(lookup) => debug!(query = name, matched = %lookup.source, "GPU matched by name"),
            None => warn!(query = name, "No reference GPU matches name"),
        }
        found
    }
}

/// Collapse filtered candidates into a [`Resolution`].
///
/// `total_rows` is the unfiltered table size: a filter that kept every row
/// adds nothing over a slot that already has a value.
pub fn aggregate<R, V, L>(
    candidates: &[&R],
    total_rows: usize,
    slot_has_value: bool,
    value_of: V,
    label_of: L,
) -> Resolution
where
    V: Fn(&R) -> f64,
    L: Fn(&R) -> String,
{
    match candidates.len() {
        1 => Resolution::Exact {
            value: value_of(candidates[0]),
            source: label_of(candidates[0]),
        },
        0 => Resolution::Unchanged,
        n if n == total_rows && slot_has_value => Resolution::Unchanged,
        n => {
            let values: Vec<f64> = candidates.iter().map(|r| value_of(r)).collect();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / n as f64;
            Resolution::Aggregate {
                value: mean.clamp(min, max),
                min,
                max,
                rows: n,
            }
        }
    }
}
