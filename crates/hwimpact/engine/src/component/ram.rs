//! RAM component.
//!
//! Embedded impact scales with die area (`capacity / density`). An unknown
//! density is completed from the RAM manufacture dataset, filtered by the
//! manufacturer and process when those are known.

use hwimpact_reference::{Archetype, FACTOR_DIE_IMPACT, FACTOR_IMPACT, ITEM_RAM};
use hwimpact_types::{
    min_significant_figures, AttributeSlot, ComponentKind, ComputedImpact, ImpactKind,
};
use tracing::{debug, warn};

use crate::calculator::ImpactCalculator;
use crate::completion::{ManufacturerMatch, Resolution};
use crate::component::{collect_warnings, numeric_slot, text_slot, Component};
use crate::consumption::ConsumptionProfileModel;
use crate::context::ImpactContext;
use crate::error::EngineResult;
use crate::usage::Usage;

/// Name of the density completion procedure.
pub const COMPLETE_DENSITY: &str = "density from manufacture dataset";

/// Warning attached to modeled RAM consumption.
pub const ONE_STRIP_WARNING: &str = "value for one ram strip";

#[derive(Clone, Debug)]
pub struct RamComponent {
    ctx: ImpactContext,
    /// Process node (nm).
    pub process: AttributeSlot<f64>,
    pub manufacturer: AttributeSlot<String>,
    /// Capacity (GB).
    pub capacity: AttributeSlot<f64>,
    /// Die density (GB/cm²).
    pub density: AttributeSlot<f64>,
    pub usage: Usage,
}

impl RamComponent {
    /// Build from the configured default RAM archetype.
    pub fn new(ctx: ImpactContext) -> EngineResult<Self> {
        let name = ctx.config().default_ram_archetype.clone();
        Self::from_archetype(ctx, &name)
    }

    pub fn from_archetype(ctx: ImpactContext, name: &str) -> EngineResult<Self> {
        let archetype = ctx.archetypes().archetype(name, ComponentKind::Ram)?.clone();
        Self::build(ctx, Some(&archetype))
    }

    /// A component with no defaults: every attribute must be supplied or
    /// completed.
    pub fn empty(ctx: ImpactContext) -> EngineResult<Self> {
        Self::build(ctx, None)
    }

    fn build(ctx: ImpactContext, archetype: Option<&Archetype>) -> EngineResult<Self> {
        let kind = ComponentKind::Ram;
        let mut usage = Usage::from_archetype(kind, archetype, &ctx.config().usage)?;
        usage
            .hours_electrical_consumption
            .add_warning(ONE_STRIP_WARNING);
        Ok(Self {
            process: numeric_slot(kind, "process", Some("nm"), archetype)?,
            manufacturer: text_slot(kind, "manufacturer", archetype)?,
            capacity: numeric_slot(kind, "capacity", Some("GB"), archetype)?,
            density: numeric_slot(kind, "density", Some("GB/cm2"), archetype)?
                .with_procedure(COMPLETE_DENSITY),
            usage,
            ctx,
        })
    }

    /// Complete density from the manufacture dataset, at most once.
    ///
    /// Reads manufacturer and process as they are, snaps the manufacturer to
    /// its canonical label, then fills density from the remaining rows.
    pub fn complete_density(&mut self) -> EngineResult<()> {
        if !self.density.needs_completion() {
            return Ok(());
        }

        let manufacturer = self.manufacturer.value().cloned();
        let process = self.process.value().copied();
        let lookup = self.ctx.resolver().ram_density(
            manufacturer.as_deref(),
            process,
            self.density.has_value(),
        );

        let averaged = match &lookup.density {
            Resolution::Aggregate { rows, .. } => Some(*rows),
            _ => None,
        };
        // Apply the fallible part first so a failure leaves no partial edits.
        if let Some(completion) = lookup.density.into_completion() {
            self.density.apply_completion(completion)?;
        }
        if let Some(rows) = averaged {
            warn!(rows, "RAM density averaged over reference rows");
            self.density
                .add_warning(format!("density averaged over {rows} reference rows"));
        }

        match lookup.manufacturer {
            ManufacturerMatch::Canonical(label) if manufacturer.as_deref() != Some(label.as_str()) => {
                debug!(from = ?manufacturer, to = %label, "Manufacturer snapped to reference label");
                self.manufacturer.set_changed(label);
            }
            ManufacturerMatch::Unmatched => {
                let input = manufacturer.unwrap_or_default();
                self.manufacturer
                    .add_warning(format!("manufacturer {input} not found in reference data"));
            }
            _ => {}
        }
        self.density.mark_completion_attempted();
        Ok(())
    }

    /// Density after completion, without materializing anything else.
    pub fn resolved_density(&mut self) -> EngineResult<f64> {
        self.complete_density()?;
        Ok(*self.density.resolve()?)
    }

    fn consumption_model(&mut self) -> EngineResult<ConsumptionProfileModel> {
        let capacity = *self.capacity.resolve()?;
        ConsumptionProfileModel::for_ram(capacity, &self.ctx.config().consumption)
    }
}

impl Component for RamComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Ram
    }

    fn usage(&self) -> &Usage {
        &self.usage
    }

    fn usage_mut(&mut self) -> &mut Usage {
        &mut self.usage
    }

    fn impact_embedded(&mut self, kind: ImpactKind) -> EngineResult<ComputedImpact> {
        let record = self.ctx.factors().factor(ITEM_RAM, kind)?;
        let die_impact = record.get(FACTOR_DIE_IMPACT)?;
        let base_impact = record.get(FACTOR_IMPACT)?;

        self.complete_density()?;
        let capacity = self.capacity.resolve_factor()?;
        let density = self.density.resolve_factor()?;

        let impact = ImpactCalculator::manufacture_by_density(
            &capacity,
            &density,
            &die_impact,
            &base_impact,
        )?;
        let significant_figures =
            min_significant_figures([density.value, die_impact.value, base_impact.value]);
        let warnings = collect_warnings([
            self.capacity.warnings(),
            self.density.warnings(),
            self.manufacturer.warnings(),
        ]);
        debug!(%kind, value = impact.value, significant_figures, "RAM embedded impact");
        Ok(ImpactCalculator::embedded_result(
            impact,
            significant_figures,
            warnings,
        ))
    }

    fn impact_use(&mut self, kind: ImpactKind) -> EngineResult<ComputedImpact> {
        if self.usage.needs_consumption() {
            let model = self.consumption_model()?;
            let significant_figures = self.ctx.config().consumption.significant_figures;
            self.usage.complete_consumption(&model, significant_figures)?;
        }
        self.usage.impact_use(kind, self.ctx.factors())
    }
}
