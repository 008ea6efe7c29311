//! GPU component.
//!
//! Embedded impact covers the GPU die, the VRAM (modeled as RAM dies) and
//! the board. Die size, VRAM capacity, TDP and PCB size can all be completed
//! in one lookup of the GPU spec dataset by name.

use hwimpact_reference::{Archetype, FACTOR_DIE_IMPACT, FACTOR_IMPACT, ITEM_GPU, ITEM_RAM};
use hwimpact_types::{
    min_significant_figures, AttributeSlot, ComponentKind, ComputedImpact, ImpactKind,
};
use tracing::debug;

use crate::calculator::ImpactCalculator;
use crate::component::{collect_warnings, numeric_slot, text_slot, Component};
use crate::consumption::ConsumptionProfileModel;
use crate::context::ImpactContext;
use crate::error::EngineResult;
use crate::usage::Usage;

/// Name of the shared name-based completion procedure.
pub const COMPLETE_FROM_NAME: &str = "specs from gpu name";

#[derive(Clone, Debug)]
pub struct GpuComponent {
    ctx: ImpactContext,
    pub name: AttributeSlot<String>,
    pub manufacturer: AttributeSlot<String>,
    pub family: AttributeSlot<String>,
    /// Descriptive only; never read by the impact formulas.
    pub variant: AttributeSlot<String>,
    pub architecture: AttributeSlot<String>,
    pub pcie: AttributeSlot<String>,
    /// Die process node (nm), descriptive.
    pub process: AttributeSlot<f64>,
    /// Die size (mm²).
    pub die_size: AttributeSlot<f64>,
    /// VRAM capacity (GB).
    pub vram_capacity: AttributeSlot<f64>,
    /// VRAM die density (GB/cm²).
    pub vram_density: AttributeSlot<f64>,
    /// Thermal design power (W).
    pub tdp: AttributeSlot<f64>,
    /// Board size (mm).
    pub pcb_size: AttributeSlot<f64>,
    pub usage: Usage,
}

impl GpuComponent {
    /// Build from the configured default GPU archetype.
    pub fn new(ctx: ImpactContext) -> EngineResult<Self> {
        let name = ctx.config().default_gpu_archetype.clone();
        Self::from_archetype(ctx, &name)
    }

    pub fn from_archetype(ctx: ImpactContext, name: &str) -> EngineResult<Self> {
        let archetype = ctx.archetypes().archetype(name, ComponentKind::Gpu)?.clone();
        Self::build(ctx, Some(&archetype))
    }

    pub fn empty(ctx: ImpactContext) -> EngineResult<Self> {
        Self::build(ctx, None)
    }

    fn build(ctx: ImpactContext, archetype: Option<&Archetype>) -> EngineResult<Self> {
        let kind = ComponentKind::Gpu;
        let from_name = |attr: &str, unit: &str| {
            numeric_slot(kind, attr, Some(unit), archetype)
                .map(|slot| slot.with_procedure(COMPLETE_FROM_NAME))
        };

        let mut vram_density = numeric_slot(kind, "vram_density", Some("GB/cm2"), archetype)?;
        if !vram_density.has_value() {
            vram_density = vram_density.with_default(ctx.config().default_vram_density, None, None)?;
        }

        Ok(Self {
            name: text_slot(kind, "name", archetype)?,
            manufacturer: text_slot(kind, "manufacturer", archetype)?,
            family: text_slot(kind, "family", archetype)?,
            variant: text_slot(kind, "variant", archetype)?,
            architecture: text_slot(kind, "architecture", archetype)?,
            pcie: text_slot(kind, "pcie", archetype)?,
            process: numeric_slot(kind, "process", Some("nm"), archetype)?,
            die_size: from_name("die_size", "mm2")?,
            vram_capacity: from_name("vram_capacity", "GB")?,
            vram_density,
            tdp: from_name("tdp", "W")?,
            pcb_size: from_name("pcb_size", "mm")?,
            usage: Usage::from_archetype(kind, archetype, &ctx.config().usage)?,
            ctx,
        })
    }

    /// Fill die size, VRAM capacity, TDP and PCB size from the spec row
    /// nearest to the GPU name. Runs at most once per successful lookup and
    /// waits until a name is known; slots the caller set are left alone.
    pub fn complete_from_name(&mut self) -> EngineResult<()> {
        let pending = [&self.die_size, &self.vram_capacity, &self.tdp, &self.pcb_size]
            .iter()
            .any(|slot| slot.needs_completion());
        if !pending {
            return Ok(());
        }

        // Without a name there is nothing to look up yet; stay open so a name
        // supplied later still completes the specs.
        let Some(name) = self.name.value().cloned() else {
            debug!("GPU name unknown, keeping archetype values");
            return Ok(());
        };
        let Some(lookup) = self.ctx.resolver().gpu_by_name(&name) else {
            self.name
                .add_warning(format!("gpu {name} not found in reference data"));
            self.mark_specs_attempted();
            return Ok(());
        };

        let source = Some(lookup.source.as_str());
        for (slot, value) in [
            (&mut self.die_size, lookup.die_size),
            (&mut self.vram_capacity, lookup.vram_capacity),
            (&mut self.tdp, lookup.tdp),
            (&mut self.pcb_size, lookup.pcb_size),
        ] {
            if let Some(value) = value {
                slot.set_completed(value, source, None, None)?;
            }
        }
        self.mark_specs_attempted();
        Ok(())
    }

    fn mark_specs_attempted(&mut self) {
        for slot in [
            &mut self.die_size,
            &mut self.vram_capacity,
            &mut self.tdp,
            &mut self.pcb_size,
        ] {
            slot.mark_completion_attempted();
        }
    }

    fn consumption_model(&mut self) -> EngineResult<ConsumptionProfileModel> {
        self.complete_from_name()?;
        let tdp = *self.tdp.resolve()?;
        ConsumptionProfileModel::for_gpu(tdp, &self.ctx.config().consumption)
    }
}

impl Component for GpuComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Gpu
    }

    fn usage(&self) -> &Usage {
        &self.usage
    }

    fn usage_mut(&mut self) -> &mut Usage {
        &mut self.usage
    }

    fn impact_embedded(&mut self, kind: ImpactKind) -> EngineResult<ComputedImpact> {
        let gpu = self.ctx.factors().factor(ITEM_GPU, kind)?;
        let gpu_die_impact = gpu.get(FACTOR_DIE_IMPACT)?;
        let gpu_impact = gpu.get(FACTOR_IMPACT)?;
        let ram_die_impact = self
            .ctx
            .factors()
            .factor(ITEM_RAM, kind)?
            .get(FACTOR_DIE_IMPACT)?;

        self.complete_from_name()?;
        let die_size = self.die_size.resolve_factor()?;
        let vram_capacity = self.vram_capacity.resolve_factor()?;
        let vram_density = self.vram_density.resolve_factor()?;

        let impact = ImpactCalculator::gpu_manufacture(
            &die_size,
            &vram_capacity,
            &vram_density,
            &gpu_die_impact,
            &ram_die_impact,
            &gpu_impact,
        )?;
        let significant_figures = min_significant_figures([
            die_size.value,
            vram_density.value,
            gpu_die_impact.value,
            ram_die_impact.value,
            gpu_impact.value,
        ]);
        let warnings = collect_warnings([
            self.name.warnings(),
            self.die_size.warnings(),
            self.vram_capacity.warnings(),
            self.vram_density.warnings(),
        ]);
        debug!(%kind, value = impact.value, significant_figures, "GPU embedded impact");
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
