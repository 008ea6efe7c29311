//! Use-phase inputs of a component.

use std::collections::BTreeMap;

use hwimpact_reference::{
    Archetype, ArchetypeField, ImpactFactorProvider, FACTOR_IMPACT, ITEM_ELECTRICITY,
};
use hwimpact_types::{
    min_significant_figures, AttributeSlot, ComponentKind, ComputedImpact, ImpactFactor,
    ImpactKind, ImpactResult,
};
use tracing::debug;

use crate::calculator::ImpactCalculator;
use crate::component::numeric_slot;
use crate::config::UsageDefaults;
use crate::consumption::{ConsumptionProfileModel, WorkloadInput};
use crate::error::EngineResult;

/// Procedure name and provenance of modeled consumption.
pub const CONSUMPTION_PROFILE: &str = "consumption profile";

/// Electrical consumption, use time and workload of one component.
#[derive(Clone, Debug)]
pub struct Usage {
    /// Average draw in W.
    pub hours_electrical_consumption: AttributeSlot<f64>,
    /// Lifetime use in hours.
    pub use_time: AttributeSlot<f64>,
    /// Load percentage, constant or by segment.
    pub time_workload: AttributeSlot<WorkloadInput>,
    elec_factors: BTreeMap<ImpactKind, ImpactFactor>,
}

impl Usage {
    pub fn from_archetype(
        kind: ComponentKind,
        archetype: Option<&Archetype>,
        defaults: &UsageDefaults,
    ) -> ImpactResult<Self> {
        let hours_electrical_consumption =
            numeric_slot(kind, "usage.hours_electrical_consumption", Some("W"), archetype)?
                .with_procedure(CONSUMPTION_PROFILE);

        let mut use_time = numeric_slot(kind, "usage.use_time", Some("hours"), archetype)?;
        if !use_time.has_value() {
            use_time = use_time.with_default(defaults.use_time_hours, None, None)?;
        }

        let workload = |field| archetype.and_then(|a| a.number("usage.time_workload", field));
        let time_workload = AttributeSlot::new(format!("{kind}.usage.time_workload"))
            .with_unit("%")
            .with_default(
                WorkloadInput::Constant(
                    workload(ArchetypeField::Default).unwrap_or(defaults.time_workload),
                ),
                workload(ArchetypeField::Min).map(WorkloadInput::Constant),
                workload(ArchetypeField::Max).map(WorkloadInput::Constant),
            )?;

        Ok(Self {
            hours_electrical_consumption,
            use_time,
            time_workload,
            elec_factors: BTreeMap::new(),
        })
    }

    /// Override the electricity factor for one impact kind.
    pub fn set_elec_factor(&mut self, kind: ImpactKind, factor: ImpactFactor) {
        self.elec_factors.insert(kind, factor);
    }

    /// The override when present, else the provider's electricity factor.
    pub fn elec_factor(
        &self,
        kind: ImpactKind,
        factors: &dyn ImpactFactorProvider,
    ) -> EngineResult<ImpactFactor> {
        if let Some(factor) = self.elec_factors.get(&kind) {
            return Ok(*factor);
        }
        Ok(factors.factor(ITEM_ELECTRICITY, kind)?.get(FACTOR_IMPACT)?)
    }

    /// Consumption has no value yet and must be modeled.
    pub fn needs_consumption(&self) -> bool {
        !self.hours_electrical_consumption.has_value()
    }

    /// Fill consumption from the model and the workload, rounded and exact.
    /// A failed attempt leaves the slot open for the next call.
    pub fn complete_consumption(
        &mut self,
        model: &ConsumptionProfileModel,
        significant_figures: u32,
    ) -> EngineResult<()> {
        if !self.hours_electrical_consumption.needs_completion() {
            return Ok(());
        }
        let workload = self.time_workload.resolve()?.clone();
        let modeled = model.modeled_consumption(&workload, significant_figures)?;
        debug!(
            slot = self.hours_electrical_consumption.name(),
            watts = modeled.value,
            "Consumption modeled from workload"
        );
        self.hours_electrical_consumption.set_completed(
            modeled.value,
            Some(CONSUMPTION_PROFILE),
            None,
            None,
        )?;
        // Only a successful model run closes the slot; a bad workload can be
        // corrected and retried.
        self.hours_electrical_consumption.mark_completion_attempted();
        Ok(())
    }

    /// `elec_factor * (consumption / 1000) * use_time`
    pub fn impact_use(
        &mut self,
        kind: ImpactKind,
        factors: &dyn ImpactFactorProvider,
    ) -> EngineResult<ComputedImpact> {
        let elec_factor = self.elec_factor(kind, factors)?;
        let consumption = self.hours_electrical_consumption.resolve_factor()?;
        let use_time = self.use_time.resolve_factor()?;

        let impact = ImpactCalculator::use_phase(&elec_factor, &consumption, &use_time)?;
        let significant_figures =
            min_significant_figures([consumption.value, use_time.value, elec_factor.value]);
        let warnings = crate::component::collect_warnings([
            self.hours_electrical_consumption.warnings(),
            self.use_time.warnings(),
        ]);
        Ok(ImpactCalculator::use_result(
            impact,
            significant_figures,
            warnings,
        ))
    }
}
