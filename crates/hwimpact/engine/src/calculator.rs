//! Impact formulas over [`ImpactFactor`] intervals.
//!
//! Every operand is non-negative, so sums and products are computed bound by
//! bound. Division delegates to [`ImpactFactor::checked_div`], which pairs
//! opposing bounds.

use hwimpact_types::{ComputedImpact, ImpactFactor, ImpactResult, END_OF_LIFE_WARNING};

/// Die sizes are given in mm², die impacts per cm².
const MM2_TO_CM2: f64 = 0.01;

/// Consumption is given in W, electricity factors per kWh.
const W_TO_KW: f64 = 0.001;

/// Stateless impact formulas.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImpactCalculator;

impl ImpactCalculator {
    /// `(capacity / density) * die_impact + base_impact`
    pub fn manufacture_by_density(
        capacity: &ImpactFactor,
        density: &ImpactFactor,
        die_impact: &ImpactFactor,
        base_impact: &ImpactFactor,
    ) -> ImpactResult<ImpactFactor> {
        let die_area = capacity.checked_div(density)?;
        Ok(die_area.checked_mul(die_impact)? + *base_impact)
    }

    /// `(die_size / 100) * die_impact`
    pub fn die_area_impact(
        die_size_mm2: &ImpactFactor,
        die_impact: &ImpactFactor,
    ) -> ImpactResult<ImpactFactor> {
        die_size_mm2.scale(MM2_TO_CM2)?.checked_mul(die_impact)
    }

    /// GPU die, plus VRAM modeled as RAM dies, plus the board.
    pub fn gpu_manufacture(
        die_size_mm2: &ImpactFactor,
        vram_capacity: &ImpactFactor,
        vram_density: &ImpactFactor,
        gpu_die_impact: &ImpactFactor,
        ram_die_impact: &ImpactFactor,
        gpu_base_impact: &ImpactFactor,
    ) -> ImpactResult<ImpactFactor> {
        let die = Self::die_area_impact(die_size_mm2, gpu_die_impact)?;
        let vram = vram_capacity
            .checked_div(vram_density)?
            .checked_mul(ram_die_impact)?;
        Ok(die + vram + *gpu_base_impact)
    }

    /// `elec_factor * (consumption / 1000) * use_time`
    pub fn use_phase(
        elec_factor: &ImpactFactor,
        consumption_w: &ImpactFactor,
        use_time_hours: &ImpactFactor,
    ) -> ImpactResult<ImpactFactor> {
        elec_factor
            .checked_mul(&consumption_w.scale(W_TO_KW)?)?
            .checked_mul(use_time_hours)
    }

    /// Package a manufacture impact. The end-of-life caveat always comes last.
    pub fn embedded_result(
        impact: ImpactFactor,
        significant_figures: u32,
        mut warnings: Vec<String>,
    ) -> ComputedImpact {
        warnings.push(END_OF_LIFE_WARNING.to_string());
        ComputedImpact::new(impact, significant_figures, warnings)
    }

    pub fn use_result(
        impact: ImpactFactor,
        significant_figures: u32,
        warnings: Vec<String>,
    ) -> ComputedImpact {
        ComputedImpact::new(impact, significant_figures, warnings)
    }
}
