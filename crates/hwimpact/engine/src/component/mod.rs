//! Hardware components: named attribute slots plus a use-phase block.

pub mod gpu;
pub mod ram;

use hwimpact_reference::{Archetype, ArchetypeField};
use hwimpact_types::{AttributeSlot, ComponentKind, ComputedImpact, ImpactKind, ImpactResult};

use crate::error::EngineResult;
use crate::usage::Usage;

pub use gpu::GpuComponent;
pub use ram::RamComponent;

/// A component whose impacts can be computed.
///
/// Both methods take `&mut self`: reading an unset attribute may complete it.
pub trait Component {
    fn kind(&self) -> ComponentKind;

    fn usage(&self) -> &Usage;

    fn usage_mut(&mut self) -> &mut Usage;

    /// Manufacture impact.
    fn impact_embedded(&mut self, kind: ImpactKind) -> EngineResult<ComputedImpact>;

    /// Use-phase impact over the component's use time.
    fn impact_use(&mut self, kind: ImpactKind) -> EngineResult<ComputedImpact>;
}

/// Numeric slot named `<kind>.<attr>`, seeded from the archetype's
/// default/min/max when present.
pub(crate) fn numeric_slot(
    kind: ComponentKind,
    attr: &str,
    unit: Option<&str>,
    archetype: Option<&Archetype>,
) -> ImpactResult<AttributeSlot<f64>> {
    let mut slot = AttributeSlot::new(format!("{kind}.{attr}"));
    if let Some(unit) = unit {
        slot = slot.with_unit(unit);
    }
    match archetype.and_then(|a| a.number(attr, ArchetypeField::Default)) {
        Some(default) => {
            let min = archetype.and_then(|a| a.number(attr, ArchetypeField::Min));
            let max = archetype.and_then(|a| a.number(attr, ArchetypeField::Max));
            slot.with_default(default, min, max)
        }
        None => Ok(slot),
    }
}

/// Text slot named `<kind>.<attr>`; text attributes carry no bounds.
pub(crate) fn text_slot(
    kind: ComponentKind,
    attr: &str,
    archetype: Option<&Archetype>,
) -> ImpactResult<AttributeSlot<String>> {
    let slot = AttributeSlot::new(format!("{kind}.{attr}"));
    match archetype.and_then(|a| a.text(attr, ArchetypeField::Default)) {
        Some(default) => slot.with_default(default.to_string(), None, None),
        None => Ok(slot),
    }
}

/// Collect the warnings of every listed slot, in order.
pub(crate) fn collect_warnings<'a, I>(slots: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    slots.into_iter().flatten().cloned().collect()
}
