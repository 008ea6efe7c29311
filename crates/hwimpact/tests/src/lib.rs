//! Shared fixtures for the cross-crate end-to-end and property tests.

use std::sync::Arc;

use hwimpact_engine::ImpactContext;
use hwimpact_reference::{
    Archetype, GpuSpecTable, ImpactFactorProvider, InMemoryArchetypes, RamManufactureTable,
    ReferenceData, ReferenceResult, ReferenceTable, StaticFactorTable, FACTOR_DIE_IMPACT,
    FACTOR_IMPACT, GPU_TABLE, ITEM_ELECTRICITY, ITEM_GPU, ITEM_RAM, RAM_TABLE,
};
use hwimpact_types::{ImpactFactor, ImpactKind};

pub const RAM_CSV: &str = "\
manufacturer,process,density
Samsung,30,0.625
Samsung,20,1.25
Micron,25,1.0
Micron,20,1.5
SK Hynix,20,1.3
";

pub const GPU_CSV: &str = "\
name,tdp,die_size,vram_capacity,pcb_size
NVIDIA GeForce RTX 3080,320,628,10,285
NVIDIA GeForce RTX 4090,450,609,24,304
AMD Radeon RX 7900 XTX,355,529,24,287
";

pub const ARCHETYPES_JSON: &str = r#"[
  {
    "name": "DEFAULT",
    "kind": "ram",
    "attributes": {
      "capacity": { "default": 32, "min": 1, "max": 128 },
      "usage.use_time": { "default": 26280, "min": 8760, "max": 52560 }
    }
  },
  {
    "name": "DEFAULT",
    "kind": "gpu",
    "attributes": {
      "name": { "default": "NVIDIA GeForce RTX 4090" },
      "tdp": { "default": 300, "min": 75, "max": 600 },
      "vram_density": { "default": 1.625, "min": 1.0, "max": 2.0 }
    }
  }
]"#;

/// Reference data parsed from the CSV fixtures.
pub fn reference() -> ReferenceResult<Arc<ReferenceData>> {
    let ram = ReferenceTable::from_csv_reader(RAM_TABLE, RAM_CSV.as_bytes())?;
    let gpu = ReferenceTable::from_csv_reader(GPU_TABLE, GPU_CSV.as_bytes())?;
    Ok(ReferenceData::new(
        RamManufactureTable::from_table(&ram)?,
        GpuSpecTable::from_table(&gpu)?,
    )
    .into_shared())
}

pub fn archetypes() -> InMemoryArchetypes {
    let parsed: Vec<Archetype> =
        serde_json::from_str(ARCHETYPES_JSON).unwrap_or_else(|e| panic!("fixture: {e}"));
    parsed.into_iter().collect()
}

/// Impact factors for every item and impact kind.
pub fn factors() -> StaticFactorTable {
    let mut table = StaticFactorTable::new();
    for kind in ImpactKind::ALL {
        let (ram_die, ram_base, gpu_die, gpu_base, elec) = match kind {
            ImpactKind::Gwp => (0.4, 2.0, 1.97, 23.0, exact_or_range(0.38, 0.023, 1.13)),
            ImpactKind::Adp => (6.3e-5, 1.69e-3, 5.8e-7, 1.4e-3, exact_or_range(6.42e-8, 1.3e-8, 1.5e-7)),
            ImpactKind::Pe => (27.3, 5.7, 36.4, 310.0, exact_or_range(11.289, 0.013, 14.1)),
        };
        table.insert(ITEM_RAM, kind, FACTOR_DIE_IMPACT, ImpactFactor::exact(ram_die));
        table.insert(ITEM_RAM, kind, FACTOR_IMPACT, ImpactFactor::exact(ram_base));
        table.insert(ITEM_GPU, kind, FACTOR_DIE_IMPACT, ImpactFactor::exact(gpu_die));
        table.insert(ITEM_GPU, kind, FACTOR_IMPACT, ImpactFactor::exact(gpu_base));
        table.insert(ITEM_ELECTRICITY, kind, FACTOR_IMPACT, elec);
    }
    table
}

fn exact_or_range(value: f64, min: f64, max: f64) -> ImpactFactor {
    ImpactFactor::new(value, min, max).unwrap_or(ImpactFactor::exact(value))
}

pub fn context() -> ImpactContext {
    context_with(Arc::new(factors()))
}

pub fn context_with(factors: Arc<dyn ImpactFactorProvider>) -> ImpactContext {
    let reference = reference().unwrap_or_else(|e| panic!("fixture: {e}"));
    ImpactContext::new(reference, Arc::new(archetypes()), factors)
}
