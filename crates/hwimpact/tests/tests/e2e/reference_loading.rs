//! End-to-end test: dataset integrity at load time and process-wide install.

use std::sync::Arc;

use hwimpact_engine::{Component, ImpactContext, RamComponent};
use hwimpact_reference::{
    install, installed, GpuSpecTable, RamManufactureTable, ReferenceError, ReferenceTable,
    GPU_TABLE, RAM_TABLE,
};
use hwimpact_tests::{archetypes, factors, reference, GPU_CSV, RAM_CSV};
use hwimpact_types::ImpactKind;

#[test]
fn fixtures_load_cleanly() {
    let data = reference().unwrap();
    assert_eq!(data.ram().len(), 5);
    assert_eq!(data.ram().manufacturers(), ["Samsung", "Micron", "SK Hynix"]);
    assert_eq!(data.gpu().len(), 3);
}

#[test]
fn missing_column_fails_at_load() {
    let csv = "manufacturer,density\nSamsung,1.25\n";
    let raw = ReferenceTable::from_csv_reader(RAM_TABLE, csv.as_bytes()).unwrap();

    let err = RamManufactureTable::from_table(&raw).unwrap_err();

    assert!(err.is_dataset_integrity());
    assert!(matches!(err, ReferenceError::MissingColumn { ref column, .. } if column == "process"));
}

#[test]
fn header_only_table_fails_at_load() {
    let err = ReferenceTable::from_csv_reader(GPU_TABLE, "name,tdp,die_size,vram_capacity,pcb_size\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, ReferenceError::EmptyTable { .. }));
}

#[test]
fn non_numeric_density_fails_at_load() {
    let csv = "manufacturer,process,density\nSamsung,20,dense\n";
    let raw = ReferenceTable::from_csv_reader(RAM_TABLE, csv.as_bytes()).unwrap();
    let err = RamManufactureTable::from_table(&raw).unwrap_err();
    assert!(err.is_dataset_integrity());
}

#[test]
fn installed_data_is_shared_once() {
    let ram = ReferenceTable::from_csv_reader(RAM_TABLE, RAM_CSV.as_bytes()).unwrap();
    let gpu = ReferenceTable::from_csv_reader(GPU_TABLE, GPU_CSV.as_bytes()).unwrap();
    let data = hwimpact_reference::ReferenceData::new(
        RamManufactureTable::from_table(&ram).unwrap(),
        GpuSpecTable::from_table(&gpu).unwrap(),
    );

    let shared = install(data.clone()).unwrap();
    assert!(matches!(install(data), Err(ReferenceError::AlreadyInstalled)));
    assert!(Arc::ptr_eq(&shared, &installed().unwrap()));

    let ctx = ImpactContext::from_installed(Arc::new(archetypes()), Arc::new(factors())).unwrap();
    let mut ram = RamComponent::new(ctx).unwrap();
    ram.density.set_input(1.25);
    assert!(ram.impact_embedded(ImpactKind::Gwp).is_ok());
}
