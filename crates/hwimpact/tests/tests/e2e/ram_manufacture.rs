//! End-to-end test: RAM manufacture impact from archetype, completion and
//! factor tables.

use std::sync::Arc;

use hwimpact_engine::{Component, RamComponent};
use hwimpact_reference::{StaticFactorTable, FACTOR_DIE_IMPACT, FACTOR_IMPACT, ITEM_RAM};
use hwimpact_tests::{context, context_with};
use hwimpact_types::{ImpactFactor, ImpactKind, SlotStatus, END_OF_LIFE_WARNING};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn ram() -> RamComponent {
    RamComponent::new(context()).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn known_inputs_give_expected_value_and_single_warning() {
    let mut ram = ram();
    ram.capacity.set_input(16.0);
    ram.density.set_input(1.5);

    let result = ram.impact_embedded(ImpactKind::Gwp).unwrap();

    assert!((result.value - 6.2667).abs() < 1e-4);
    assert_eq!(result.warnings, vec![END_OF_LIFE_WARNING]);
    assert!(close(result.min, result.value));
    assert!(close(result.max, result.value));

    let (value, significant_figures, min, max, warnings): (f64, u32, f64, f64, Vec<String>) =
        result.into();
    assert!(min <= value && value <= max);
    assert_eq!(significant_figures, 1);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn quotient_pairs_opposing_bounds() {
    let factors = StaticFactorTable::new()
        .with_factor(
            ITEM_RAM,
            ImpactKind::Gwp,
            FACTOR_DIE_IMPACT,
            ImpactFactor::new(0.4, 0.3, 0.5).unwrap(),
        )
        .with_factor(
            ITEM_RAM,
            ImpactKind::Gwp,
            FACTOR_IMPACT,
            ImpactFactor::new(2.0, 1.0, 3.0).unwrap(),
        );
    let mut ram = RamComponent::new(context_with(Arc::new(factors))).unwrap();
    ram.capacity.set_input_bounded(16.0, 14.0, 18.0).unwrap();
    ram.density.set_input_bounded(1.5, 1.0, 2.0).unwrap();

    let result = ram.impact_embedded(ImpactKind::Gwp).unwrap();

    assert!(close(result.max, 12.0));
    assert!(close(result.min, 3.1));
}

#[test]
fn process_filter_averages_remaining_rows() {
    let mut ram = ram();
    ram.process.set_input(20.0);

    let result = ram.impact_embedded(ImpactKind::Gwp).unwrap();

    assert!(close(*ram.density.value().unwrap(), (1.25 + 1.5 + 1.3) / 3.0));
    assert_eq!(ram.density.min(), Some(&1.25));
    assert_eq!(ram.density.max(), Some(&1.5));
    assert_eq!(ram.density.source(), Some("Average of 3 rows"));
    assert_eq!(ram.density.status(), SlotStatus::Completed);

    // Archetype capacity is 32 GB within [1, 128].
    assert!(close(result.min, 1.0 / 1.5 * 0.4 + 2.0));
    assert!(close(result.max, 128.0 / 1.25 * 0.4 + 2.0));
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.warnings.last().map(String::as_str), Some(END_OF_LIFE_WARNING));
}

#[test]
fn manufacturer_and_process_select_one_row() {
    let mut ram = ram();
    ram.manufacturer.set_input("micron".into());
    ram.process.set_input(25.0);

    assert_eq!(ram.resolved_density().unwrap(), 1.0);
    assert_eq!(ram.density.min(), Some(&1.0));
    assert_eq!(ram.density.max(), Some(&1.0));
    assert_eq!(ram.density.source(), Some("Micron"));
    assert_eq!(ram.manufacturer.status(), SlotStatus::Changed);
    assert_eq!(ram.manufacturer.value().map(String::as_str), Some("Micron"));
    assert_eq!(ram.manufacturer.source(), None);
}

#[test]
fn manufacturer_typo_is_snapped_before_filtering() {
    let mut ram = ram();
    ram.manufacturer.set_input("Samsng".into());

    let density = ram.resolved_density().unwrap();

    assert_eq!(ram.manufacturer.value().map(String::as_str), Some("Samsung"));
    assert!(close(density, (0.625 + 1.25) / 2.0));
    assert_eq!(ram.density.source(), Some("Average of 2 rows"));
}

#[test]
fn repeated_calls_return_identical_results() {
    let mut ram = ram();
    ram.process.set_input(20.0);
    let first = ram.impact_embedded(ImpactKind::Gwp).unwrap();
    let snapshot = (
        ram.density.value().copied(),
        ram.density.min().copied(),
        ram.density.max().copied(),
        ram.density.source().map(str::to_string),
    );
    let second = ram.impact_embedded(ImpactKind::Gwp).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        snapshot,
        (
            ram.density.value().copied(),
            ram.density.min().copied(),
            ram.density.max().copied(),
            ram.density.source().map(str::to_string),
        )
    );
}

#[test]
fn every_impact_kind_is_computed() {
    let mut ram = ram();
    ram.density.set_input(1.25);
    for kind in ImpactKind::ALL {
        let result = ram.impact_embedded(kind).unwrap();
        assert!(result.value > 0.0, "{kind}");
        assert!(result.min <= result.value && result.value <= result.max);
    }
}

#[test]
fn missing_capacity_surfaces_instead_of_zero() {
    let mut ram = RamComponent::empty(context()).unwrap();
    ram.density.set_input(1.0);

    let err = ram.impact_embedded(ImpactKind::Gwp).unwrap_err();

    assert!(err.is_missing_attribute());
    assert!(err.to_string().contains("ram.capacity"));
}

#[test]
fn missing_factor_is_an_error() {
    let mut ram = RamComponent::new(context_with(Arc::new(StaticFactorTable::new()))).unwrap();
    ram.density.set_input(1.0);
    let err = ram.impact_embedded(ImpactKind::Gwp).unwrap_err();
    assert!(!err.is_missing_attribute());
}
