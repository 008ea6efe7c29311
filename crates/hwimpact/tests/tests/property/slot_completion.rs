//! Property tests: completion fills a slot at most once, keeps its bounds
//! ordered and never overwrites caller input.

use hwimpact_engine::{aggregate, Resolution};
use hwimpact_types::{AttributeSlot, Completion, SlotStatus};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_densities() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1f64..4.0, 1..12)
}

fn slot() -> AttributeSlot<f64> {
    AttributeSlot::new("ram.density")
        .with_unit("GB/cm2")
        .with_procedure("density from manufacture dataset")
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Aggregated completion keeps min <= value <= max.
    #[test]
    fn aggregated_slot_is_ordered(densities in arb_densities(), has_value in any::<bool>()) {
        let refs: Vec<&f64> = densities.iter().collect();
        let resolution = aggregate(&refs, densities.len() + 1, has_value, |d| *d, |_| "row".into());
        let mut slot = slot();
        let completion = resolution.into_completion();
        prop_assert!(completion.is_some());
        let value = *slot.complete(|_| completion).unwrap();
        let (min, max) = (*slot.min().unwrap(), *slot.max().unwrap());
        prop_assert!(min <= value && value <= max);
    }

    /// A second complete() returns the same value, bounds and source.
    #[test]
    fn completion_is_idempotent(densities in arb_densities()) {
        let refs: Vec<&f64> = densities.iter().collect();
        let mut slot = slot();
        let first = *slot
            .complete(|_| aggregate(&refs, refs.len(), false, |d| *d, |_| "row".into()).into_completion())
            .unwrap();
        let snapshot = (slot.min().copied(), slot.max().copied(), slot.source().map(str::to_string));

        let second = *slot.complete(|_| Some(Completion::exact(first + 1.0, "other"))).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(snapshot, (slot.min().copied(), slot.max().copied(), slot.source().map(str::to_string)));
    }

    /// Caller input is never replaced by completion.
    #[test]
    fn user_input_is_kept(input in 0.1f64..4.0, completed in 0.1f64..4.0) {
        let mut slot = slot();
        slot.set_input(input);
        prop_assert!(!slot.set_completed(completed, Some("table"), None, None).unwrap());
        prop_assert_eq!(*slot.complete(|_| Some(Completion::exact(completed, "table"))).unwrap(), input);
        prop_assert_eq!(slot.status(), SlotStatus::UserSet);
    }

    /// Without reduction, an existing default survives.
    #[test]
    fn no_reduction_keeps_default(densities in arb_densities(), default in 0.1f64..4.0) {
        let refs: Vec<&f64> = densities.iter().collect();
        prop_assume!(refs.len() > 1);
        let resolution = aggregate(&refs, refs.len(), true, |d| *d, |_| "row".into());
        prop_assert_eq!(&resolution, &Resolution::Unchanged);

        let mut slot = slot().with_default(default, None, None).unwrap();
        prop_assert_eq!(*slot.complete(|_| resolution.into_completion()).unwrap(), default);
        prop_assert_eq!(slot.status(), SlotStatus::Default);
    }
}
