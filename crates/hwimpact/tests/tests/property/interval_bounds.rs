//! Property tests: interval arithmetic keeps `min <= value <= max` and pairs
//! opposing bounds for quotients.

use hwimpact_engine::ImpactCalculator;
use hwimpact_types::ImpactFactor;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A non-negative interval `(value, min, max)` with `min <= value <= max`.
fn arb_factor(lo: f64, hi: f64) -> impl Strategy<Value = ImpactFactor> {
    (lo..hi, lo..hi, lo..hi).prop_map(|(a, b, c)| {
        let mut v = [a, b, c];
        v.sort_by(f64::total_cmp);
        ImpactFactor {
            value: v[1],
            min: v[0],
            max: v[2],
        }
    })
}

fn ordered(f: &ImpactFactor) -> bool {
    let eps = 1e-9 * f.max.abs().max(1.0);
    f.min <= f.value + eps && f.value <= f.max + eps
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Manufacture impact keeps its bounds ordered.
    #[test]
    fn manufacture_bounds_are_ordered(
        capacity in arb_factor(0.0, 512.0),
        density in arb_factor(0.1, 4.0),
        die in arb_factor(0.0, 10.0),
        base in arb_factor(0.0, 50.0),
    ) {
        let impact = ImpactCalculator::manufacture_by_density(&capacity, &density, &die, &base).unwrap();
        prop_assert!(ordered(&impact));
    }

    /// Quotient bounds come from opposing operand bounds.
    #[test]
    fn quotient_uses_opposing_bounds(
        a in arb_factor(0.0, 100.0),
        b in arb_factor(0.5, 10.0),
    ) {
        let q = a.checked_div(&b).unwrap();
        prop_assert_eq!(q.min, a.min / b.max);
        prop_assert_eq!(q.max, a.max / b.min);
        prop_assert!(ordered(&q));
    }

    /// Every corner of the operand box lands inside the quotient interval.
    #[test]
    fn quotient_contains_all_corners(
        a in arb_factor(0.0, 100.0),
        b in arb_factor(0.5, 10.0),
    ) {
        let q = a.checked_div(&b).unwrap();
        for x in [a.min, a.value, a.max] {
            for y in [b.min, b.value, b.max] {
                let r = x / y;
                prop_assert!(q.min <= r + 1e-9 && r <= q.max + 1e-9);
            }
        }
    }

    /// Use-phase impact is monotonic in each bound.
    #[test]
    fn use_phase_bounds_are_ordered(
        elec in arb_factor(0.0, 2.0),
        consumption in arb_factor(0.0, 500.0),
        use_time in arb_factor(0.0, 60_000.0),
    ) {
        let impact = ImpactCalculator::use_phase(&elec, &consumption, &use_time).unwrap();
        prop_assert!(ordered(&impact));
    }

    /// A divisor whose interval touches zero is rejected.
    #[test]
    fn zero_divisor_is_rejected(a in arb_factor(0.0, 100.0), hi in 0.0f64..10.0) {
        let b = ImpactFactor { value: hi, min: 0.0, max: hi };
        prop_assert!(a.checked_div(&b).is_err());
    }
}
