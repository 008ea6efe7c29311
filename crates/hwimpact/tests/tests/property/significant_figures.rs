//! Property tests: significant-figure counting and rounding.

use hwimpact_types::{min_significant_figures, round_to_significant_figures, significant_figures};
use proptest::prelude::*;

proptest! {
    /// Rounding never claims more digits than requested.
    #[test]
    fn rounding_caps_precision(x in 1e-6f64..1e9, digits in 1u32..8) {
        let rounded = round_to_significant_figures(x, digits);
        prop_assert!(significant_figures(rounded) <= digits);
    }

    /// Rounding is idempotent.
    #[test]
    fn rounding_is_idempotent(x in 1e-6f64..1e9, digits in 1u32..8) {
        let once = round_to_significant_figures(x, digits);
        prop_assert_eq!(round_to_significant_figures(once, digits), once);
    }

    /// The minimum over inputs equals the smallest single count.
    #[test]
    fn minimum_is_the_least_precise_input(xs in prop::collection::vec(1e-3f64..1e6, 1..6)) {
        let expected = xs.iter().map(|x| significant_figures(*x)).min().unwrap();
        prop_assert_eq!(min_significant_figures(xs.iter().copied()), expected);
    }
}

#[test]
fn mixed_precision_reports_the_least() {
    assert_eq!(min_significant_figures([1.5, 0.123, 1.2345]), 2);
    assert_eq!(min_significant_figures(std::iter::empty()), 0);
}
