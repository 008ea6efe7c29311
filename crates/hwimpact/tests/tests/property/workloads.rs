//! Property tests: consumption modeling over workloads.

use hwimpact_engine::{
    ConsumptionConfig, ConsumptionProfileModel, WorkloadInput, WorkloadSegment,
};
use proptest::prelude::*;

fn arb_segments() -> impl Strategy<Value = Vec<WorkloadSegment>> {
    prop::collection::vec(
        (0.1f64..100.0, 0.0f64..=100.0).prop_map(|(d, l)| WorkloadSegment::new(d, l)),
        1..10,
    )
}

fn gpu(tdp: f64) -> ConsumptionProfileModel {
    ConsumptionProfileModel::for_gpu(tdp, &ConsumptionConfig::default()).unwrap()
}

proptest! {
    /// Time-weighted power equals the duration-weighted mean.
    #[test]
    fn segments_give_weighted_mean(segments in arb_segments(), tdp in 10.0f64..600.0) {
        let model = gpu(tdp);
        let total: f64 = segments.iter().map(|s| s.duration).sum();
        let expected: f64 = segments
            .iter()
            .map(|s| model.apply_consumption_profile(s.load_percentage) * s.duration)
            .sum::<f64>()
            / total;
        let got = model.apply_multiple_workloads(segments.iter().copied()).unwrap();
        prop_assert!((got - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    /// Mean power stays within the curve's range.
    #[test]
    fn mean_power_is_bounded(segments in arb_segments(), tdp in 10.0f64..600.0) {
        let model = gpu(tdp);
        let got = model.apply_multiple_workloads(segments).unwrap();
        prop_assert!(got >= model.apply_consumption_profile(0.0) - 1e-9);
        prop_assert!(got <= model.apply_consumption_profile(100.0) + 1e-9);
    }

    /// A single full-length segment matches the constant workload.
    #[test]
    fn one_segment_equals_constant(load in 0.0f64..=100.0, tdp in 10.0f64..600.0) {
        let model = gpu(tdp);
        let constant = model.apply_workload(&WorkloadInput::Constant(load)).unwrap();
        let segmented = model
            .apply_workload(&WorkloadInput::Segments(vec![WorkloadSegment::new(8.0, load)]))
            .unwrap();
        prop_assert!((constant - segmented).abs() <= 1e-9 * constant.max(1.0));
    }

    /// Modeled consumption is exact.
    #[test]
    fn modeled_consumption_is_exact(load in 0.0f64..=100.0, tdp in 10.0f64..600.0) {
        let c = gpu(tdp).modeled_consumption(&WorkloadInput::Constant(load), 5).unwrap();
        prop_assert!(c.is_exact());
    }
}
