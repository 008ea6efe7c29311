//! Consumption profile model: workload utilization → modeled power draw.
//!
//! A [`PowerCurve`] maps a load percentage to a power ratio by
//! piecewise-linear interpolation between fitted points. The model scales
//! the ratio by a component-specific wattage (RAM: capacity × W/GB, GPU:
//! TDP). Modeled consumption is rounded and reported as an exact interval;
//! input uncertainty is not carried through the model.

use hwimpact_types::{round_to_significant_figures, ImpactFactor};
use serde::{Deserialize, Serialize};

use crate::config::ConsumptionConfig;
use crate::error::{EngineError, EngineResult};

/// One fitted point: power ratio at a load percentage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadPoint {
    pub load_percentage: f64,
    pub power_ratio: f64,
}

impl LoadPoint {
    pub fn new(load_percentage: f64, power_ratio: f64) -> Self {
        Self {
            load_percentage,
            power_ratio,
        }
    }
}

/// One period of a workload: how long, at what load.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct WorkloadSegment {
    pub duration: f64,
    pub load_percentage: f64,
}

impl WorkloadSegment {
    pub fn new(duration: f64, load_percentage: f64) -> Self {
        Self {
            duration,
            load_percentage,
        }
    }
}

/// Workload over the use period: a constant load or an ordered list of
/// segments.
#[derive(Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkloadInput {
    Constant(f64),
    Segments(Vec<WorkloadSegment>),
}

/// Sorted, validated load → power-ratio curve.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerCurve {
    points: Vec<LoadPoint>,
}

impl PowerCurve {
    pub fn fit<I>(points: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = LoadPoint>,
    {
        let mut points: Vec<LoadPoint> = points.into_iter().collect();
        if points.is_empty() {
            return Err(EngineError::InvalidCurve("no points".into()));
        }
        for p in &points {
            check_load(p.load_percentage).map_err(EngineError::InvalidCurve)?;
            if !(p.power_ratio.is_finite() && p.power_ratio >= 0.0) {
                return Err(EngineError::InvalidCurve(format!(
                    "power ratio {} at load {} must be non-negative",
                    p.power_ratio, p.load_percentage
                )));
            }
        }
        points.sort_by(|a, b| a.load_percentage.total_cmp(&b.load_percentage));
        if let Some(w) = points
            .windows(2)
            .find(|w| w[0].load_percentage == w[1].load_percentage)
        {
            return Err(EngineError::InvalidCurve(format!(
                "duplicate load {}",
                w[0].load_percentage
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[LoadPoint] {
        &self.points
    }

    /// Interpolated ratio, held constant beyond the first and last points.
    pub fn ratio_at(&self, load_percentage: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if load_percentage <= first.load_percentage {
            return first.power_ratio;
        }
        if load_percentage >= last.load_percentage {
            return last.power_ratio;
        }
        for w in self.points.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            if load_percentage <= hi.load_percentage {
                let t = (load_percentage - lo.load_percentage)
                    / (hi.load_percentage - lo.load_percentage);
                return lo.power_ratio + t * (hi.power_ratio - lo.power_ratio);
            }
        }
        last.power_ratio
    }
}

/// Power curve scaled to a component's wattage.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsumptionProfileModel {
    scale_watts: f64,
    curve: PowerCurve,
}

impl ConsumptionProfileModel {
    pub fn new(scale_watts: f64, curve: PowerCurve) -> EngineResult<Self> {
        if !(scale_watts.is_finite() && scale_watts >= 0.0) {
            return Err(EngineError::InvalidCurve(format!(
                "scale {scale_watts} W must be non-negative"
            )));
        }
        Ok(Self { scale_watts, curve })
    }

    /// RAM: scale is capacity (GB) × watts per GB.
    pub fn for_ram(capacity_gb: f64, config: &ConsumptionConfig) -> EngineResult<Self> {
        Self::new(capacity_gb * config.ram_watts_per_gb, config.ram_power_curve()?)
    }

    /// GPU: scale is the thermal design power (W).
    pub fn for_gpu(tdp_watts: f64, config: &ConsumptionConfig) -> EngineResult<Self> {
        Self::new(tdp_watts, config.gpu_power_curve()?)
    }

    pub fn scale_watts(&self) -> f64 {
        self.scale_watts
    }

    /// Instantaneous power (W) at one load level.
    pub fn apply_consumption_profile(&self, load_percentage: f64) -> f64 {
        self.scale_watts * self.curve.ratio_at(load_percentage)
    }

    /// Duration-weighted mean power (W) over a sequence of segments.
    pub fn apply_multiple_workloads<I>(&self, segments: I) -> EngineResult<f64>
    where
        I: IntoIterator<Item = WorkloadSegment>,
    {
        let mut total_duration = 0.0;
        let mut weighted = 0.0;
        for segment in segments {
            check_load(segment.load_percentage).map_err(EngineError::InvalidWorkload)?;
            if !(segment.duration.is_finite() && segment.duration >= 0.0) {
                return Err(EngineError::InvalidWorkload(format!(
                    "segment duration {} must be non-negative",
                    segment.duration
                )));
            }
            total_duration += segment.duration;
            weighted += self.apply_consumption_profile(segment.load_percentage) * segment.duration;
        }
        if total_duration <= 0.0 {
            return Err(EngineError::InvalidWorkload(
                "workload has no duration".into(),
            ));
        }
        Ok(weighted / total_duration)
    }

    pub fn apply_workload(&self, workload: &WorkloadInput) -> EngineResult<f64> {
        match workload {
            WorkloadInput::Constant(load) => {
                check_load(*load).map_err(EngineError::InvalidWorkload)?;
                Ok(self.apply_consumption_profile(*load))
            }
            WorkloadInput::Segments(segments) => {
                self.apply_multiple_workloads(segments.iter().copied())
            }
        }
    }

    /// Modeled power rounded to `significant_figures`, as an exact interval.
    pub fn modeled_consumption(
        &self,
        workload: &WorkloadInput,
        significant_figures: u32,
    ) -> EngineResult<ImpactFactor> {
        let watts = self.apply_workload(workload)?;
        Ok(ImpactFactor::exact(round_to_significant_figures(
            watts,
            significant_figures,
        )))
    }
}

fn check_load(load_percentage: f64) -> Result<(), String> {
    if (0.0..=100.0).contains(&load_percentage) {
        Ok(())
    } else {
        Err(format!("load {load_percentage} outside 0..=100"))
    }
}
