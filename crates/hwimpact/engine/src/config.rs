//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::consumption::{LoadPoint, PowerCurve};
use crate::error::{EngineError, EngineResult};

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Archetype used when a RAM component is built without one
    #[serde(default = "default_archetype")]
    pub default_ram_archetype: String,

    /// Archetype used when a GPU component is built without one
    #[serde(default = "default_archetype")]
    pub default_gpu_archetype: String,

    /// Consumption model parameters
    #[serde(default)]
    pub consumption: ConsumptionConfig,

    /// Use-phase defaults when the archetype has none
    #[serde(default)]
    pub usage: UsageDefaults,

    /// VRAM density (GB/cm²) when the GPU archetype has none
    #[serde(default = "default_vram_density")]
    pub default_vram_density: f64,

    /// Name matching
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_ram_archetype: default_archetype(),
            default_gpu_archetype: default_archetype(),
            consumption: ConsumptionConfig::default(),
            usage: UsageDefaults::default(),
            default_vram_density: default_vram_density(),
            matching: MatchingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reject values the formulas cannot work with.
    pub fn validate(&self) -> EngineResult<()> {
        self.consumption.ram_power_curve()?;
        self.consumption.gpu_power_curve()?;
        if !(self.consumption.ram_watts_per_gb.is_finite() && self.consumption.ram_watts_per_gb >= 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "ram_watts_per_gb must be non-negative, got {}",
                self.consumption.ram_watts_per_gb
            )));
        }
        if self.consumption.significant_figures == 0 {
            return Err(EngineError::InvalidConfig(
                "consumption significant_figures must be at least 1".into(),
            ));
        }
        if !(self.default_vram_density > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "default_vram_density must be positive, got {}",
                self.default_vram_density
            )));
        }
        if !(self.usage.use_time_hours >= 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "use_time_hours must be non-negative, got {}",
                self.usage.use_time_hours
            )));
        }
        if !(0.0..=100.0).contains(&self.usage.time_workload) {
            return Err(EngineError::InvalidConfig(format!(
                "time_workload must be within 0..=100, got {}",
                self.usage.time_workload
            )));
        }
        Ok(())
    }
}

/// Consumption model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionConfig {
    /// RAM draw per GB of capacity at the curve's reference ratio
    #[serde(default = "default_ram_watts_per_gb")]
    pub ram_watts_per_gb: f64,

    /// RAM power ratio by load percentage
    #[serde(default = "default_ram_curve")]
    pub ram_curve: Vec<LoadPoint>,

    /// GPU power ratio (fraction of TDP) by load percentage
    #[serde(default = "default_gpu_curve")]
    pub gpu_curve: Vec<LoadPoint>,

    /// Precision kept on modeled consumption
    #[serde(default = "default_consumption_significant_figures")]
    pub significant_figures: u32,
}

impl ConsumptionConfig {
    pub fn ram_power_curve(&self) -> EngineResult<PowerCurve> {
        PowerCurve::fit(self.ram_curve.iter().copied())
    }

    pub fn gpu_power_curve(&self) -> EngineResult<PowerCurve> {
        PowerCurve::fit(self.gpu_curve.iter().copied())
    }
}

impl Default for ConsumptionConfig {
    fn default() -> Self {
        Self {
            ram_watts_per_gb: default_ram_watts_per_gb(),
            ram_curve: default_ram_curve(),
            gpu_curve: default_gpu_curve(),
            significant_figures: default_consumption_significant_figures(),
        }
    }
}

/// Use-phase defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageDefaults {
    /// Hours of use over the lifetime
    #[serde(default = "default_use_time_hours")]
    pub use_time_hours: f64,

    /// Average load percentage
    #[serde(default = "default_time_workload")]
    pub time_workload: f64,
}

impl Default for UsageDefaults {
    fn default() -> Self {
        Self {
            use_time_hours: default_use_time_hours(),
            time_workload: default_time_workload(),
        }
    }
}

/// Name matching configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum fuzzy score for a reference row to count as a match
    #[serde(default)]
    pub min_score: i64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_archetype() -> String {
    "DEFAULT".to_string()
}

fn default_vram_density() -> f64 {
    1.625
}

fn default_ram_watts_per_gb() -> f64 {
    0.284
}

// RAM draw does not depend on load.
fn default_ram_curve() -> Vec<LoadPoint> {
    vec![LoadPoint::new(0.0, 1.0), LoadPoint::new(100.0, 1.0)]
}

fn default_gpu_curve() -> Vec<LoadPoint> {
    vec![
        LoadPoint::new(0.0, 0.12),
        LoadPoint::new(10.0, 0.32),
        LoadPoint::new(50.0, 0.75),
        LoadPoint::new(100.0, 1.02),
    ]
}

fn default_consumption_significant_figures() -> u32 {
    5
}

fn default_use_time_hours() -> f64 {
    26_280.0
}

fn default_time_workload() -> f64 {
    50.0
}

fn default_log_level() -> String {
    "info".to_string()
}
