//! # hwimpact-engine
//!
//! Environmental impact of hardware components from partially known specs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   archetype defaults   ┌──────────────────────┐
//! │  Component  │◄───────────────────────│  ArchetypeProvider   │
//! │ (RAM, GPU)  │                        └──────────────────────┘
//! │             │   unset slot read      ┌──────────────────────┐
//! │  slots ─────┼───────────────────────►│  CompletionResolver  │──► ReferenceData
//! │  usage ─────┼──┐                     └──────────────────────┘
//! └──────┬──────┘  │ no consumption      ┌──────────────────────┐
//!        │         └────────────────────►│ConsumptionProfileModel│
//!        ▼                               └──────────────────────┘
//! ┌─────────────┐   constants            ┌──────────────────────┐
//! │  Impact     │◄───────────────────────│ ImpactFactorProvider │
//! │  Calculator │                        └──────────────────────┘
//! └──────┬──────┘
//!        ▼
//!  ComputedImpact (value, significant figures, min, max, warnings)
//! ```
//!
//! Evaluation is synchronous. Reference data is shared read-only through
//! [`ImpactContext`]; each component owns its slots.

#![deny(unsafe_code)]

pub mod calculator;
pub mod completion;
pub mod component;
pub mod config;
pub mod consumption;
pub mod context;
pub mod error;
pub mod telemetry;
pub mod usage;

// ── Re-exports ──────────────────────────────────────────────────────

pub use calculator::ImpactCalculator;
pub use completion::{
    aggregate, CompletionResolver, DensityLookup, GpuNameLookup, ManufacturerMatch, Resolution,
};
pub use component::{Component, GpuComponent, RamComponent};
pub use config::{ConsumptionConfig, EngineConfig, LoggingConfig, MatchingConfig, UsageDefaults};
pub use consumption::{
    ConsumptionProfileModel, LoadPoint, PowerCurve, WorkloadInput, WorkloadSegment,
};
pub use context::ImpactContext;
pub use error::{EngineError, EngineResult};
pub use telemetry::init_tracing;
pub use usage::{Usage, CONSUMPTION_PROFILE};
