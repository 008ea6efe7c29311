//! # hwimpact-types
//!
//! Value types shared by the hardware impact engine:
//!
//! - [`AttributeSlot`]: a possibly-unknown attribute with default/min/max
//!   bounds, provenance, status and a lazy, run-once completion gate
//! - [`ImpactFactor`]: `(value, min, max)` interval with the arithmetic the
//!   impact formulas need (opposing-bound quotients, bound-wise products)
//! - [`sigfig`]: significant-figure counting and rounding
//! - [`ComputedImpact`]: the value/precision/interval/warnings result

#![deny(unsafe_code)]

pub mod error;
pub mod interval;
pub mod kind;
pub mod result;
pub mod sigfig;
pub mod slot;

// ── Re-exports ──────────────────────────────────────────────────────

pub use error::{ImpactError, ImpactResult};
pub use interval::ImpactFactor;
pub use kind::{ComponentKind, ImpactKind};
pub use result::{ComputedImpact, END_OF_LIFE_WARNING};
pub use sigfig::{min_significant_figures, round_to_significant_figures, significant_figures};
pub use slot::{AttributeSlot, Completion, SlotStatus, SlotView};
