//! Attribute slots: possibly-unknown component attributes with bounds,
//! provenance and a lazy completion state machine.
//!
//! ```text
//!   UNSET ──complete()──► COMPLETED
//!     │  └──no result────► DEFAULT ──set_completed()──► COMPLETED
//!     ├──set_input()────► USER_SET ──set_changed()────► CHANGED
//!     └──set_changed()──► CHANGED
//! ```
//!
//! Completion fills a slot at most once and never overwrites a value the
//! caller supplied.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};
use crate::interval::ImpactFactor;

/// Where a slot's current value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Unset,
    Default,
    Completed,
    UserSet,
    Changed,
}

impl SlotStatus {
    /// Completion may still write into a slot in this state.
    pub fn is_fillable(&self) -> bool {
        matches!(self, SlotStatus::Unset | SlotStatus::Default)
    }
}

/// A value produced by a completion procedure.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion<T> {
    pub value: T,
    pub source: Option<String>,
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Completion<T> {
    pub fn exact(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            source: Some(source.into()),
            min: None,
            max: None,
        }
    }

    pub fn bounded(value: T, min: T, max: T, source: impl Into<String>) -> Self {
        Self {
            value,
            source: Some(source.into()),
            min: Some(min),
            max: Some(max),
        }
    }
}

/// A named component attribute.
#[derive(Clone, Debug)]
pub struct AttributeSlot<T> {
    name: String,
    unit: Option<String>,
    value: Option<T>,
    min: Option<T>,
    max: Option<T>,
    default: Option<T>,
    default_min: Option<T>,
    default_max: Option<T>,
    source: Option<String>,
    status: SlotStatus,
    procedure: Option<String>,
    completion_attempted: bool,
    warnings: Vec<String>,
}

impl<T> AttributeSlot<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            value: None,
            min: None,
            max: None,
            default: None,
            default_min: None,
            default_max: None,
            source: None,
            status: SlotStatus::Unset,
            procedure: None,
            completion_attempted: false,
            warnings: Vec::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Attach a named completion procedure. The owning component runs it.
    pub fn with_procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = Some(procedure.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn procedure(&self) -> Option<&str> {
        self.procedure.as_deref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn add_warning(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }

    /// True if an explicit, completed or default value is present.
    pub fn has_value(&self) -> bool {
        self.value.is_some() || self.default.is_some()
    }

    /// Current value without triggering completion.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref().or(self.default.as_ref())
    }

    pub fn min(&self) -> Option<&T> {
        if self.value.is_some() {
            self.min.as_ref().or(self.value.as_ref())
        } else {
            self.default_min.as_ref().or(self.default.as_ref())
        }
    }

    pub fn max(&self) -> Option<&T> {
        if self.value.is_some() {
            self.max.as_ref().or(self.value.as_ref())
        } else {
            self.default_max.as_ref().or(self.default.as_ref())
        }
    }

    /// A procedure is attached, has not run, and nothing fills the slot yet.
    pub fn needs_completion(&self) -> bool {
        self.procedure.is_some() && !self.completion_attempted && self.status.is_fillable()
    }

    pub fn completion_attempted(&self) -> bool {
        self.completion_attempted
    }

    pub fn mark_completion_attempted(&mut self) {
        self.completion_attempted = true;
    }
}

impl<T> AttributeSlot<T>
where
    T: Clone + PartialOrd + fmt::Debug,
{
    /// Set the archetype default. Missing bounds collapse to the default.
    pub fn with_default(mut self, default: T, min: Option<T>, max: Option<T>) -> ImpactResult<Self> {
        check_bounds(&self.name, &default, min.as_ref(), max.as_ref())?;
        self.default = Some(default);
        self.default_min = min;
        self.default_max = max;
        Ok(self)
    }

    /// Explicit external assignment of an exact value.
    pub fn set_input(&mut self, value: T) {
        self.value = Some(value);
        self.min = None;
        self.max = None;
        self.source = None;
        self.status = SlotStatus::UserSet;
    }

    /// Explicit external assignment with an uncertainty interval.
    pub fn set_input_bounded(&mut self, value: T, min: T, max: T) -> ImpactResult<()> {
        check_bounds(&self.name, &value, Some(&min), Some(&max))?;
        self.value = Some(value);
        self.min = Some(min);
        self.max = Some(max);
        self.source = None;
        self.status = SlotStatus::UserSet;
        Ok(())
    }

    /// Fill the slot from completion. Returns `false` (and changes nothing)
    /// when the slot already holds a completed or caller-supplied value.
    pub fn set_completed(
        &mut self,
        value: T,
        source: Option<&str>,
        min: Option<T>,
        max: Option<T>,
    ) -> ImpactResult<bool> {
        if !self.status.is_fillable() {
            return Ok(false);
        }
        check_bounds(&self.name, &value, min.as_ref(), max.as_ref())?;
        self.value = Some(value);
        self.min = min;
        self.max = max;
        self.source = source.map(str::to_string);
        self.status = SlotStatus::Completed;
        Ok(true)
    }

    pub fn apply_completion(&mut self, completion: Completion<T>) -> ImpactResult<bool> {
        self.set_completed(
            completion.value,
            completion.source.as_deref(),
            completion.min,
            completion.max,
        )
    }

    /// Replace the current value with its canonical form. Any previous
    /// provenance no longer describes the value and is dropped.
    pub fn set_changed(&mut self, value: T) {
        self.value = Some(value);
        self.min = None;
        self.max = None;
        self.source = None;
        self.status = SlotStatus::Changed;
    }

    /// Run `procedure` if the slot has no value of its own yet, then resolve.
    ///
    /// The slot is marked attempted only once the procedure's result has been
    /// applied, so a failed completion is retried on the next call. After a
    /// successful call the procedure never runs again.
    pub fn complete<F>(&mut self, procedure: F) -> ImpactResult<&T>
    where
        F: FnOnce(&Self) -> Option<Completion<T>>,
    {
        if self.needs_completion() {
            if let Some(completion) = procedure(self) {
                self.apply_completion(completion)?;
            }
            self.completion_attempted = true;
        } else if self.procedure.is_none() && !self.has_value() {
            return Err(ImpactError::missing(&self.name));
        }
        self.resolve()
    }

    /// Final read: the explicit value, else the materialized default.
    pub fn resolve(&mut self) -> ImpactResult<&T> {
        if self.value.is_none() {
            let Some(default) = self.default.clone() else {
                return Err(ImpactError::missing(&self.name));
            };
            self.min = self.default_min.clone();
            self.max = self.default_max.clone();
            self.value = Some(default);
            self.status = SlotStatus::Default;
        }
        self.value
            .as_ref()
            .ok_or_else(|| ImpactError::missing(&self.name))
    }

    /// Serializable snapshot of the slot for presentation layers.
    pub fn view(&self) -> SlotView<'_, T> {
        SlotView {
            name: &self.name,
            value: self.value(),
            min: self.min(),
            max: self.max(),
            unit: self.unit(),
            source: self.source(),
            status: self.status,
            warnings: &self.warnings,
        }
    }
}

impl AttributeSlot<f64> {
    /// Resolve the slot and return it as an interval.
    pub fn resolve_factor(&mut self) -> ImpactResult<ImpactFactor> {
        let value = *self.resolve()?;
        let min = self.min().copied().unwrap_or(value);
        let max = self.max().copied().unwrap_or(value);
        ImpactFactor::new(value, min, max).map_err(|e| match e {
            ImpactError::InvalidBounds { detail, .. } => ImpactError::InvalidBounds {
                attribute: self.name.clone(),
                detail,
            },
            other => other,
        })
    }
}

/// Borrowed, serializable view of an [`AttributeSlot`].
#[derive(Debug, Serialize)]
pub struct SlotView<'a, T> {
    pub name: &'a str,
    pub value: Option<&'a T>,
    pub min: Option<&'a T>,
    pub max: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    pub status: SlotStatus,
    pub warnings: &'a [String],
}

fn check_bounds<T>(name: &str, value: &T, min: Option<&T>, max: Option<&T>) -> ImpactResult<()>
where
    T: PartialOrd + fmt::Debug,
{
    let below = min.is_some_and(|m| m > value);
    let above = max.is_some_and(|m| m < value);
    if below || above {
        return Err(ImpactError::InvalidBounds {
            attribute: name.to_string(),
            detail: format!("{value:?} outside [{min:?}, {max:?}]"),
        });
    }
    Ok(())
}
