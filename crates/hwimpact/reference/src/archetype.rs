//! Archetypes: named default profiles supplying default/min/max per attribute.

use std::collections::{BTreeMap, HashMap};

use hwimpact_types::ComponentKind;
use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, ReferenceResult};

/// A scalar archetype value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArchetypeValue {
    Number(f64),
    Text(String),
}

impl ArchetypeValue {
    /// Numeric view; numeric text is accepted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArchetypeValue::Number(n) => Some(*n),
            ArchetypeValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArchetypeValue::Text(s) => Some(s),
            ArchetypeValue::Number(_) => None,
        }
    }
}

impl From<f64> for ArchetypeValue {
    fn from(v: f64) -> Self {
        ArchetypeValue::Number(v)
    }
}

impl From<&str> for ArchetypeValue {
    fn from(v: &str) -> Self {
        ArchetypeValue::Text(v.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchetypeField {
    Default,
    Min,
    Max,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeEntry {
    #[serde(default)]
    pub default: Option<ArchetypeValue>,
    #[serde(default)]
    pub min: Option<ArchetypeValue>,
    #[serde(default)]
    pub max: Option<ArchetypeValue>,
}

impl ArchetypeEntry {
    pub fn get(&self, field: ArchetypeField) -> Option<&ArchetypeValue> {
        match field {
            ArchetypeField::Default => self.default.as_ref(),
            ArchetypeField::Min => self.min.as_ref(),
            ArchetypeField::Max => self.max.as_ref(),
        }
    }
}

/// Named default configuration for one component kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub kind: ComponentKind,
    #[serde(default)]
    pub attributes: BTreeMap<String, ArchetypeEntry>,
}

impl Archetype {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_number(mut self, attr: &str, default: f64, min: f64, max: f64) -> Self {
        self.attributes.insert(
            attr.to_string(),
            ArchetypeEntry {
                default: Some(default.into()),
                min: Some(min.into()),
                max: Some(max.into()),
            },
        );
        self
    }

    pub fn with_text(mut self, attr: &str, default: &str) -> Self {
        self.attributes.insert(
            attr.to_string(),
            ArchetypeEntry {
                default: Some(default.into()),
                ..ArchetypeEntry::default()
            },
        );
        self
    }

    pub fn value(&self, attr: &str, field: ArchetypeField) -> Option<&ArchetypeValue> {
        self.attributes.get(attr).and_then(|e| e.get(field))
    }

    pub fn number(&self, attr: &str, field: ArchetypeField) -> Option<f64> {
        self.value(attr, field).and_then(ArchetypeValue::as_f64)
    }

    pub fn text(&self, attr: &str, field: ArchetypeField) -> Option<&str> {
        self.value(attr, field).and_then(ArchetypeValue::as_str)
    }
}

/// Source of archetypes, resolved by name and component kind.
pub trait ArchetypeProvider: Send + Sync {
    fn archetype(&self, name: &str, kind: ComponentKind) -> ReferenceResult<&Archetype>;
}

/// Archetypes held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryArchetypes {
    archetypes: HashMap<(ComponentKind, String), Archetype>,
}

impl InMemoryArchetypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, archetype: Archetype) {
        self.archetypes
            .insert((archetype.kind, archetype.name.clone()), archetype);
    }

    pub fn with(mut self, archetype: Archetype) -> Self {
        self.insert(archetype);
        self
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl FromIterator<Archetype> for InMemoryArchetypes {
    fn from_iter<I: IntoIterator<Item = Archetype>>(iter: I) -> Self {
        let mut archetypes = Self::new();
        for a in iter {
            archetypes.insert(a);
        }
        archetypes
    }
}

impl ArchetypeProvider for InMemoryArchetypes {
    fn archetype(&self, name: &str, kind: ComponentKind) -> ReferenceResult<&Archetype> {
        self.archetypes
            .get(&(kind, name.to_string()))
            .ok_or_else(|| ReferenceError::UnknownArchetype {
                name: name.to_string(),
                kind,
            })
    }
}
