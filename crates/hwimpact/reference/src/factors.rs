//! Impact-factor constants (per item and impact kind), each with an
//! uncertainty interval.

use std::collections::{BTreeMap, HashMap};

use hwimpact_types::{ImpactFactor, ImpactKind};
use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, ReferenceResult};

pub const FACTOR_DIE_IMPACT: &str = "die_impact";
pub const FACTOR_IMPACT: &str = "impact";

pub const ITEM_RAM: &str = "ram";
pub const ITEM_GPU: &str = "gpu";
pub const ITEM_ELECTRICITY: &str = "electricity";

/// The named constants for one item under one impact kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorRecord {
    pub item: String,
    pub kind: ImpactKind,
    #[serde(default)]
    pub fields: BTreeMap<String, ImpactFactor>,
}

impl FactorRecord {
    pub fn new(item: impl Into<String>, kind: ImpactKind) -> Self {
        Self {
            item: item.into(),
            kind,
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, field: &str) -> ReferenceResult<ImpactFactor> {
        self.fields
            .get(field)
            .copied()
            .ok_or_else(|| ReferenceError::MissingFactor {
                item: self.item.clone(),
                kind: self.kind,
                field: field.to_string(),
            })
    }
}

/// Source of impact factors.
pub trait ImpactFactorProvider: Send + Sync {
    fn factor(&self, item: &str, kind: ImpactKind) -> ReferenceResult<&FactorRecord>;
}

/// Impact factors held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticFactorTable {
    records: HashMap<(String, ImpactKind), FactorRecord>,
}

impl StaticFactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: &str, kind: ImpactKind, field: &str, factor: ImpactFactor) {
        self.records
            .entry((item.to_string(), kind))
            .or_insert_with(|| FactorRecord::new(item, kind))
            .fields
            .insert(field.to_string(), factor);
    }

    pub fn with_factor(
        mut self,
        item: &str,
        kind: ImpactKind,
        field: &str,
        factor: impl Into<ImpactFactor>,
    ) -> Self {
        self.insert(item, kind, field, factor.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ImpactFactorProvider for StaticFactorTable {
    fn factor(&self, item: &str, kind: ImpactKind) -> ReferenceResult<&FactorRecord> {
        self.records
            .get(&(item.to_string(), kind))
            .ok_or_else(|| ReferenceError::UnknownFactorItem {
                item: item.to_string(),
                kind,
            })
    }
}
