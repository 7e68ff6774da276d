//! The primitive-type table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::source::{PrimitiveKind, Scalar};

/// Where a primitive table entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveOrigin {
    /// Pattern-constrained simple type.
    Pattern,
    /// Enumerated simple type.
    Enumerated,
    /// Demoted value-holder complex type.
    Alias,
}

impl From<PrimitiveKind> for PrimitiveOrigin {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Pattern => PrimitiveOrigin::Pattern,
            PrimitiveKind::Enumerated => PrimitiveOrigin::Enumerated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveEntry {
    pub origin: PrimitiveOrigin,
    pub scalar: Scalar,
}

/// Primitive key → scalar, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveTable {
    entries: IndexMap<String, PrimitiveEntry>,
}

impl PrimitiveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; an existing key keeps its first entry.
    pub fn insert(&mut self, key: impl Into<String>, entry: PrimitiveEntry) -> bool {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PrimitiveEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrimitiveEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
