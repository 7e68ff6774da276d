//! The resolved entity catalog.
//!
//! ```text
//! Catalog
//! ├── entities: IndexMap<cleaned_name, Entity>  (resolution order)
//! ├── value_sets: Vec<ValueSet>
//! ├── primitives: PrimitiveTable
//! └── known_resources: Vec<String>
//! ```
//!
//! Built once by the [`Linker`](crate::resolve::Linker) and read-only
//! afterwards. Downstream generators consume it through the queries below
//! or through [`Catalog::to_json`].

mod entity;
mod primitives;
mod value_set;

pub use entity::{CodeableBinding, Entity, EntityKind, Property, ReferenceBinding};
pub use primitives::{PrimitiveEntry, PrimitiveOrigin, PrimitiveTable};
pub use value_set::{Concept, ValueSet};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::source::SchemaError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entities: IndexMap<String, Entity>,
    value_sets: Vec<ValueSet>,
    primitives: PrimitiveTable,
    known_resources: Vec<String>,
    #[serde(skip)]
    by_name: FxHashMap<String, String>,
}

impl Catalog {
    /// Build a catalog; entities whose cleaned name is already taken are
    /// returned instead of inserted.
    pub fn build(
        entities: Vec<Entity>,
        value_sets: Vec<ValueSet>,
        primitives: PrimitiveTable,
        known_resources: Vec<String>,
    ) -> (Self, Vec<Entity>) {
        let mut map = IndexMap::with_capacity(entities.len());
        let mut rejected = Vec::new();
        for entity in entities {
            if map.contains_key(&entity.cleaned_name) {
                rejected.push(entity);
            } else {
                map.insert(entity.cleaned_name.clone(), entity);
            }
        }
        let mut catalog = Self {
            entities: map,
            value_sets,
            primitives,
            known_resources,
            by_name: FxHashMap::default(),
        };
        catalog.reindex();
        (catalog, rejected)
    }

    /// A structure and a value-set may share a source name; the structure,
    /// inserted first, keeps it.
    fn reindex(&mut self) {
        self.by_name.clear();
        for entity in self.entities.values() {
            self.by_name
                .entry(entity.name.clone())
                .or_insert_with(|| entity.cleaned_name.clone());
        }
    }

    /// Read a catalog back from [`to_json`](Self::to_json) output.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let mut catalog: Self =
            serde_json::from_str(json).map_err(|e| SchemaError::Serialize(e.to_string()))?;
        catalog.reindex();
        Ok(catalog)
    }

    /// Serialize for downstream generators.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Serialize(e.to_string()))
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Entity by cleaned name.
    pub fn entity(&self, cleaned_name: &str) -> Option<&Entity> {
        self.entities.get(cleaned_name)
    }

    /// Entity by source name (`Patient.Contact`).
    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).and_then(|cleaned| self.entities.get(cleaned))
    }

    /// All entities in resolution order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entities_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(move |e| e.kind == kind)
    }

    /// All properties of an entity, inherited ones first.
    pub fn properties(&self, cleaned_name: &str) -> Option<&[Property]> {
        self.entity(cleaned_name).map(|e| e.properties.as_slice())
    }

    /// The deduplicated projection of an entity's properties.
    pub fn unique_properties(&self, cleaned_name: &str) -> Option<Vec<&Property>> {
        self.entity(cleaned_name)
            .map(|e| e.unique_properties().collect())
    }

    pub fn value_sets(&self) -> &[ValueSet] {
        &self.value_sets
    }

    /// Value-set by identity name or cleaned name.
    pub fn value_set(&self, name: &str) -> Option<&ValueSet> {
        self.value_sets
            .iter()
            .find(|v| v.name == name || v.cleaned_name == name)
    }

    pub fn primitives(&self) -> &PrimitiveTable {
        &self.primitives
    }

    /// Names a wildcard reference may point to.
    pub fn known_resources(&self) -> &[String] {
        &self.known_resources
    }

    /// Whether a resolved type names a primitive or an entity.
    pub fn resolves(&self, type_key: &str, cleaned_type: &str) -> bool {
        self.primitives.contains(type_key) || self.entities.contains_key(cleaned_type)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
