//! The provisional entity graph.

use rustc_hash::FxHashMap;

use crate::catalog::{Entity, PrimitiveTable};

/// Entities with unresolved type names, plus the primitive table.
///
/// Owned by the resolution passes, which mutate it in place. Name lookups go
/// through indices built once by [`reindex`](Self::reindex) instead of
/// scanning the entity list.
#[derive(Debug, Clone, Default)]
pub struct ProvisionalGraph {
    pub entities: Vec<Entity>,
    pub primitives: PrimitiveTable,
    /// Names a wildcard reference may point to.
    pub known_resources: Vec<String>,
    by_name: FxHashMap<String, usize>,
    by_cleaned: FxHashMap<String, usize>,
}

impl ProvisionalGraph {
    pub fn new(entities: Vec<Entity>, primitives: PrimitiveTable, known_resources: Vec<String>) -> Self {
        let mut graph = Self {
            entities,
            primitives,
            known_resources,
            by_name: FxHashMap::default(),
            by_cleaned: FxHashMap::default(),
        };
        graph.reindex();
        graph
    }

    /// Rebuild the name indices after entities were added, removed or renamed.
    ///
    /// The first entity with a given name wins.
    pub fn reindex(&mut self) {
        self.by_name.clear();
        self.by_cleaned.clear();
        for (index, entity) in self.entities.iter().enumerate() {
            self.by_name.entry(entity.name.clone()).or_insert(index);
            self.by_cleaned
                .entry(entity.cleaned_name.clone())
                .or_insert(index);
        }
    }

    /// Index of the entity with the given source name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Index of the entity with the given cleaned name.
    pub fn index_of_cleaned(&self, cleaned_name: &str) -> Option<usize> {
        self.by_cleaned.get(cleaned_name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.index_of(name).map(|i| &self.entities[i])
    }

    pub fn get_cleaned(&self, cleaned_name: &str) -> Option<&Entity> {
        self.index_of_cleaned(cleaned_name).map(|i| &self.entities[i])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
