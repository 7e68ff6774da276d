//! Leveled "who can reach me" closure.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::constants::RESOURCE_ROOT;
use crate::catalog::Catalog;
use crate::resolve::load_options;
use crate::source::SchemaError;

use super::graph::{GraphOptions, ReferenceGraph};

/// Split of entity names into primary, excluded and (implicitly) other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partition {
    pub primary: BTreeSet<String>,
    /// Names left out of the map entirely.
    pub excluded: BTreeSet<String>,
}

impl Partition {
    pub fn new<P, E>(primary: P, excluded: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            primary: primary.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_primary(&self, name: &str) -> bool {
        self.primary.contains(name)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Neither primary nor excluded.
    pub fn is_other(&self, name: &str) -> bool {
        !self.is_primary(name) && !self.is_excluded(name)
    }
}

/// For every "other" entity, the entities that can reach it within `level`
/// reference hops.
///
/// Hop one is the direct adjacency of the [`ReferenceGraph`]. Each further
/// hop folds in the direct referrers of every reacher that is itself an
/// "other" entity. Rounds read the previous round's result, so the outcome
/// does not depend on map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReachabilityMap {
    level: usize,
    reachable: BTreeMap<String, BTreeSet<String>>,
}

impl ReachabilityMap {
    /// Build the closure. Level `0` is treated as `1`.
    pub fn build(graph: &ReferenceGraph, partition: &Partition, level: usize) -> Self {
        let level = level.max(1);
        let direct: BTreeMap<&str, BTreeSet<String>> = graph
            .nodes()
            .filter(|name| partition.is_other(name))
            .map(|name| (name, graph.referrers_of(name).cloned().unwrap_or_default()))
            .collect();

        let mut reachable: BTreeMap<String, BTreeSet<String>> = direct
            .iter()
            .map(|(name, referrers)| {
                let mut set = referrers.clone();
                set.insert((*name).to_string());
                ((*name).to_string(), set)
            })
            .collect();

        for round in 1..level {
            let previous = reachable.clone();
            let mut grown = 0usize;
            for (name, reachers) in &previous {
                let indirect: BTreeSet<String> = reachers
                    .iter()
                    .filter_map(|reacher| direct.get(reacher.as_str()))
                    .flatten()
                    .cloned()
                    .collect();
                if let Some(set) = reachable.get_mut(name) {
                    let before = set.len();
                    set.extend(indirect);
                    grown += set.len() - before;
                }
            }
            tracing::debug!(round, grown, "reachability round");
        }

        tracing::info!(entities = reachable.len(), level, "built reachability map");
        Self { level, reachable }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Entities that can reach `name`, including `name` itself.
    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.reachable.get(name)
    }

    /// Entities that can reach `name`, excluding `name` itself.
    pub fn referrers(&self, name: &str) -> Option<BTreeSet<&str>> {
        self.reachable.get(name).map(|set| {
            set.iter()
                .map(String::as_str)
                .filter(|&reacher| reacher != name)
                .collect()
        })
    }

    /// Entities in the map, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reachable.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.reachable.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.reachable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty()
    }

    pub fn stats(&self) -> ReachabilityStats {
        let sizes: Vec<usize> = self.reachable.values().map(BTreeSet::len).collect();
        let total: usize = sizes.iter().sum();
        let count = sizes.len();
        ReachabilityStats {
            min: sizes.iter().copied().min().unwrap_or(0),
            max: sizes.iter().copied().max().unwrap_or(0),
            average: if count == 0 { 0.0 } else { total as f64 / count as f64 },
            total,
            count,
        }
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Serialize(e.to_string()))
    }
}

/// Size summary of a [`ReachabilityMap`]; sizes include the entity itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReachabilityStats {
    pub min: usize,
    pub max: usize,
    pub average: f64,
    pub total: usize,
    pub count: usize,
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Everything a reachability run needs besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachabilityOptions {
    pub graph: GraphOptions,
    pub primary: BTreeSet<String>,
    pub excluded: BTreeSet<String>,
    pub level: usize,
}

impl Default for ReachabilityOptions {
    fn default() -> Self {
        Self {
            graph: GraphOptions::default(),
            primary: BTreeSet::new(),
            excluded: [RESOURCE_ROOT, "AuditEvent"].iter().map(|s| s.to_string()).collect(),
            level: 3,
        }
    }
}

impl ReachabilityOptions {
    /// Load options from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        load_options(path.as_ref())
    }

    pub fn partition(&self) -> Partition {
        Partition {
            primary: self.primary.clone(),
            excluded: self.excluded.clone(),
        }
    }

    /// Build the reference graph of `catalog` and its reachability map.
    pub fn run(&self, catalog: &Catalog) -> (ReferenceGraph, ReachabilityMap) {
        let graph = ReferenceGraph::build(catalog, &self.graph);
        let map = ReachabilityMap::build(&graph, &self.partition(), self.level);
        (graph, map)
    }
}
