//! The resolution passes, in run order.
//!
//! Each pass is a free function over the [`ProvisionalGraph`] that threads
//! the run's [`Diagnostics`](crate::base::Diagnostics) explicitly.

pub(super) mod codeable;
pub(super) mod dedup;
pub(super) mod flags;
pub(super) mod inherit;
pub(super) mod references;
pub(super) mod types;
pub(super) mod value_sets;

use rustc_hash::FxHashMap;

use crate::catalog::{Entity, Property};
use crate::extract::PropertyKey;
use crate::ingest::ProvisionalGraph;

/// Positions `(entity, property)` of every copy of a declared property.
///
/// Inheritance copies a base's properties into each descendant. A record
/// located on the base applies to all of those copies.
pub(super) type Owners = FxHashMap<PropertyKey, Vec<(usize, usize)>>;

pub(super) fn owners(graph: &ProvisionalGraph) -> Owners {
    let mut owners = Owners::default();
    for (entity_index, entity) in graph.entities.iter().enumerate() {
        for (property_index, property) in entity.properties.iter().enumerate() {
            owners
                .entry(PropertyKey::of(property))
                .or_default()
                .push((entity_index, property_index));
        }
    }
    owners
}

/// Apply `update` to every copy of `key`.
pub(super) fn update_copies(
    graph: &mut ProvisionalGraph,
    owners: &Owners,
    key: &PropertyKey,
    mut update: impl FnMut(&mut Property),
) {
    for &(entity, property) in owners.get(key).into_iter().flatten() {
        update(&mut graph.entities[entity].properties[property]);
    }
}

/// Diagnostic path of a property: `Entity.property`.
pub(super) fn property_path(entity: &Entity, property: &Property) -> String {
    format!("{}.{}", entity.name, property.name)
}
