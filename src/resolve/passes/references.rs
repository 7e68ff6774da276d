//! Pass 4: bind reference-typed properties to their allowed targets.

use rustc_hash::FxHashMap;

use crate::base::constants::{MULTI_TARGET_SUFFIX, REFERENCE_TYPE};
use crate::base::{Diagnostics, codes};
use crate::catalog::ReferenceBinding;
use crate::extract::{PropertyKey, ReferenceRecord, locate_property};
use crate::ingest::ProvisionalGraph;

use super::{owners, update_copies};

pub fn run(
    graph: &mut ProvisionalGraph,
    records: &[ReferenceRecord],
    expand_wildcards: bool,
    diagnostics: &mut Diagnostics,
) {
    let owners = owners(graph);
    let mut assigned: FxHashMap<PropertyKey, ReferenceBinding> = FxHashMap::default();
    let mut order: Vec<PropertyKey> = Vec::new();

    for record in records {
        let key = match locate_property(graph, &record.path, REFERENCE_TYPE) {
            Ok(Some(key)) => key,
            Ok(None) => {
                tracing::debug!(path = %record.path, "reference record names an entity, skipping");
                continue;
            }
            Err(miss) => {
                diagnostics.warn(codes::UNRESOLVED_PATH, record.path.as_str(), miss.to_string());
                continue;
            }
        };

        let binding = if record.is_wildcard() {
            ReferenceBinding::Any
        } else {
            ReferenceBinding::Targets(record.targets.clone())
        };
        match assigned.get(&key) {
            Some(existing) if *existing != binding => {
                diagnostics.warn(
                    codes::BINDING_CONFLICT,
                    record.path.as_str(),
                    format!("reference targets {binding:?} conflict with {existing:?}, keeping the first"),
                );
            }
            Some(_) => {}
            None => {
                tracing::trace!(path = %record.path, ?binding, "reference binding");
                order.push(key.clone());
                assigned.insert(key, binding);
            }
        }
    }

    for key in &order {
        if let Some(binding) = assigned.get(key) {
            update_copies(graph, &owners, key, |property| {
                property.reference = Some(binding.clone());
            });
        }
    }

    let defaulted = bind_unbound(graph);
    if expand_wildcards {
        expand(graph);
    }
    tracing::info!(pass = "references", applied = order.len(), defaulted, "bound references");
}

/// Give every unbound reference property a binding: the multi-target copy
/// follows its legacy sibling, anything else becomes `Any`.
fn bind_unbound(graph: &mut ProvisionalGraph) -> usize {
    let mut defaulted = 0usize;
    for entity in &mut graph.entities {
        // Legacy fields first, so a multi-target copy sees its sibling's final binding.
        for multi_target in [false, true] {
            for index in 0..entity.properties.len() {
                let property = &entity.properties[index];
                if !property.is_reference()
                    || property.reference.is_some()
                    || property.is_multi_target != multi_target
                {
                    continue;
                }
                let sibling = property
                    .name
                    .strip_suffix(MULTI_TARGET_SUFFIX)
                    .filter(|_| multi_target)
                    .and_then(|legacy| {
                        entity
                            .properties
                            .iter()
                            .find(|p| p.name == legacy && p.declared_in == property.declared_in)
                    })
                    .and_then(|p| p.reference.clone());
                entity.properties[index].reference = Some(sibling.unwrap_or(ReferenceBinding::Any));
                defaulted += 1;
            }
        }
    }
    defaulted
}

fn expand(graph: &mut ProvisionalGraph) {
    let known = &graph.known_resources;
    for property in graph.entities.iter_mut().flat_map(|e| e.properties.iter_mut()) {
        if property.reference.as_ref().is_some_and(ReferenceBinding::is_any) {
            property.reference = Some(ReferenceBinding::Targets(known.clone()));
        }
    }
}
