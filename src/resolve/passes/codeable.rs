//! Pass 5: apply terminology bindings, then the generic fallback.

use rustc_hash::FxHashMap;

use crate::base::constants::{CODE_TYPE, CODEABLE_CONCEPT_TYPE, CODEABLE_TYPES, generic_code};
use crate::base::{Diagnostics, codes};
use crate::catalog::{CodeableBinding, ValueSet};
use crate::extract::{BindingRecord, BindingTarget, PropertyKey, ValueSetIndex, locate_property};
use crate::ingest::ProvisionalGraph;

use super::{owners, update_copies};

pub fn run(
    graph: &mut ProvisionalGraph,
    records: &[BindingRecord],
    value_sets: &[ValueSet],
    index: &ValueSetIndex,
    diagnostics: &mut Diagnostics,
) {
    let owners = owners(graph);
    let mut assigned: FxHashMap<(PropertyKey, BindingTarget), usize> = FxHashMap::default();
    let mut order: Vec<(PropertyKey, BindingTarget)> = Vec::new();

    for record in records {
        let key = match locate_property(graph, &record.path, CODEABLE_CONCEPT_TYPE) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(miss) => {
                diagnostics.warn(codes::UNRESOLVED_PATH, record.path.as_str(), miss.to_string());
                continue;
            }
        };
        let Some(url) = record.value_set_url.as_deref() else {
            diagnostics.warn(
                codes::UNRESOLVED_BINDING,
                record.path.as_str(),
                format!("binding {} names no value-set", record.binding_name),
            );
            continue;
        };
        let Some(found) = index.resolve(url, &record.path, value_sets, diagnostics) else {
            continue;
        };

        let slot = (key, record.target);
        match assigned.get(&slot) {
            Some(&existing) if existing != found => {
                diagnostics.warn(
                    codes::BINDING_CONFLICT,
                    record.path.as_str(),
                    format!(
                        "bound to {} and {}, keeping the first",
                        value_sets[existing].name, value_sets[found].name
                    ),
                );
            }
            Some(_) => {}
            None => {
                order.push(slot.clone());
                assigned.insert(slot, found);
            }
        }
    }

    for slot in &order {
        let Some(value_set) = assigned.get(slot).map(|&i| &value_sets[i]) else {
            continue;
        };
        let (key, target) = slot;
        match target {
            BindingTarget::Concept => {
                let binding = CodeableBinding {
                    name: value_set.name.clone(),
                    cleaned_name: value_set.cleaned_name.clone(),
                    snake_name: value_set.snake_name.clone(),
                };
                update_copies(graph, &owners, key, |property| {
                    property.codeable_binding = Some(binding.clone());
                });
            }
            BindingTarget::Code => update_copies(graph, &owners, key, |property| {
                property.type_name = value_set.name.clone();
                property.cleaned_type = value_set.cleaned_name.clone();
                property.type_key = value_set.snake_name.clone();
                property.is_code = true;
            }),
        }
    }

    let generic = apply_generic_fallback(graph);
    tracing::info!(pass = "codeable", applied = order.len(), generic, "bound terminology");
}

/// Coded properties without a usable binding fall back to the catch-all
/// value-set.
fn apply_generic_fallback(graph: &mut ProvisionalGraph) -> usize {
    let mut generic = 0usize;
    for property in graph.entities.iter_mut().flat_map(|e| e.properties.iter_mut()) {
        if CODEABLE_TYPES.contains(&property.cleaned_type.as_str()) {
            if property.codeable_binding.is_none() {
                property.codeable_binding = Some(CodeableBinding {
                    name: generic_code::NAME.to_string(),
                    cleaned_name: generic_code::CLEANED_NAME.to_string(),
                    snake_name: generic_code::SNAKE_NAME.to_string(),
                });
                generic += 1;
            }
        } else if property.cleaned_type == CODE_TYPE && !property.is_code {
            property.type_name = generic_code::NAME.to_string();
            property.cleaned_type = generic_code::CLEANED_NAME.to_string();
            property.type_key = generic_code::SNAKE_NAME.to_string();
            property.is_code = true;
            generic += 1;
        }
    }
    generic
}
