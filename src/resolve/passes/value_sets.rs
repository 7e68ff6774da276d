//! Pass 6: materialize value-sets as entities.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::constants::generic_code;
use crate::base::naming::basic_type_name;
use crate::catalog::{Entity, EntityKind, ValueSet};
use crate::ingest::ProvisionalGraph;
use crate::resolve::ResolveOptions;

const VALUE_SET_TYPE: &str = "ValueSet";

pub fn run(graph: &mut ProvisionalGraph, value_sets: &[ValueSet], options: &ResolveOptions) {
    let by_name: FxHashMap<&str, &ValueSet> = value_sets
        .iter()
        .rev()
        .map(|v| (v.name.as_str(), v))
        .collect();

    let before = graph.entities.len();
    let mut kept: FxHashSet<String> = FxHashSet::default();
    graph.entities.retain(|entity| {
        if !by_name.contains_key(entity.name.as_str()) {
            return true;
        }
        if options.is_allow_listed(&entity.cleaned_name) {
            kept.insert(entity.name.clone());
            return true;
        }
        tracing::debug!(entity = %entity.name, "structure replaced by value-set");
        false
    });
    let removed = before - graph.entities.len();

    graph.entities.extend(value_sets.iter().map(value_set_entity));
    let generic_referenced = graph
        .entities
        .iter()
        .flat_map(|e| e.properties.iter())
        .any(|p| {
            p.cleaned_type == generic_code::CLEANED_NAME
                || p.codeable_binding
                    .as_ref()
                    .is_some_and(|b| b.cleaned_name == generic_code::CLEANED_NAME)
        });
    let generic_declared = value_sets
        .iter()
        .any(|v| v.cleaned_name == generic_code::CLEANED_NAME);
    if generic_referenced && !generic_declared {
        graph.entities.push(generic_entity());
    }

    let mut retyped = 0usize;
    for entity in &mut graph.entities {
        if let Some(basic) = basic_type_name(&entity.name) {
            entity.cleaned_name = basic.to_string();
            entity.is_basic_type = true;
        }
        for property in &mut entity.properties {
            if property.is_code || kept.contains(&property.type_name) {
                continue;
            }
            if let Some(value_set) = by_name.get(property.type_name.as_str()) {
                property.cleaned_type = value_set.cleaned_name.clone();
                property.is_code = true;
                retyped += 1;
            }
        }
    }

    graph.reindex();
    tracing::info!(
        pass = "value_sets",
        materialized = value_sets.len(),
        removed,
        retyped,
        "materialized value-sets"
    );
}

fn value_set_entity(value_set: &ValueSet) -> Entity {
    let mut entity = Entity::new(value_set.name.as_str(), value_set.source.as_str());
    entity.cleaned_name = value_set.cleaned_name.clone();
    entity.plural_name = value_set.cleaned_name.clone();
    entity.snake_name = value_set.snake_name.clone();
    entity.kind = EntityKind::ValueSet;
    entity.declared_type = Some(VALUE_SET_TYPE.to_string());
    entity.documentation = value_set.documentation.clone();
    entity.concepts = value_set.concepts.clone();
    entity.value_set_url = Some(value_set.url.clone());
    entity.url_aliases = value_set.url_aliases.clone();
    entity
}

fn generic_entity() -> Entity {
    let mut entity = Entity::new(generic_code::NAME, "");
    entity.cleaned_name = generic_code::CLEANED_NAME.to_string();
    entity.plural_name = generic_code::CLEANED_NAME.to_string();
    entity.snake_name = generic_code::SNAKE_NAME.to_string();
    entity.kind = EntityKind::ValueSet;
    entity.declared_type = Some(VALUE_SET_TYPE.to_string());
    entity
}
