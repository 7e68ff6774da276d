//! Pass 2: bind each property's declared type to an entity.

use crate::base::constants::{PLAIN_BASE_TYPES, RESOURCE_ROOT};
use crate::base::{Diagnostics, codes};
use crate::catalog::Entity;
use crate::ingest::ProvisionalGraph;

use super::property_path;

/// What a property learns from the entity its type names.
struct TypeTarget {
    declared_type: Option<String>,
    /// The target extends a nominal type rather than a structural element.
    nominal: bool,
    is_resource: bool,
    is_extension: bool,
}

impl TypeTarget {
    fn of(entity: &Entity) -> Self {
        Self {
            declared_type: entity.declared_type.clone(),
            nominal: entity
                .base_type
                .as_deref()
                .is_some_and(|base| !PLAIN_BASE_TYPES.contains(&base)),
            is_resource: entity.is_resource || entity.name == RESOURCE_ROOT,
            is_extension: entity.is_extension,
        }
    }
}

pub fn run(graph: &mut ProvisionalGraph, diagnostics: &mut Diagnostics) {
    let targets: Vec<Vec<Option<TypeTarget>>> = graph
        .entities
        .iter()
        .map(|entity| {
            entity
                .properties
                .iter()
                .map(|p| graph.get(&p.type_name).map(TypeTarget::of))
                .collect()
        })
        .collect();

    let mut bound = 0usize;
    let mut rewritten = 0usize;
    for (entity, targets) in graph.entities.iter_mut().zip(targets) {
        for (index, target) in targets.into_iter().enumerate() {
            let property = &entity.properties[index];
            let Some(target) = target else {
                if !property.is_primitive {
                    let path = property_path(entity, property);
                    let message = format!("type '{}' is neither a primitive nor an entity", property.type_name);
                    diagnostics.warn(codes::UNRESOLVED_TYPE, path, message);
                }
                continue;
            };

            let property = &mut entity.properties[index];
            bound += 1;
            property.base_kind = target.declared_type.clone();
            property.is_extension_typed = target.is_extension;
            property.is_resource_typed = target.nominal || target.is_resource;
            if let (true, Some(declared)) = (target.nominal, target.declared_type) {
                tracing::trace!(property = %property.name, from = %property.cleaned_type, to = %declared, "nominal type");
                property.set_resolved_type(declared);
                rewritten += 1;
            }
        }
    }
    tracing::info!(pass = "types", bound, rewritten, "bound property types");
}
