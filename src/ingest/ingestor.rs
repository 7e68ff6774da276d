//! Structural ingestion: schema records to provisional entities.

use crate::base::constants::{
    ELEMENT_TYPE, MULTI_TARGET_SUFFIX, REFERENCE_TYPE, RESOURCE_CONTAINER, RESOURCE_ROOT,
    TYPE_OVERRIDES, VALUE_FIELD, XHTML_TYPE,
};
use crate::base::naming::{
    escape_keyword, escape_script_keyword, primitive_key, strip_primitive_suffix, to_lower_camel,
};
use crate::catalog::{Entity, PrimitiveEntry, PrimitiveOrigin, PrimitiveTable, Property};
use crate::source::{ComplexContent, ComplexTypeDecl, MemberDecl, Scalar, SchemaDocument};

use super::graph::ProvisionalGraph;

/// Build the provisional graph from the primitive schema and the structural
/// schemas, in order.
pub fn ingest(primitives: &SchemaDocument, structures: &[SchemaDocument]) -> ProvisionalGraph {
    let mut table = primitive_table(primitives);
    let mut entities = Vec::new();
    let mut demoted = 0usize;

    for document in structures {
        for decl in &document.complex_types {
            let entity = read_entity(decl, &document.name);
            if is_value_holder(&entity) {
                add_alias(&mut table, &entity);
                demoted += 1;
                continue;
            }
            entities.push(entity);
        }
    }

    let known_resources = known_resources(structures, &entities);
    for property in entities.iter_mut().flat_map(|e| e.properties.iter_mut()) {
        property.is_primitive = table.contains(&primitive_key(&property.type_name));
    }

    tracing::info!(
        entities = entities.len(),
        primitives = table.len(),
        demoted,
        "ingested structural definitions"
    );
    ProvisionalGraph::new(entities, table, known_resources)
}

/// Primitive table keyed by [`primitive_key`], plus the undeclared `xhtml`.
pub fn primitive_table(primitives: &SchemaDocument) -> PrimitiveTable {
    let mut table = PrimitiveTable::new();
    for decl in &primitives.simple_types {
        table.insert(
            primitive_key(&decl.name),
            PrimitiveEntry {
                origin: decl.kind.into(),
                scalar: decl.scalar,
            },
        );
    }
    table.insert(
        XHTML_TYPE,
        PrimitiveEntry {
            origin: PrimitiveOrigin::Pattern,
            scalar: Scalar::String,
        },
    );
    table
}

fn read_entity(decl: &ComplexTypeDecl, source: &str) -> Entity {
    let mut entity = Entity::new(decl.name.as_str(), source);
    entity.documentation = decl.documentation.clone();
    match &decl.content {
        ComplexContent::Extension { base, .. } => {
            entity.declared_type = Some(base.clone());
            entity.base_type = Some(base.clone());
        }
        ComplexContent::Sequence { .. } => {
            entity.declared_type = Some(ELEMENT_TYPE.to_string());
        }
        ComplexContent::Choice { .. } | ComplexContent::Opaque => return entity,
    }
    entity.properties = decl
        .members()
        .iter()
        .flat_map(|member| member_properties(member, &decl.name))
        .collect();
    tracing::trace!(entity = %entity.name, properties = entity.properties.len(), "read entity");
    entity
}

/// One member becomes one property, or two for a `Reference`: the
/// multi-target sibling first, then the legacy field.
pub fn member_properties(member: &MemberDecl, owner: &str) -> Vec<Property> {
    let (name, raw_type) = match (&member.reference, &member.name, &member.type_name) {
        (Some(reference), _, _) => match reference.split_once(':') {
            Some((prefix, local)) => (local.to_string(), prefix.to_string()),
            None => (reference.clone(), reference.clone()),
        },
        (None, Some(name), Some(type_name)) => (name.clone(), type_name.clone()),
        _ => {
            tracing::debug!(owner, member = ?member.name, "skipping member without name or type");
            return Vec::new();
        }
    };

    let mut type_name = if name == VALUE_FIELD {
        raw_type
    } else {
        strip_primitive_suffix(&raw_type).to_string()
    };
    if let Some((_, _, actual)) = TYPE_OVERRIDES
        .iter()
        .find(|(field, declared, _)| *field == name && *declared == type_name)
    {
        type_name = (*actual).to_string();
    }

    let mut property = Property::new(name.as_str(), type_name.as_str(), owner);
    property.optional = member.min_occurs.as_deref().is_none_or(|m| m == "0");
    property.is_list = member.max_occurs.as_deref() == Some("unbounded");
    property.documentation = member.documentation.iter().cloned().collect();

    if type_name == REFERENCE_TYPE {
        let mut sibling = property.clone();
        sibling.name = format!("{name}{MULTI_TARGET_SUFFIX}");
        sibling.cleaned_name = format!("{}{MULTI_TARGET_SUFFIX}", escape_keyword(&name));
        sibling.js_name = format!("{}{MULTI_TARGET_SUFFIX}", escape_script_keyword(&name));
        sibling.is_multi_target = true;
        vec![sibling, property]
    } else {
        vec![property]
    }
}

/// A bare value holder: an `Element` whose `value` field is a primitive,
/// list or enumeration.
fn is_value_holder(entity: &Entity) -> bool {
    entity.declared_type.as_deref() == Some(ELEMENT_TYPE)
        && entity.properties.iter().any(|p| {
            p.name == VALUE_FIELD
                && (p.cleaned_type.ends_with("-primitive")
                    || p.cleaned_type.ends_with("-list")
                    || p.cleaned_type.ends_with("Enum"))
        })
}

fn add_alias(table: &mut PrimitiveTable, entity: &Entity) {
    let scalar = entity
        .properties
        .iter()
        .find(|p| p.name == VALUE_FIELD)
        .and_then(|p| table.get(&primitive_key(&p.type_name)))
        .map(|entry| entry.scalar)
        .unwrap_or(Scalar::String);
    let key = to_lower_camel(&entity.cleaned_name);
    tracing::debug!(entity = %entity.name, key = %key, "demoted value holder");
    table.insert(
        key,
        PrimitiveEntry {
            origin: PrimitiveOrigin::Alias,
            scalar,
        },
    );
}

/// Element refs of the resource container in file order, then `Resource`.
fn known_resources(structures: &[SchemaDocument], entities: &[Entity]) -> Vec<String> {
    let container = structures
        .iter()
        .flat_map(|doc| doc.complex_types.iter())
        .find(|decl| decl.name == RESOURCE_CONTAINER);

    match container {
        Some(decl) => {
            let mut names: Vec<String> = decl
                .members()
                .iter()
                .filter_map(|m| m.reference.clone().or_else(|| m.name.clone()))
                .collect();
            if !names.iter().any(|n| n == RESOURCE_ROOT) {
                names.push(RESOURCE_ROOT.to_string());
            }
            names
        }
        None => entities.iter().map(|e| e.name.clone()).collect(),
    }
}
