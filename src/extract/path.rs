//! Structural path location over the provisional graph.

use std::borrow::Cow;

use crate::base::constants::{CHOICE_MARKER, MULTI_TARGET_SUFFIX};
use crate::catalog::{Entity, Property};
use crate::ingest::ProvisionalGraph;

/// Identity of a property shared by every inherited copy: the entity that
/// declared it and its source name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    pub declared_in: String,
    pub name: String,
}

impl PropertyKey {
    pub fn of(property: &Property) -> Self {
        Self {
            declared_in: property.declared_in.clone(),
            name: property.name.clone(),
        }
    }
}

/// A path segment that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMiss {
    pub segment: String,
    pub message: String,
}

impl std::fmt::Display for PathMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Find the property a structural path names.
///
/// The first segment is an entity source name; intermediate segments follow
/// each property's resolved type. A `[x]` segment is realized with
/// `choice_type` (`value[x]` → `valueReference`, `value[x]V2` →
/// `valueReferenceV2`). Single-segment paths name an entity, not a property,
/// and yield `Ok(None)`.
pub fn locate_property(
    graph: &ProvisionalGraph,
    path: &str,
    choice_type: &str,
) -> Result<Option<PropertyKey>, PathMiss> {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return Ok(None);
    };
    let Some((root, intermediate)) = parents.split_first() else {
        return Ok(None);
    };

    let mut entity = graph.get(root).ok_or_else(|| PathMiss {
        segment: (*root).to_string(),
        message: format!("entity '{root}' not found"),
    })?;
    for segment in intermediate {
        let property = find_property(entity, segment, choice_type)?;
        entity = graph.get_cleaned(&property.cleaned_type).ok_or_else(|| PathMiss {
            segment: (*segment).to_string(),
            message: format!(
                "type '{}' of {}.{} not found",
                property.cleaned_type, entity.name, property.name
            ),
        })?;
    }

    let property = find_property(entity, leaf, choice_type)?;
    Ok(Some(PropertyKey::of(property)))
}

fn find_property<'a>(
    entity: &'a Entity,
    segment: &str,
    choice_type: &str,
) -> Result<&'a Property, PathMiss> {
    let name = realize(segment, choice_type);
    entity.property(&name).ok_or_else(|| PathMiss {
        segment: segment.to_string(),
        message: format!("property '{name}' not found in {}", entity.name),
    })
}

/// Replace the choice marker with a concrete type name.
pub fn realize<'a>(segment: &'a str, choice_type: &str) -> Cow<'a, str> {
    let multi_target_marker = format!("{CHOICE_MARKER}{MULTI_TARGET_SUFFIX}");
    if let Some(prefix) = segment.strip_suffix(multi_target_marker.as_str()) {
        Cow::Owned(format!("{prefix}{choice_type}{MULTI_TARGET_SUFFIX}"))
    } else if let Some(prefix) = segment.strip_suffix(CHOICE_MARKER) {
        Cow::Owned(format!("{prefix}{choice_type}"))
    } else {
        Cow::Borrowed(segment)
    }
}
