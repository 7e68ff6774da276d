//! The resource reference graph.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::base::constants::{EXTENSION_ROOT, REFERENCE_TYPE, RESOURCE_CONTAINER, RESOURCE_ROOT};
use crate::catalog::{Catalog, Entity, EntityKind, Property, ReferenceBinding};

use super::reachability::Partition;

/// Field names never walked into.
const EXTENSION_FIELDS: &[&str] = &["extension", "modifierExtension"];

/// How the reference graph is walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Field types not walked into.
    pub skip_types: Vec<String>,
    /// How often one field name may repeat on a single path.
    pub max_field_depth: usize,
    /// Edges the definitions do not declare.
    pub extra_edges: Vec<ExtraEdge>,
    /// Resources whose fields are not walked.
    pub skip_resources: Vec<String>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            skip_types: vec![EXTENSION_ROOT.to_string(), "Identifier".to_string()],
            max_field_depth: 2,
            extra_edges: Vec::new(),
            skip_resources: Vec::new(),
        }
    }
}

/// A caller-declared edge: `referrer` reaches `target` through `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraEdge {
    pub target: String,
    pub referrer: String,
    pub path: String,
}

/// One reference field of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEdge {
    /// Resource holding the field.
    pub referrer: String,
    /// Dotted field path from the resource (`contact.organization`).
    pub path: String,
    pub binding: ReferenceBinding,
}

/// Which resources reference which, derived from the reference bindings of
/// a catalog.
///
/// Adjacency is stored reversed: for each target, the resources that can
/// point at it. A wildcard field makes its resource a referrer of every
/// known resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceGraph {
    edges: Vec<ReferenceEdge>,
    referenced_by: BTreeMap<String, BTreeSet<String>>,
    nodes: BTreeSet<String>,
}

impl ReferenceGraph {
    pub fn build(catalog: &Catalog, options: &GraphOptions) -> Self {
        let mut graph = Self {
            nodes: catalog.known_resources().iter().cloned().collect(),
            ..Self::default()
        };

        for resource in catalog.entities_of_kind(EntityKind::Resource) {
            if options.skip_resources.contains(&resource.cleaned_name) {
                tracing::debug!(resource = %resource.cleaned_name, "skipping resource");
                continue;
            }
            let mut walker = Walker {
                catalog,
                options,
                resource,
                path: Vec::new(),
                types: Vec::new(),
                edges: Vec::new(),
            };
            for property in &resource.properties {
                if property.is_multi_target || property.is_primitive {
                    continue;
                }
                walker.walk(property);
            }
            for edge in walker.edges {
                graph.add(edge, catalog.known_resources());
            }
        }

        for extra in &options.extra_edges {
            graph.add(
                ReferenceEdge {
                    referrer: extra.referrer.clone(),
                    path: extra.path.clone(),
                    binding: ReferenceBinding::Targets(vec![extra.target.clone()]),
                },
                catalog.known_resources(),
            );
        }

        tracing::info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built reference graph"
        );
        graph
    }

    fn add(&mut self, edge: ReferenceEdge, known_resources: &[String]) {
        let targets: Vec<String> = match &edge.binding {
            ReferenceBinding::Any => known_resources.to_vec(),
            ReferenceBinding::Targets(targets) => targets.clone(),
        };
        for target in targets {
            self.nodes.insert(target.clone());
            self.referenced_by
                .entry(target)
                .or_default()
                .insert(edge.referrer.clone());
        }
        self.edges.push(edge);
    }

    /// Every reference field found, in catalog order.
    pub fn edges(&self) -> &[ReferenceEdge] {
        &self.edges
    }

    /// Known resources plus every referenced name.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Resources with a field that may point at `target`.
    pub fn referrers_of(&self, target: &str) -> Option<&BTreeSet<String>> {
        self.referenced_by.get(target)
    }

    /// Per resource, the field paths whose binding may reach a non-primary
    /// entity. Wildcard fields always count.
    pub fn fields_outside(&self, partition: &Partition) -> BTreeMap<String, Vec<String>> {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for edge in &self.edges {
            let outside = match &edge.binding {
                ReferenceBinding::Any => true,
                ReferenceBinding::Targets(targets) => {
                    targets.iter().any(|t| !partition.is_primary(t))
                }
            };
            if !outside {
                continue;
            }
            let paths = fields.entry(edge.referrer.clone()).or_default();
            if !paths.contains(&edge.path) {
                paths.push(edge.path.clone());
            }
        }
        fields
    }
}

/// Depth-first walk of one resource's fields.
struct Walker<'a> {
    catalog: &'a Catalog,
    options: &'a GraphOptions,
    resource: &'a Entity,
    path: Vec<&'a str>,
    types: Vec<&'a str>,
    edges: Vec<ReferenceEdge>,
}

impl<'a> Walker<'a> {
    fn walk(&mut self, field: &'a Property) {
        if self.options.skip_types.contains(&field.cleaned_type) {
            return;
        }
        let name = field.name.as_str();
        let repeats = self.path.iter().filter(|&&segment| segment == name).count();
        let nested = self.types.iter().filter(|&&ty| ty == field.cleaned_type).count();
        if repeats >= self.options.max_field_depth || nested >= self.options.max_field_depth {
            return;
        }

        self.path.push(name);
        if field.cleaned_type == REFERENCE_TYPE {
            if let Some(binding) = &field.reference {
                self.edges.push(ReferenceEdge {
                    referrer: self.resource.cleaned_name.clone(),
                    path: self.path.join("."),
                    binding: binding.clone(),
                });
            }
        } else if let Some(target) = self.catalog.entity(walked_type(field)) {
            self.types.push(field.cleaned_type.as_str());
            for property in &target.properties {
                if property.is_multi_target
                    || property.is_primitive
                    || EXTENSION_FIELDS.contains(&property.name.as_str())
                {
                    continue;
                }
                self.walk(property);
            }
            self.types.pop();
        }
        self.path.pop();
    }
}

/// The entity a field's walk continues into. The resource container has no
/// fields of its own, so `contained` is walked as a `Resource`.
fn walked_type(field: &Property) -> &str {
    if field.cleaned_type == RESOURCE_CONTAINER {
        RESOURCE_ROOT
    } else {
        &field.cleaned_type
    }
}
