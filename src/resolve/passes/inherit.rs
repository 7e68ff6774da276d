//! Pass 3: flatten single inheritance.
//!
//! Entities are processed in topological order over their base edges, so a
//! base is always flattened before any descendant copies its properties.
//! Declaration order is not trusted.

use crate::base::constants::{BACKBONE_ELEMENT, RESOURCE_ROOT};
use crate::base::naming::plural_name;
use crate::base::{Diagnostics, codes};
use crate::catalog::{Entity, EntityKind};
use crate::ingest::ProvisionalGraph;
use crate::source::SchemaError;

pub fn run(graph: &mut ProvisionalGraph, diagnostics: &mut Diagnostics) -> Result<(), SchemaError> {
    let order = topological_order(graph)?;

    let mut flattened = 0usize;
    for index in order {
        let Some(base) = graph.entities[index].base_type.clone() else {
            continue;
        };
        let Some(base_index) = graph.index_of(&base) else {
            let entity = &graph.entities[index];
            diagnostics.warn(
                codes::UNRESOLVED_BASE,
                entity.name.as_str(),
                format!("base type '{base}' not found"),
            );
            continue;
        };

        let base_entity = &graph.entities[base_index];
        let inherited = base_entity.properties.clone();
        let mut ancestors = vec![base];
        for ancestor in &base_entity.ancestors {
            if !ancestors.contains(ancestor) {
                ancestors.push(ancestor.clone());
            }
        }

        let entity = &mut graph.entities[index];
        let own = std::mem::replace(&mut entity.properties, inherited);
        entity.properties.extend(own);
        entity.is_resource |= ancestors.iter().any(|a| a == RESOURCE_ROOT);
        entity.ancestors = ancestors;
        flattened += 1;
    }

    for entity in &mut graph.entities {
        entity.kind = kind_of(entity);
        if entity.kind == EntityKind::Resource {
            entity.plural_name = plural_name(&entity.cleaned_name);
        }
    }

    tracing::info!(pass = "inherit", flattened, "flattened inheritance");
    Ok(())
}

fn kind_of(entity: &Entity) -> EntityKind {
    if entity.is_resource {
        EntityKind::Resource
    } else if entity.name.contains('.') || entity.ancestors.iter().any(|a| a == BACKBONE_ELEMENT) {
        EntityKind::BackboneElement
    } else {
        EntityKind::Structure
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// Entity indices with every resolvable base before its descendants.
fn topological_order(graph: &ProvisionalGraph) -> Result<Vec<usize>, SchemaError> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut stack = Vec::new();
    let mut order = Vec::with_capacity(graph.len());
    for index in 0..graph.len() {
        visit(graph, index, &mut marks, &mut stack, &mut order)?;
    }
    Ok(order)
}

fn visit(
    graph: &ProvisionalGraph,
    index: usize,
    marks: &mut [Mark],
    stack: &mut Vec<usize>,
    order: &mut Vec<usize>,
) -> Result<(), SchemaError> {
    match marks[index] {
        Mark::Done => return Ok(()),
        Mark::Visiting => {
            let start = stack.iter().position(|&i| i == index).unwrap_or(0);
            let mut chain: Vec<&str> = stack[start..]
                .iter()
                .map(|&i| graph.entities[i].name.as_str())
                .collect();
            chain.push(graph.entities[index].name.as_str());
            return Err(SchemaError::InheritanceCycle {
                file: graph.entities[index].source.clone(),
                chain: chain.join(" -> "),
            });
        }
        Mark::Unvisited => {}
    }

    marks[index] = Mark::Visiting;
    stack.push(index);
    let base_index = graph.entities[index]
        .base_type
        .as_deref()
        .and_then(|base| graph.index_of(base));
    if let Some(base_index) = base_index {
        visit(graph, base_index, marks, stack, order)?;
    }
    stack.pop();
    marks[index] = Mark::Done;
    order.push(index);
    Ok(())
}
