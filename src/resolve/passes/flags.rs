//! Pass 1: mark the distinguished roots.

use crate::base::constants::{EXTENSION_ROOT, RESOURCE_ROOT};
use crate::ingest::ProvisionalGraph;

pub fn run(graph: &mut ProvisionalGraph) {
    for entity in &mut graph.entities {
        match entity.name.as_str() {
            RESOURCE_ROOT => entity.is_resource = true,
            EXTENSION_ROOT => entity.is_extension = true,
            _ => {}
        }
    }
    tracing::info!(pass = "flags", "marked root entities");
}
