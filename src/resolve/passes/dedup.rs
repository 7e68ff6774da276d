//! Pass 7: the per-type deduplicated projection.

use rustc_hash::FxHashSet;

use crate::ingest::ProvisionalGraph;

/// Keep the first property of each resolved type. Coded properties bound
/// to the same value-set collapse into the first.
pub fn run(graph: &mut ProvisionalGraph) {
    let mut collapsed = 0usize;
    for entity in &mut graph.entities {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let unique: Vec<usize> = entity
            .properties
            .iter()
            .enumerate()
            .filter(|(_, p)| seen.insert(p.cleaned_type.as_str()))
            .map(|(i, _)| i)
            .collect();
        collapsed += entity.properties.len() - unique.len();
        entity.unique = unique;
    }
    tracing::info!(pass = "dedup", collapsed, "computed unique projections");
}
