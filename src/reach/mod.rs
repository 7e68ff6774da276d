//! Reachability over the resource reference graph.
//!
//! ```text
//! Catalog ──► ReferenceGraph::build(GraphOptions)
//!               edges: resource ─field path─► targets | Any
//!               referenced_by: target → {referrers}
//!                     │
//!                     ▼  Partition { primary, excluded }
//!             ReachabilityMap::build(level)
//!               other entity → {entities reaching it in ≤ level hops}
//! ```
//!
//! Both structures are derived from a finished catalog and never feed back
//! into resolution.

mod graph;
mod reachability;

pub use graph::{ExtraEdge, GraphOptions, ReferenceEdge, ReferenceGraph};
pub use reachability::{
    Partition, ReachabilityMap, ReachabilityOptions, ReachabilityStats,
};
