//! Structural ingestion.
//!
//! ```text
//! SchemaDocument (primitives) ─┐
//!                              ├─► ingest() ─► ProvisionalGraph
//! SchemaDocument (structures) ─┘                 ├── entities (raw type names)
//!                                                ├── primitives (+ demoted aliases)
//!                                                └── known_resources
//! ```
//!
//! Type names stay unresolved here. The [`resolve`](crate::resolve) passes
//! bind them.

mod graph;
mod ingestor;

pub use graph::ProvisionalGraph;
pub use ingestor::{ingest, member_properties, primitive_table};
