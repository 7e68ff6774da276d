//! # fhir-catalog
//!
//! Resolution engine that links FHIR structural schemas, profiles and
//! terminology into one typed entity catalog.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! reach     → Reference graph and leveled reachability
//!   ↓
//! resolve   → Linker: the seven resolution passes, options, diagnostics
//!   ↓
//! extract   → Value-sets, reference records, binding records, path lookup
//!   ↓
//! ingest    → Schema records to the provisional entity graph
//!   ↓
//! catalog   → Entity, Property, ValueSet, the resolved Catalog
//!   ↓
//! source    → Document loading (dir/zip), XML parsing, SchemaError
//!   ↓
//! base      → Naming rules, fixed tables, diagnostics
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use fhir_catalog::{ReachabilityOptions, ResolveOptions, resolve_dir};
//!
//! let resolution = resolve_dir("definitions", &ResolveOptions::default())?;
//! for diagnostic in resolution.diagnostics.iter() {
//!     eprintln!("{diagnostic}");
//! }
//! let patient = resolution.catalog.entity("Patient");
//!
//! let (_graph, reachability) = ReachabilityOptions::default().run(&resolution.catalog);
//! println!("{:?}", reachability.stats());
//! # Ok::<(), fhir_catalog::SchemaError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → source → catalog → ingest → extract → resolve → reach)
// ============================================================================

/// Foundation: naming rules, fixed tables, diagnostics
pub mod base;

/// Source documents: loading, XML parsing, typed records, fatal errors
pub mod source;

/// The resolved entity catalog
pub mod catalog;

/// Structural ingestion into the provisional graph
pub mod ingest;

/// Auxiliary dataset extraction and path lookup
pub mod extract;

/// The resolution engine
pub mod resolve;

/// Reference graph and reachability
pub mod reach;

// Re-export the entry points
pub use base::codes;
#[cfg(feature = "archive")]
pub use resolve::resolve_archive;
pub use resolve::{
    Diagnostic, Diagnostics, LinkInputs, Linker, Resolution, ResolveOptions, Severity, resolve,
    resolve_dir,
};

// Re-export the catalog model
pub use catalog::{
    Catalog, CodeableBinding, Concept, Entity, EntityKind, Property, ReferenceBinding, ValueSet,
};

// Re-export sources and reachability
pub use reach::{Partition, ReachabilityMap, ReachabilityOptions, ReferenceGraph};
pub use source::{SchemaError, SchemaSources};
