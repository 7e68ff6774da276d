//! The resolution engine.
//!
//! ```text
//! LinkInputs ──► Linker::link()
//!                  1. flags       roots marked
//!                  2. types       declared types bound
//!                  3. inherit     bases flattened (topological)
//!                  4. references  reference records applied
//!                  5. codeable    terminology bindings applied
//!                  6. value_sets  value-sets materialized
//!                  7. dedup       unique projections
//!                         │
//!                         ▼
//!                  Catalog::build ──► Resolution { catalog, diagnostics }
//! ```
//!
//! Passes run strictly in order; each needs the complete output of the one
//! before. Only an inheritance cycle aborts a run. Every other miss degrades
//! one property and is recorded in [`Diagnostics`].

mod options;
mod passes;

pub use options::ResolveOptions;
pub(crate) use options::load_options;

pub use crate::base::{Diagnostic, Diagnostics, Severity, codes};

use std::path::Path;

use serde::Serialize;

use crate::catalog::{Catalog, ValueSet};
use crate::extract::{
    BindingRecord, ReferenceRecord, ValueSetIndex, extract_bindings, extract_references,
    extract_value_sets,
};
use crate::ingest::{ProvisionalGraph, ingest};
use crate::source::{ParsedSources, SchemaError, SchemaSources};

/// Everything the passes consume, fully materialized.
#[derive(Debug, Clone)]
pub struct LinkInputs {
    pub graph: ProvisionalGraph,
    pub value_sets: Vec<ValueSet>,
    pub references: Vec<ReferenceRecord>,
    pub bindings: Vec<BindingRecord>,
    /// Diagnostics raised while extracting.
    pub diagnostics: Diagnostics,
}

impl LinkInputs {
    /// Ingest the structural schemas, then extract the auxiliary datasets.
    ///
    /// The extractions are independent and run in parallel; all of them
    /// finish before any pass starts.
    pub fn from_parsed(parsed: &ParsedSources, options: &ResolveOptions) -> Self {
        let graph = ingest(&parsed.primitives, &parsed.structures);
        let ((references, diagnostics), (bindings, value_sets)) = rayon::join(
            || {
                let mut diagnostics = Diagnostics::new();
                let references = extract_references(
                    parsed.type_profiles.as_ref(),
                    &parsed.resource_profiles,
                    &graph.known_resources,
                    options.reference_scope,
                    &mut diagnostics,
                );
                (references, diagnostics)
            },
            || {
                rayon::join(
                    || extract_bindings(&parsed.resource_profiles),
                    || extract_value_sets(&parsed.terminology),
                )
            },
        );
        Self {
            graph,
            value_sets,
            references,
            bindings,
            diagnostics,
        }
    }
}

/// Result of a run: the catalog and every recoverable condition met.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub catalog: Catalog,
    pub diagnostics: Diagnostics,
}

/// Runs the passes over one set of inputs.
#[derive(Debug, Clone, Default)]
pub struct Linker {
    options: ResolveOptions,
}

impl Linker {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Run every pass and build the catalog.
    pub fn link(&self, inputs: LinkInputs) -> Result<Resolution, SchemaError> {
        let LinkInputs {
            mut graph,
            value_sets,
            references,
            bindings,
            mut diagnostics,
        } = inputs;

        passes::flags::run(&mut graph);
        passes::types::run(&mut graph, &mut diagnostics);
        passes::inherit::run(&mut graph, &mut diagnostics)?;
        passes::references::run(
            &mut graph,
            &references,
            self.options.expand_wildcards,
            &mut diagnostics,
        );
        let index = ValueSetIndex::new(&value_sets);
        passes::codeable::run(&mut graph, &bindings, &value_sets, &index, &mut diagnostics);
        passes::value_sets::run(&mut graph, &value_sets, &self.options);
        passes::dedup::run(&mut graph);

        let (catalog, rejected) = Catalog::build(
            graph.entities,
            value_sets,
            graph.primitives,
            graph.known_resources,
        );
        for entity in rejected {
            diagnostics.warn(
                codes::DUPLICATE_NAME,
                entity.name.as_str(),
                format!("cleaned name '{}' is already taken, entity dropped", entity.cleaned_name),
            );
        }
        check_dangling(&catalog, &mut diagnostics);

        tracing::info!(
            entities = catalog.len(),
            value_sets = catalog.value_sets().len(),
            diagnostics = diagnostics.len(),
            "resolution complete"
        );
        Ok(Resolution {
            catalog,
            diagnostics,
        })
    }
}

/// Report declared properties whose resolved type is not in the catalog.
fn check_dangling(catalog: &Catalog, diagnostics: &mut Diagnostics) {
    for entity in catalog.entities() {
        for property in entity.own_properties() {
            if property.is_primitive || catalog.resolves(&property.type_key, &property.cleaned_type) {
                continue;
            }
            diagnostics.warn(
                codes::DANGLING_TYPE,
                format!("{}.{}", entity.name, property.name),
                format!("resolved type '{}' is not in the catalog", property.cleaned_type),
            );
        }
    }
}

/// Parse, ingest, extract and link one set of definition documents.
pub fn resolve(sources: &SchemaSources, options: &ResolveOptions) -> Result<Resolution, SchemaError> {
    let parsed = sources.parse()?;
    let inputs = LinkInputs::from_parsed(&parsed, options);
    Linker::new(options.clone()).link(inputs)
}

/// Load an unpacked definitions directory and resolve it.
///
/// [`ResolveOptions::filter_to_resource`] restricts which structural schemas
/// are loaded.
pub fn resolve_dir(dir: impl AsRef<Path>, options: &ResolveOptions) -> Result<Resolution, SchemaError> {
    let sources = SchemaSources::from_dir(dir, options.filter_to_resource.as_deref())?;
    resolve(&sources, options)
}

/// Load a zipped definitions bundle and resolve it.
#[cfg(feature = "archive")]
pub fn resolve_archive(bytes: Vec<u8>, options: &ResolveOptions) -> Result<Resolution, SchemaError> {
    let sources = SchemaSources::from_archive(bytes, options.filter_to_resource.as_deref())?;
    resolve(&sources, options)
}
