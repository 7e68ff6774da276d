//! Auxiliary dataset extraction.
//!
//! ```text
//! TerminologyDocument ──► extract_value_sets() ──► Vec<ValueSet> + ValueSetIndex
//! ProfileDocument(s)  ──► extract_references() ──► Vec<ReferenceRecord>
//! ProfileDocument     ──► extract_bindings()   ──► Vec<BindingRecord>
//!                                 │
//!                                 ▼
//!                  locate_property(ProvisionalGraph, path)
//! ```
//!
//! Records are keyed by structural path. The resolution passes locate each
//! path in the provisional graph; a path that does not resolve degrades that
//! one field and is reported, it never aborts the run.

mod bindings;
mod path;
mod references;
mod value_sets;

pub use bindings::{BindingRecord, BindingTarget, extract_bindings};
pub use path::{PathMiss, PropertyKey, locate_property, realize};
pub use references::{ProfileScope, ReferenceRecord, extract_references};
pub use value_sets::{
    ValueSetIndex, ValueSetMatch, dedup_aliases, extract_value_sets, normalize_url, value_set_name,
};
