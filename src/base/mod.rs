//! Foundation for the catalog toolchain.
//!
//! - [`naming`] - identifier normalization (case, keywords, plurals)
//! - [`constants`] - fixed names, tables and the definitions layout
//! - [`diagnostics`] - recoverable conditions reported during a run
//!
//! This module has NO dependencies on other fhir_catalog modules.

pub mod constants;
pub mod diagnostics;
pub mod naming;

pub use diagnostics::{Diagnostic, Diagnostics, Severity, codes};
pub use naming::{
    basic_type_name, clean_display, clean_type_name, escape_keyword, escape_script_keyword, plural_name, primitive_key,
    strip_primitive_suffix, to_lower_camel,
};
