//! Codeable-binding extraction from the resource profiles.

use crate::base::constants::{CODE_TYPE, CODEABLE_TYPES};
use crate::source::ProfileDocument;

/// What a binding does to its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingTarget {
    /// `Coding`/`CodeableConcept`: keep the type, add a named hint.
    Concept,
    /// `code`: retype the property to the value-set.
    Code,
}

/// A named terminology binding at one structural path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRecord {
    pub path: String,
    pub binding_name: String,
    pub value_set_url: Option<String>,
    pub target: BindingTarget,
}

/// Extract binding records.
///
/// Only elements whose first type is coded and whose binding carries a
/// binding name produce a record.
pub fn extract_bindings(resource_profiles: &ProfileDocument) -> Vec<BindingRecord> {
    let mut records = Vec::new();
    for element in resource_profiles.elements() {
        let Some(first) = element.types.first() else {
            continue;
        };
        let target = if CODEABLE_TYPES.contains(&first.code.as_str()) {
            BindingTarget::Concept
        } else if first.code == CODE_TYPE {
            BindingTarget::Code
        } else {
            continue;
        };
        for binding in &element.bindings {
            let Some(binding_name) = &binding.binding_name else {
                continue;
            };
            records.push(BindingRecord {
                path: element.path.clone(),
                binding_name: binding_name.clone(),
                value_set_url: binding.value_set.clone(),
                target,
            });
        }
    }
    tracing::info!(records = records.len(), "extracted binding records");
    records
}
