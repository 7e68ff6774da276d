//! Reference-target extraction from the profile bundles.

use serde::{Deserialize, Serialize};

use crate::base::constants::{MULTI_TARGET_SUFFIX, REFERENCE_TYPE, RESOURCE_ROOT};
use crate::base::{Diagnostics, codes};
use crate::source::ProfileDocument;

/// Allowed targets of one structural path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// Structural path, e.g. `Patient.generalPractitioner`.
    pub path: String,
    /// Target entity names; `Resource` means any.
    pub targets: Vec<String>,
    /// Synthesized for the multi-target sibling; `targets` is the full
    /// known-resource list.
    pub multi_target: bool,
}

impl ReferenceRecord {
    /// Whether the record means "any entity".
    pub fn is_wildcard(&self) -> bool {
        !self.multi_target && self.targets.iter().any(|t| t == RESOURCE_ROOT)
    }
}

/// Which profile bundles to read references from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileScope {
    /// Type profiles, then resource profiles.
    #[default]
    All,
    ResourcesOnly,
}

/// Extract reference records from the profile bundles.
///
/// A record whose targets contain `Resource` is preceded by a multi-target
/// record (path suffixed with `V2`) listing every known resource.
pub fn extract_references(
    type_profiles: Option<&ProfileDocument>,
    resource_profiles: &ProfileDocument,
    known_resources: &[String],
    scope: ProfileScope,
    diagnostics: &mut Diagnostics,
) -> Vec<ReferenceRecord> {
    let mut records = Vec::new();
    if let (ProfileScope::All, Some(types)) = (scope, type_profiles) {
        collect(types, known_resources, &mut records, diagnostics);
    }
    collect(resource_profiles, known_resources, &mut records, diagnostics);

    tracing::info!(records = records.len(), "extracted reference records");
    records
}

fn collect(
    document: &ProfileDocument,
    known_resources: &[String],
    records: &mut Vec<ReferenceRecord>,
    diagnostics: &mut Diagnostics,
) {
    for element in document.elements() {
        for type_record in &element.types {
            if !type_record.code.ends_with(REFERENCE_TYPE) {
                continue;
            }
            if type_record.target_profiles.is_empty() {
                diagnostics.warn(
                    codes::MISSING_TARGET_PROFILE,
                    element.path.as_str(),
                    format!("{} type has no target profile in {}", type_record.code, document.name),
                );
                continue;
            }
            let record = ReferenceRecord {
                path: element.path.clone(),
                targets: type_record.target_names(),
                multi_target: false,
            };
            if record.is_wildcard() {
                records.push(ReferenceRecord {
                    path: format!("{}{MULTI_TARGET_SUFFIX}", element.path),
                    targets: known_resources.to_vec(),
                    multi_target: true,
                });
            }
            tracing::trace!(path = %record.path, targets = ?record.targets, "reference record");
            records.push(record);
        }
    }
}
