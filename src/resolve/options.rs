//! Resolution options.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::base::constants::DEFAULT_VALUE_SET_ALLOW_LIST;
use crate::extract::ProfileScope;
use crate::source::SchemaError;

/// Knobs of one resolution run.
///
/// Every field has a default, so a configuration file only names what it
/// changes:
///
/// ```yaml
/// expand_wildcards: true
/// value_set_allow_list: [PractitionerRole]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Entities kept as structures even though a value-set has the same name.
    pub value_set_allow_list: Vec<String>,
    /// Replace `Any` reference bindings with the known-resource list.
    pub expand_wildcards: bool,
    /// Which profile bundles contribute reference records.
    pub reference_scope: ProfileScope,
    /// Keep only structural schemas whose file name starts with this prefix.
    pub filter_to_resource: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            value_set_allow_list: DEFAULT_VALUE_SET_ALLOW_LIST
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            expand_wildcards: false,
            reference_scope: ProfileScope::All,
            filter_to_resource: None,
        }
    }
}

impl ResolveOptions {
    /// Options for a run restricted to one resource's schema: wildcards are
    /// expanded and only resource profiles contribute references.
    pub fn for_resource(prefix: impl Into<String>) -> Self {
        Self {
            expand_wildcards: true,
            reference_scope: ProfileScope::ResourcesOnly,
            filter_to_resource: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Load options from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        load_options(path.as_ref())
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::Options(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(yaml).map_err(|e| SchemaError::Options(e.to_string()))
    }

    pub(crate) fn is_allow_listed(&self, cleaned_name: &str) -> bool {
        self.value_set_allow_list.iter().any(|n| n == cleaned_name)
    }
}

/// Read an options file, choosing the format by extension.
pub(crate) fn load_options<T: DeserializeOwned>(path: &Path) -> Result<T, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|error| SchemaError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => {
            serde_json::from_str(&content).map_err(|e| SchemaError::Options(e.to_string()))
        }
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|e| SchemaError::Options(e.to_string()))
        }
        _ => Err(SchemaError::Options(format!(
            "unsupported options file {}: expected .json, .yaml or .yml",
            path.display()
        ))),
    }
}
