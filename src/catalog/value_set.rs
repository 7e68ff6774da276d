//! Value-sets and their concepts.

use serde::{Deserialize, Serialize};

/// One coded concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub code: String,
    /// Display text; the code when the source has none.
    pub display: String,
    pub cleaned_display: String,
    pub definition: Option<String>,
    /// Canonical URL of the value-set the concept was read from.
    pub value_set_url: String,
}

/// A named set of coded concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSet {
    pub id: String,
    /// Identity name (`v3.` removed, `/` replaced by `_or_`).
    pub name: String,
    /// Name as written in the source.
    pub fhir_name: String,
    /// Entity join key (`AdministrativeGenderCode`).
    pub cleaned_name: String,
    pub snake_name: String,
    /// Canonical URL.
    pub url: String,
    /// A code system's implicit value-set URL.
    pub value_set_url: Option<String>,
    /// Every canonical URL of the merged records, sorted.
    pub canonical_urls: Vec<String>,
    /// Every URL the value-set can be bound through.
    pub url_aliases: Vec<String>,
    pub concepts: Vec<Concept>,
    pub documentation: Vec<String>,
    pub source: String,
}
