//! Terminology extraction: code systems and value-sets to [`ValueSet`]s.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::base::naming::{clean_display, to_lower_camel};
use crate::base::{Diagnostics, codes};
use crate::catalog::{Concept, ValueSet};
use crate::source::{ConceptRecord, TerminologyDocument, TerminologyKind, TerminologyRecord};

/// Extract every value-set of a terminology bundle.
///
/// A code system and a value-set with the same name merge into one entry at
/// the position of the first. The value-set's own fields win; URLs are
/// unioned and concepts fall back to the code system's.
pub fn extract_value_sets(document: &TerminologyDocument) -> Vec<ValueSet> {
    let mut value_sets: Vec<ValueSet> = Vec::new();
    let mut kinds: Vec<TerminologyKind> = Vec::new();
    let mut by_name: FxHashMap<String, usize> = FxHashMap::default();

    for record in &document.records {
        let value_set = read_value_set(record, &document.name);
        match by_name.get(&value_set.name) {
            Some(&index) if kinds[index] != record.kind => {
                tracing::debug!(name = %value_set.name, "merging code system and value-set");
                let merged = merge(&value_sets[index], kinds[index], value_set, record.kind);
                value_sets[index] = merged;
                kinds[index] = TerminologyKind::ValueSet;
            }
            _ => {
                by_name.entry(value_set.name.clone()).or_insert(value_sets.len());
                value_sets.push(value_set);
                kinds.push(record.kind);
            }
        }
    }

    for value_set in &mut value_sets {
        value_set.url_aliases = dedup_aliases(&value_set.url_aliases);
    }

    tracing::info!(value_sets = value_sets.len(), "extracted value-sets");
    value_sets
}

/// Identity name: `v3.` removed, `/` replaced by `_or_`.
pub fn value_set_name(raw: &str) -> String {
    raw.replace("v3.", "").replace('/', "_or_")
}

fn read_value_set(record: &TerminologyRecord, source: &str) -> ValueSet {
    let name = value_set_name(&record.name);
    let clean = clean_display(&name);

    let concepts: Vec<Concept> = record
        .concepts
        .iter()
        .chain(record.includes.iter().flat_map(|i| i.concepts.iter()))
        .map(|c| make_concept(c, &record.url))
        .collect();

    let systems: BTreeSet<String> = record
        .includes
        .iter()
        .filter_map(|i| i.system.clone())
        .collect();
    let url_aliases = if systems.is_empty() {
        vec![record.url.clone()]
    } else {
        systems.into_iter().collect()
    };

    let canonical_urls: BTreeSet<String> = std::iter::once(record.url.clone())
        .chain(record.value_set.clone())
        .collect();

    ValueSet {
        id: record.id.clone(),
        fhir_name: record.name.clone(),
        cleaned_name: format!("{clean}Code"),
        snake_name: to_lower_camel(&clean),
        name,
        url: record.url.clone(),
        value_set_url: record.value_set.clone(),
        canonical_urls: canonical_urls.into_iter().collect(),
        url_aliases,
        concepts,
        documentation: record.description.iter().cloned().collect(),
        source: source.to_string(),
    }
}

fn make_concept(record: &ConceptRecord, value_set_url: &str) -> Concept {
    let display = record.display.clone().unwrap_or_else(|| record.code.clone());
    Concept {
        code: record.code.clone(),
        cleaned_display: clean_display(&display),
        display,
        definition: record.definition.clone(),
        value_set_url: value_set_url.to_string(),
    }
}

fn merge(
    existing: &ValueSet,
    existing_kind: TerminologyKind,
    incoming: ValueSet,
    incoming_kind: TerminologyKind,
) -> ValueSet {
    let (mut winner, other) = match (existing_kind, incoming_kind) {
        (TerminologyKind::CodeSystem, _) => (incoming, existing.clone()),
        _ => (existing.clone(), incoming),
    };
    if winner.concepts.is_empty() {
        winner.concepts = other.concepts;
    }
    if winner.value_set_url.is_none() {
        winner.value_set_url = other.value_set_url;
    }
    if winner.documentation.is_empty() {
        winner.documentation = other.documentation;
    }
    winner.canonical_urls = union(&winner.canonical_urls, &other.canonical_urls);
    winner.url_aliases = union(&winner.url_aliases, &other.url_aliases);
    winner
}

fn union(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().chain(b).cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Drop aliases that differ from an earlier one only by a trailing `/` or
/// share its last path segment.
pub fn dedup_aliases(aliases: &[String]) -> Vec<String> {
    let sorted: BTreeSet<&str> = aliases.iter().map(String::as_str).collect();
    let mut kept: Vec<String> = Vec::new();
    for alias in sorted {
        let trimmed = alias.strip_suffix('/').unwrap_or(alias);
        let segment = last_segment(trimmed);
        let duplicate = kept.iter().any(|k| k == trimmed)
            || (!segment.is_empty() && kept.iter().any(|k| last_segment(k) == segment));
        if !duplicate {
            kept.push(trimmed.to_string());
        }
    }
    kept
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Canonical form of a binding URL: version and trailing `/` removed.
pub fn normalize_url(url: &str) -> &str {
    let unversioned = url.split('|').next().unwrap_or(url);
    unversioned.strip_suffix('/').unwrap_or(unversioned)
}

// ============================================================================
// VALUE-SET INDEX
// ============================================================================

/// Result of a binding URL lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSetMatch {
    /// Index of the first matching value-set.
    pub index: usize,
    /// Number of value-sets that matched at the winning tier.
    pub candidates: usize,
}

/// Binding URL → value-set lookup.
///
/// Canonical URLs are tried first, aliases second. Both ignore a `|version`
/// suffix and a trailing `/`.
#[derive(Debug, Clone, Default)]
pub struct ValueSetIndex {
    canonical: FxHashMap<String, Vec<usize>>,
    aliases: FxHashMap<String, Vec<usize>>,
}

impl ValueSetIndex {
    pub fn new(value_sets: &[ValueSet]) -> Self {
        let mut index = Self::default();
        for (i, value_set) in value_sets.iter().enumerate() {
            for url in &value_set.canonical_urls {
                push_unique(&mut index.canonical, normalize_url(url), i);
            }
            for url in &value_set.url_aliases {
                push_unique(&mut index.aliases, normalize_url(url), i);
            }
        }
        index
    }

    pub fn lookup(&self, url: &str) -> Option<ValueSetMatch> {
        let key = normalize_url(url);
        self.canonical
            .get(key)
            .or_else(|| self.aliases.get(key))
            .and_then(|hits| {
                hits.first().map(|&index| ValueSetMatch {
                    index,
                    candidates: hits.len(),
                })
            })
    }

    /// Look a URL up, reporting misses and ambiguous matches.
    pub fn resolve(
        &self,
        url: &str,
        path: &str,
        value_sets: &[ValueSet],
        diagnostics: &mut Diagnostics,
    ) -> Option<usize> {
        match self.lookup(url) {
            Some(found) => {
                if found.candidates > 1 {
                    diagnostics.warn(
                        codes::AMBIGUOUS_BINDING,
                        path,
                        format!(
                            "{url} matches {} value-sets, using {}",
                            found.candidates, value_sets[found.index].name
                        ),
                    );
                }
                Some(found.index)
            }
            None => {
                diagnostics.warn(codes::UNRESOLVED_BINDING, path, format!("no value-set for {url}"));
                None
            }
        }
    }
}

fn push_unique(map: &mut FxHashMap<String, Vec<usize>>, key: &str, index: usize) {
    let hits = map.entry(key.to_string()).or_default();
    if !hits.contains(&index) {
        hits.push(index);
    }
}
