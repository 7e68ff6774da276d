//! Typed records of the terminology bundle (`valuesets.xml`).

use super::error::SchemaError;
use super::xml::XmlElement;

/// Whether a record was declared as a code system or a value-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminologyKind {
    CodeSystem,
    ValueSet,
}

/// One `concept` of a record or of a compose include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptRecord {
    pub code: String,
    pub display: Option<String>,
    pub definition: Option<String>,
}

/// One `compose/include` of a value-set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncludeRecord {
    pub system: Option<String>,
    pub value_set: Option<String>,
    pub concepts: Vec<ConceptRecord>,
}

/// One code system or value-set entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyRecord {
    pub kind: TerminologyKind,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    /// A code system's implicit value-set URL.
    pub value_set: Option<String>,
    pub concepts: Vec<ConceptRecord>,
    pub includes: Vec<IncludeRecord>,
}

/// One parsed terminology bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyDocument {
    pub name: String,
    pub records: Vec<TerminologyRecord>,
}

/// Parse a terminology bundle.
pub fn parse_terminology(
    source_name: &str,
    input: &[u8],
) -> Result<TerminologyDocument, SchemaError> {
    let root = XmlElement::parse(source_name, input)?;
    read_terminology(source_name, &root)
}

/// Convert a terminology bundle element tree into typed records.
pub fn read_terminology(
    source_name: &str,
    root: &XmlElement,
) -> Result<TerminologyDocument, SchemaError> {
    let mut records = Vec::new();

    for (index, entry) in root.children_named("entry").enumerate() {
        let entry_path = format!("Bundle/entry[{}]", index + 1);
        let resource = entry
            .child("resource")
            .ok_or_else(|| SchemaError::missing_element(source_name, &entry_path, "resource"))?;
        let resource_path = format!("{entry_path}/resource");

        let (kind, node) = if let Some(node) = resource.child("CodeSystem") {
            (TerminologyKind::CodeSystem, node)
        } else if let Some(node) = resource.child("ValueSet") {
            (TerminologyKind::ValueSet, node)
        } else {
            return Err(SchemaError::malformed(
                source_name,
                resource_path,
                "resource is neither a CodeSystem nor a ValueSet",
            ));
        };
        let path = format!("{resource_path}/{}", node.name);
        records.push(read_record(source_name, &path, kind, node)?);
    }

    tracing::trace!(file = source_name, records = records.len(), "read terminology");
    Ok(TerminologyDocument {
        name: source_name.to_string(),
        records,
    })
}

fn read_record(
    source_name: &str,
    path: &str,
    kind: TerminologyKind,
    node: &XmlElement,
) -> Result<TerminologyRecord, SchemaError> {
    let required = |field: &str| {
        node.value_of(field)
            .map(str::to_string)
            .ok_or_else(|| SchemaError::missing_element(source_name, path, field))
    };
    let id = required("id")?;
    let name = required("name")?;
    let url = required("url")?;

    let concepts = read_concepts(source_name, path, node)?;

    let mut includes = Vec::new();
    if let Some(compose) = node.child("compose") {
        for (index, include) in compose.children_named("include").enumerate() {
            let include_path = format!("{path}/compose/include[{}]", index + 1);
            includes.push(IncludeRecord {
                system: include.value_of("system").map(str::to_string),
                value_set: include.value_of("valueSet").map(str::to_string),
                concepts: read_concepts(source_name, &include_path, include)?,
            });
        }
    }

    Ok(TerminologyRecord {
        kind,
        id,
        name,
        description: node.value_of("description").map(str::to_string),
        url,
        value_set: node.value_of("valueSet").map(str::to_string),
        concepts,
        includes,
    })
}

fn read_concepts(
    source_name: &str,
    path: &str,
    node: &XmlElement,
) -> Result<Vec<ConceptRecord>, SchemaError> {
    node.children_named("concept")
        .enumerate()
        .map(|(index, concept)| {
            let code = concept.value_of("code").ok_or_else(|| {
                SchemaError::missing_element(
                    source_name,
                    &format!("{path}/concept[{}]", index + 1),
                    "code",
                )
            })?;
            Ok(ConceptRecord {
                code: code.to_string(),
                display: concept.value_of("display").map(str::to_string),
                definition: concept.value_of("definition").map(str::to_string),
            })
        })
        .collect()
}
