//! Typed records of the profile bundles (`profiles-types.xml`,
//! `profiles-resources.xml`).

use super::error::SchemaError;
use super::xml::XmlElement;

/// One `type` of a snapshot element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub code: String,
    /// Canonical URLs of the allowed reference targets.
    pub target_profiles: Vec<String>,
}

impl TypeRecord {
    /// Last path segment of every target profile (`.../Patient` → `Patient`).
    pub fn target_names(&self) -> Vec<String> {
        self.target_profiles
            .iter()
            .map(|url| url.rsplit('/').next().unwrap_or(url).to_string())
            .collect()
    }
}

/// One terminology `binding` of a snapshot element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDecl {
    pub value_set: Option<String>,
    /// `valueString` of the binding-name extension, if present.
    pub binding_name: Option<String>,
}

/// One snapshot element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    /// Structural path, e.g. `Patient.contact.relationship`.
    pub path: String,
    pub types: Vec<TypeRecord>,
    pub bindings: Vec<BindingDecl>,
}

/// One `StructureDefinition` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureDefinitionRecord {
    pub name: String,
    pub url: Option<String>,
    pub elements: Vec<ElementRecord>,
}

/// One parsed profile bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDocument {
    pub name: String,
    pub definitions: Vec<StructureDefinitionRecord>,
}

impl ProfileDocument {
    /// Every snapshot element of every definition, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &ElementRecord> {
        self.definitions.iter().flat_map(|d| d.elements.iter())
    }
}

/// Parse a profile bundle.
pub fn parse_profiles(source_name: &str, input: &[u8]) -> Result<ProfileDocument, SchemaError> {
    let root = XmlElement::parse(source_name, input)?;
    read_profiles(source_name, &root)
}

/// Convert a profile bundle element tree into typed records.
///
/// Entries whose resource is not a `StructureDefinition` are skipped.
pub fn read_profiles(source_name: &str, root: &XmlElement) -> Result<ProfileDocument, SchemaError> {
    let mut definitions = Vec::new();

    for (index, entry) in root.children_named("entry").enumerate() {
        let Some(definition) = entry
            .child("resource")
            .and_then(|r| r.child("StructureDefinition"))
        else {
            continue;
        };
        let path = format!("Bundle/entry[{}]/resource/StructureDefinition", index + 1);
        definitions.push(read_definition(source_name, &path, definition)?);
    }

    tracing::trace!(
        file = source_name,
        definitions = definitions.len(),
        "read profiles"
    );
    Ok(ProfileDocument {
        name: source_name.to_string(),
        definitions,
    })
}

fn read_definition(
    source_name: &str,
    path: &str,
    node: &XmlElement,
) -> Result<StructureDefinitionRecord, SchemaError> {
    let snapshot = node
        .child("snapshot")
        .ok_or_else(|| SchemaError::missing_element(source_name, path, "snapshot"))?;

    let mut elements = Vec::new();
    for (index, element) in snapshot.children_named("element").enumerate() {
        let element_path = format!("{path}/snapshot/element[{}]", index + 1);
        elements.push(read_element(source_name, &element_path, element)?);
    }

    Ok(StructureDefinitionRecord {
        name: node
            .value_of("name")
            .or_else(|| node.value_of("id"))
            .unwrap_or_default()
            .to_string(),
        url: node.value_of("url").map(str::to_string),
        elements,
    })
}

fn read_element(
    source_name: &str,
    path: &str,
    node: &XmlElement,
) -> Result<ElementRecord, SchemaError> {
    let element_path = node
        .value_of("path")
        .ok_or_else(|| SchemaError::missing_element(source_name, path, "path"))?;

    let mut types = Vec::new();
    for (index, type_node) in node.children_named("type").enumerate() {
        let code = type_node.value_of("code").ok_or_else(|| {
            SchemaError::missing_element(source_name, &format!("{path}/type[{}]", index + 1), "code")
        })?;
        types.push(TypeRecord {
            code: code.to_string(),
            target_profiles: type_node.values_of("targetProfile").map(str::to_string).collect(),
        });
    }

    let bindings = node
        .children_named("binding")
        .map(|binding| BindingDecl {
            value_set: binding.value_of("valueSet").map(str::to_string),
            binding_name: binding
                .children_named("extension")
                .find(|ext| ext.attr("url") == Some(crate::base::constants::BINDING_NAME_EXTENSION))
                .and_then(|ext| ext.value_of("valueString"))
                .map(str::to_string),
        })
        .collect();

    Ok(ElementRecord {
        path: element_path.to_string(),
        types,
        bindings,
    })
}
