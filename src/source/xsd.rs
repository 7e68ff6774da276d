//! Typed records of the XML schema documents.
//!
//! The structural schemas declare complex types (entities) and the primitive
//! schema declares simple types (scalars). Each raw node is converted into
//! one of the records below at read time; nothing after this module looks at
//! XML.

use super::error::SchemaError;
use super::xml::XmlElement;

/// Scalar family of a primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    String,
    Number,
    Boolean,
}

impl Scalar {
    /// Scalar of an `xs:restriction` base (`xs:boolean`, `xs:decimal`, ...).
    pub fn from_restriction_base(base: &str) -> Self {
        let local = base.rsplit(':').next().unwrap_or(base);
        match local {
            "boolean" => Scalar::Boolean,
            "decimal" | "integer" | "int" | "long" | "positiveInteger" | "nonNegativeInteger"
            | "negativeInteger" | "nonPositiveInteger" | "unsignedInt" | "double" | "float" => {
                Scalar::Number
            }
            _ => Scalar::String,
        }
    }
}

/// How a primitive constrains its lexical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Pattern,
    Enumerated,
}

/// One `xs:simpleType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveDecl {
    pub name: String,
    pub kind: PrimitiveKind,
    pub scalar: Scalar,
}

/// One `xs:element` or `xs:attribute` of a complex type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberDecl {
    pub name: Option<String>,
    /// `ref` attribute, e.g. `xhtml:div`.
    pub reference: Option<String>,
    pub type_name: Option<String>,
    pub min_occurs: Option<String>,
    pub max_occurs: Option<String>,
    pub documentation: Option<String>,
}

/// Shape of a complex type's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexContent {
    /// `xs:complexContent/xs:extension` of a named base.
    Extension { base: String, members: Vec<MemberDecl> },
    /// A bare `xs:sequence`.
    Sequence { members: Vec<MemberDecl> },
    /// A bare `xs:choice`; the resource container is declared this way.
    Choice { members: Vec<MemberDecl> },
    /// Anything else (simple content, empty types).
    Opaque,
}

/// One `xs:complexType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexTypeDecl {
    pub name: String,
    pub documentation: Vec<String>,
    pub content: ComplexContent,
}

impl ComplexTypeDecl {
    pub fn members(&self) -> &[MemberDecl] {
        match &self.content {
            ComplexContent::Extension { members, .. }
            | ComplexContent::Sequence { members }
            | ComplexContent::Choice { members } => members,
            ComplexContent::Opaque => &[],
        }
    }
}

/// One parsed schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    pub name: String,
    /// `schemaLocation` of every `xs:include`, in order.
    pub includes: Vec<String>,
    pub simple_types: Vec<PrimitiveDecl>,
    pub complex_types: Vec<ComplexTypeDecl>,
}

/// Parse a schema document.
pub fn parse_schema(source_name: &str, input: &[u8]) -> Result<SchemaDocument, SchemaError> {
    let root = XmlElement::parse(source_name, input)?;
    read_schema(source_name, &root)
}

/// Convert a schema element tree into typed records.
pub fn read_schema(source_name: &str, root: &XmlElement) -> Result<SchemaDocument, SchemaError> {
    let mut doc = SchemaDocument {
        name: source_name.to_string(),
        includes: Vec::new(),
        simple_types: Vec::new(),
        complex_types: Vec::new(),
    };

    let mut simple_index = 0usize;
    let mut complex_index = 0usize;
    for child in &root.children {
        match child.name.as_str() {
            "include" => {
                if let Some(location) = child.attr("schemaLocation") {
                    doc.includes.push(location.to_string());
                }
            }
            "simpleType" => {
                simple_index += 1;
                let path = format!("schema/simpleType[{simple_index}]");
                doc.simple_types.push(read_simple_type(source_name, &path, child)?);
            }
            "complexType" => {
                complex_index += 1;
                let path = format!("schema/complexType[{complex_index}]");
                doc.complex_types.push(read_complex_type(source_name, &path, child)?);
            }
            _ => {}
        }
    }

    tracing::trace!(
        file = source_name,
        simple = doc.simple_types.len(),
        complex = doc.complex_types.len(),
        "read schema"
    );
    Ok(doc)
}

fn read_simple_type(
    source_name: &str,
    path: &str,
    node: &XmlElement,
) -> Result<PrimitiveDecl, SchemaError> {
    let name = node
        .attr("name")
        .ok_or_else(|| SchemaError::missing_attribute(source_name, path, "name"))?;

    let (kind, scalar) = match node.child("restriction") {
        Some(restriction) => {
            let kind = if restriction.child("enumeration").is_some() {
                PrimitiveKind::Enumerated
            } else {
                PrimitiveKind::Pattern
            };
            let scalar = restriction
                .attr("base")
                .map(Scalar::from_restriction_base)
                .unwrap_or(Scalar::String);
            (kind, scalar)
        }
        // Unions and lists are string-like
        None => (PrimitiveKind::Pattern, Scalar::String),
    };

    Ok(PrimitiveDecl {
        name: name.to_string(),
        kind,
        scalar,
    })
}

fn read_complex_type(
    source_name: &str,
    path: &str,
    node: &XmlElement,
) -> Result<ComplexTypeDecl, SchemaError> {
    let name = node
        .attr("name")
        .ok_or_else(|| SchemaError::missing_attribute(source_name, path, "name"))?;
    let path = format!("{path}[@name='{name}']");

    let documentation = node
        .child("annotation")
        .map(|annotation| {
            annotation
                .children_named("documentation")
                .map(|d| d.text.clone())
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let content = if let Some(complex_content) = node.child("complexContent") {
        let content_path = format!("{path}/complexContent");
        let extension = complex_content
            .child("extension")
            .ok_or_else(|| SchemaError::missing_element(source_name, &content_path, "extension"))?;
        let base = extension.attr("base").ok_or_else(|| {
            SchemaError::missing_attribute(source_name, &format!("{content_path}/extension"), "base")
        })?;
        ComplexContent::Extension {
            base: base.to_string(),
            members: read_members(extension),
        }
    } else if node.child("sequence").is_some() {
        ComplexContent::Sequence {
            members: read_members(node),
        }
    } else if let Some(choice) = node.child("choice") {
        let mut members = Vec::new();
        collect_group(choice, &mut members);
        ComplexContent::Choice { members }
    } else {
        ComplexContent::Opaque
    };

    Ok(ComplexTypeDecl {
        name: name.to_string(),
        documentation,
        content,
    })
}

/// Attributes first, then the sequence's elements with choice groups
/// flattened in place.
fn read_members(container: &XmlElement) -> Vec<MemberDecl> {
    let mut members: Vec<MemberDecl> = container.children_named("attribute").map(read_member).collect();
    if let Some(sequence) = container.child("sequence") {
        collect_group(sequence, &mut members);
    }
    members
}

fn collect_group(group: &XmlElement, members: &mut Vec<MemberDecl>) {
    for item in &group.children {
        match item.name.as_str() {
            "element" => members.push(read_member(item)),
            "choice" | "sequence" => collect_group(item, members),
            _ => {}
        }
    }
}

fn read_member(node: &XmlElement) -> MemberDecl {
    MemberDecl {
        name: node.attr("name").map(str::to_string),
        reference: node.attr("ref").map(str::to_string),
        type_name: node.attr("type").map(str::to_string),
        min_occurs: node.attr("minOccurs").map(str::to_string),
        max_occurs: node.attr("maxOccurs").map(str::to_string),
        documentation: node
            .child("annotation")
            .and_then(|a| a.child("documentation"))
            .map(|d| d.text.clone())
            .filter(|text| !text.is_empty()),
    }
}
