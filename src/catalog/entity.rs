//! Entities and their properties.

use serde::{Deserialize, Serialize};

use super::value_set::Concept;
use crate::base::naming::{escape_keyword, escape_script_keyword, to_lower_camel};

/// Structural kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Resource,
    Structure,
    BackboneElement,
    ValueSet,
}

/// Resolved target of a reference-typed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "targets")]
pub enum ReferenceBinding {
    /// May point to any known entity.
    Any,
    /// May point to exactly these entities (cleaned names).
    Targets(Vec<String>),
}

impl ReferenceBinding {
    pub fn is_any(&self) -> bool {
        matches!(self, ReferenceBinding::Any)
    }

    /// Finite targets, or `None` for the wildcard.
    pub fn targets(&self) -> Option<&[String]> {
        match self {
            ReferenceBinding::Any => None,
            ReferenceBinding::Targets(targets) => Some(targets),
        }
    }

    /// Whether the binding may point at `name`.
    pub fn allows(&self, name: &str) -> bool {
        match self {
            ReferenceBinding::Any => true,
            ReferenceBinding::Targets(targets) => targets.iter().any(|t| t == name),
        }
    }
}

/// Named terminology hint on a `Coding`/`CodeableConcept` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableBinding {
    pub name: String,
    pub cleaned_name: String,
    pub snake_name: String,
}

/// One field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Source name (`gender`, `subjectV2`).
    pub name: String,
    /// Name escaped against reserved schema words (`as` → `as_`).
    pub cleaned_name: String,
    /// Name escaped against reserved script words (`class` → `class_`).
    pub js_name: String,
    /// Source name of the entity whose schema declared the field.
    pub declared_in: String,
    /// Declared type, `-primitive` stripped except on `value` fields.
    pub type_name: String,
    /// Resolved type: a primitive key or an entity's cleaned name.
    pub cleaned_type: String,
    /// Lower-camel key used for primitive lookup.
    pub type_key: String,
    pub scalar_type: Option<String>,
    /// Declared type of the entity the field's type resolved to.
    pub base_kind: Option<String>,
    pub optional: bool,
    pub is_list: bool,
    pub documentation: Vec<String>,
    pub reference: Option<ReferenceBinding>,
    pub codeable_binding: Option<CodeableBinding>,
    pub is_primitive: bool,
    pub is_code: bool,
    pub is_backbone: bool,
    pub is_basic_type: bool,
    pub is_resource_typed: bool,
    pub is_extension_typed: bool,
    /// Generalized multi-target sibling of a reference field.
    pub is_multi_target: bool,
}

impl Property {
    /// A property with cleaned names and keys derived from `name` and `type_name`.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        declared_in: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let type_name = type_name.into();
        let mut property = Self {
            cleaned_name: escape_keyword(&name),
            js_name: escape_script_keyword(&name),
            name,
            declared_in: declared_in.into(),
            type_name: String::new(),
            cleaned_type: String::new(),
            type_key: String::new(),
            scalar_type: None,
            base_kind: None,
            optional: true,
            is_list: false,
            documentation: Vec::new(),
            reference: None,
            codeable_binding: None,
            is_primitive: false,
            is_code: false,
            is_backbone: false,
            is_basic_type: false,
            is_resource_typed: false,
            is_extension_typed: false,
            is_multi_target: false,
        };
        property.set_type(type_name);
        property
    }

    /// Replace the declared type and everything derived from it.
    pub fn set_type(&mut self, type_name: impl Into<String>) {
        let type_name = type_name.into();
        let dotless = type_name.replace('.', "");
        let basic = crate::base::naming::basic_type_name(&dotless);
        self.is_basic_type = basic.is_some();
        self.is_backbone = type_name.contains('.');
        self.cleaned_type = basic.map(str::to_string).unwrap_or(dotless);
        self.type_name = type_name;
        self.set_resolved_type(self.cleaned_type.clone());
    }

    /// Replace the resolved type, keeping the declared one.
    pub fn set_resolved_type(&mut self, cleaned_type: impl Into<String>) {
        self.cleaned_type = cleaned_type.into();
        self.type_key = to_lower_camel(&self.cleaned_type);
        self.scalar_type = crate::base::constants::scalar_type(&self.type_key).map(str::to_string);
    }

    /// Whether the resolved type is `Reference`.
    pub fn is_reference(&self) -> bool {
        self.cleaned_type == crate::base::constants::REFERENCE_TYPE
    }
}

/// One structural type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Source name (`Patient.Contact`).
    pub name: String,
    /// Unique join key (`PatientContact`).
    pub cleaned_name: String,
    pub plural_name: String,
    pub snake_name: String,
    pub kind: EntityKind,
    /// Extension base, `Element` for a bare sequence, `ValueSet` for wrappers.
    pub declared_type: Option<String>,
    /// Unresolved base-type name.
    pub base_type: Option<String>,
    /// Flattened ancestors, nearest first.
    pub ancestors: Vec<String>,
    /// Base-type properties first, then the entity's own.
    pub properties: Vec<Property>,
    /// Indices into `properties` of the deduplicated projection.
    pub unique: Vec<usize>,
    pub documentation: Vec<String>,
    /// File the entity was read from.
    pub source: String,
    pub is_resource: bool,
    pub is_extension: bool,
    pub is_basic_type: bool,
    pub concepts: Vec<Concept>,
    pub value_set_url: Option<String>,
    pub url_aliases: Vec<String>,
}

impl Entity {
    /// A structure entity with names derived from `name`.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        let cleaned_name = name.replace('.', "");
        Self {
            snake_name: to_lower_camel(&cleaned_name),
            plural_name: cleaned_name.clone(),
            cleaned_name,
            name,
            kind: EntityKind::Structure,
            declared_type: None,
            base_type: None,
            ancestors: Vec::new(),
            properties: Vec::new(),
            unique: Vec::new(),
            documentation: Vec::new(),
            source: source.into(),
            is_resource: false,
            is_extension: false,
            is_basic_type: false,
            concepts: Vec::new(),
            value_set_url: None,
            url_aliases: Vec::new(),
        }
    }

    pub fn is_value_set(&self) -> bool {
        self.kind == EntityKind::ValueSet
    }

    /// First property with the given source name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The deduplicated projection, in declaration order.
    pub fn unique_properties(&self) -> impl Iterator<Item = &Property> {
        self.unique.iter().filter_map(|&i| self.properties.get(i))
    }

    /// Properties declared by this entity's own schema.
    pub fn own_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.declared_in == self.name)
    }
}
