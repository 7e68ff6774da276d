//! Fixed names and tables of the FHIR definitions.

// ============================================================================
// ROOT ENTITIES AND TYPE NAMES
// ============================================================================

/// Root of every resource; also the universal "any resource" target marker.
pub const RESOURCE_ROOT: &str = "Resource";

/// Root of every extension structure.
pub const EXTENSION_ROOT: &str = "Extension";

/// Complex type whose choice lists every concrete resource.
pub const RESOURCE_CONTAINER: &str = "ResourceContainer";

/// Base types that mark a structural element rather than a nominal type.
pub const PLAIN_BASE_TYPES: &[&str] = &["Element", "Reference", "BackboneElement"];

/// Declared type of a bare `xs:sequence` complex type.
pub const ELEMENT_TYPE: &str = "Element";

/// Base type of nested element groups.
pub const BACKBONE_ELEMENT: &str = "BackboneElement";

/// Type of reference fields.
pub const REFERENCE_TYPE: &str = "Reference";

/// Suffix of the generalized multi-target sibling of a reference field.
pub const MULTI_TARGET_SUFFIX: &str = "V2";

/// Placeholder for a polymorphic (choice) field in a structural path.
pub const CHOICE_MARKER: &str = "[x]";

/// Realized choice suffix for codeable-concept bindings.
pub const CODEABLE_CONCEPT_TYPE: &str = "CodeableConcept";

/// Field types that carry a codeable binding hint.
pub const CODEABLE_TYPES: &[&str] = &["Coding", "CodeableConcept"];

/// Bare coded field type.
pub const CODE_TYPE: &str = "code";

/// Name of the single field of a demoted value holder.
pub const VALUE_FIELD: &str = "value";

/// Scalar type of narrative markup; not declared as a simple type.
pub const XHTML_TYPE: &str = "xhtml";

/// Extension that names a terminology binding in a profile.
pub const BINDING_NAME_EXTENSION: &str =
    "http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName";

/// Catch-all value-set for coded fields without a usable binding.
pub mod generic_code {
    pub const NAME: &str = "generic_type";
    pub const CLEANED_NAME: &str = "GenericTypeCode";
    pub const SNAKE_NAME: &str = "generic_type";
}

/// Entities that keep their structural definition even though a value-set
/// of the same name exists.
pub const DEFAULT_VALUE_SET_ALLOW_LIST: &[&str] =
    &["PractitionerRole", "ElementDefinition", "SubscriptionStatus"];

// ============================================================================
// NAME TABLES
// ============================================================================

/// Words that collide with generated schema identifiers.
pub const RESERVED_WORDS: &[&str] = &["as"];

/// Words that collide with generated script identifiers.
pub const SCRIPT_RESERVED_WORDS: &[&str] = &["for", "class", "import", "extends", "function"];

/// Basic scalar types renamed in generated output.
pub const BASIC_TYPE_NAMES: &[(&str, &str)] = &[
    ("boolean", "Boolean"),
    ("integer", "Int"),
    ("positiveInt", "Int"),
    ("string", "String"),
];

/// Plurals that the English rules get wrong.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("EpisodeOfCare", "EpisodesOfCare"),
    ("Media", "Media"),
    ("Parameters", "Parameters"),
    ("TerminologyCapabilities", "TerminologyCapabilities"),
];

/// Field types the schema declares wrongly: (field, declared type, actual type).
pub const TYPE_OVERRIDES: &[(&str, &str, &str)] = &[("data", "SampledDataDataType", "string")];

/// Scalar type emitted for a primitive type key, if any.
pub fn scalar_type(type_key: &str) -> Option<&'static str> {
    let scalar = match type_key {
        "base64Binary" => "Base64Binary",
        "canonical" => "Canonical",
        "code" => "Code",
        "date" => "Date",
        "dateTime" => "DateTime",
        "decimal" => "Float",
        "id" => "ID",
        "instant" => "Instant",
        "markdown" => "Markdown",
        "number" | "unsignedInt" => "Int",
        "oid" => "OID",
        "time" => "Time",
        "uri" => "URI",
        "url" => "URL",
        "uuid" => "UUID",
        "xhtml" => "XHTML",
        _ => return None,
    };
    Some(scalar)
}

// ============================================================================
// SOURCE LAYOUT
// ============================================================================

/// Relative locations of the definition documents.
pub mod layout {
    /// Directory holding the XML schemas.
    pub const SCHEMA_DIR: &str = "fhir-all-xsd";
    /// Schema that includes every structural schema.
    pub const ALL_SCHEMA: &str = "fhir-all.xsd";
    /// Structural schema of the base types; always loaded first.
    pub const BASE_SCHEMA: &str = "fhir-base.xsd";
    /// Schema declaring every primitive type.
    pub const PRIMITIVE_SCHEMA: &str = "fhir-single.xsd";
    /// Profiles of the data types.
    pub const TYPE_PROFILES: &str = "profiles-types.xml";
    /// Profiles of the resources.
    pub const RESOURCE_PROFILES: &str = "profiles-resources.xml";
    /// Code systems and value-sets.
    pub const TERMINOLOGY: &str = "valuesets.xml";
}
