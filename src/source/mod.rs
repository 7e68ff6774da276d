//! Source documents: XML reading, typed records and loading.
//!
//! ```text
//! SchemaSources (bytes) ──parse──► ParsedSources
//!                                    ├── SchemaDocument      (xsd)
//!                                    ├── ProfileDocument     (profiles)
//!                                    └── TerminologyDocument (terminology)
//! ```
//!
//! Every raw XML node is converted into a typed record here. A required
//! field that is absent is a fatal [`SchemaError::Malformed`].

mod error;
pub mod profiles;
mod sources;
pub mod terminology;
pub mod xml;
pub mod xsd;

pub use error::SchemaError;
pub use profiles::{
    BindingDecl, ElementRecord, ProfileDocument, StructureDefinitionRecord, TypeRecord,
    parse_profiles,
};
#[cfg(feature = "archive")]
pub use sources::ArchiveProvider;
pub use sources::{DirProvider, ParsedSources, SchemaSources, SourceDocument, SourceProvider};
pub use terminology::{
    ConceptRecord, IncludeRecord, TerminologyDocument, TerminologyKind, TerminologyRecord,
    parse_terminology,
};
pub use xml::XmlElement;
pub use xsd::{
    ComplexContent, ComplexTypeDecl, MemberDecl, PrimitiveDecl, PrimitiveKind, Scalar,
    SchemaDocument, parse_schema,
};
