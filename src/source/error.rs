//! Fatal errors of a resolution run.
//!
//! Only conditions that leave no usable catalog are errors. Lookup misses,
//! ambiguous matches and conflicting assignments are reported as
//! [`Diagnostic`](crate::resolve::Diagnostic)s instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A definition file could not be read.
    #[error("IO error reading {path}: {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// A document is not well-formed XML.
    #[error("XML error in {file}: {message}")]
    Xml { file: String, message: String },

    /// A required structural field is absent from a well-formed document.
    #[error("Malformed source {file} at {path}: {message}")]
    Malformed {
        file: String,
        path: String,
        message: String,
    },

    /// Base-type declarations form a cycle.
    #[error("Malformed source {file}: inheritance cycle {chain}")]
    InheritanceCycle { file: String, chain: String },

    /// A definition document expected by the layout is absent.
    #[error("Missing source document: {0}")]
    MissingSource(String),

    /// A zipped definitions bundle could not be read.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Options could not be parsed.
    #[error("Options error: {0}")]
    Options(String),

    /// The catalog could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl SchemaError {
    /// Create an XML error.
    pub fn xml(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Xml {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-source error.
    pub fn malformed(
        file: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            file: file.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-source error for an absent child element.
    pub fn missing_element(file: &str, path: &str, element: &str) -> Self {
        Self::malformed(file, format!("{path}/{element}"), "required element is absent")
    }

    /// Create a malformed-source error for an absent attribute.
    pub fn missing_attribute(file: &str, path: &str, attribute: &str) -> Self {
        Self::malformed(file, format!("{path}/@{attribute}"), "required attribute is absent")
    }
}
