//! Diagnostics: recoverable conditions found while resolving.
//!
//! A lookup miss, an ambiguous match or a conflicting assignment never
//! aborts a run. The affected property falls back to a documented default
//! and a [`Diagnostic`] is recorded here and mirrored to the log.

use serde::{Deserialize, Serialize};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
}

/// A diagnostic message with the structural path it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Warning code (e.g., "W0001").
    pub code: &'static str,
    pub message: String,
    /// Structural path or entity name (`Patient.contact.relationship`).
    pub path: String,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(code: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.code, self.path, self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes of a resolution run.
pub mod codes {
    /// A property's type names neither a primitive nor an entity.
    pub const UNRESOLVED_TYPE: &str = "W0001";
    /// An entity's base type is not declared.
    pub const UNRESOLVED_BASE: &str = "W0002";
    /// A profile path segment does not resolve.
    pub const UNRESOLVED_PATH: &str = "W0003";
    /// A reference type carries no target profile.
    pub const MISSING_TARGET_PROFILE: &str = "W0004";
    /// A binding URL matches no value-set.
    pub const UNRESOLVED_BINDING: &str = "W0005";
    /// A binding URL matches several value-sets.
    pub const AMBIGUOUS_BINDING: &str = "W0006";
    /// A property was bound twice with different targets.
    pub const BINDING_CONFLICT: &str = "W0007";
    /// Two entities share a cleaned name.
    pub const DUPLICATE_NAME: &str = "W0008";
    /// A resolved type is missing from the final catalog.
    pub const DANGLING_TYPE: &str = "W0009";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic and log it.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            code = diagnostic.code,
            path = %diagnostic.path,
            severity = ?diagnostic.severity,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Add a warning.
    pub fn warn(&mut self, code: &'static str, path: impl Into<String>, message: impl Into<String>) {
        self.add(Diagnostic::warning(code, path, message));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Diagnostics with the given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
