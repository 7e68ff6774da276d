//! Loading the definition documents.
//!
//! All documents are read into memory up front ([`SchemaSources`]) and then
//! parsed in parallel into typed records ([`ParsedSources`]). Nothing is read
//! once resolution has started.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::error::SchemaError;
use super::profiles::{ProfileDocument, parse_profiles};
use super::terminology::{TerminologyDocument, parse_terminology};
use super::xsd::{SchemaDocument, parse_schema};
use crate::base::constants::layout;

/// Raw bytes of one definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name, used to identify the document in errors and diagnostics.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// A place the definition documents can be read from.
///
/// Paths are relative to the definitions root and use `/` separators
/// (`fhir-all-xsd/patient.xsd`).
pub trait SourceProvider {
    /// Whether the document exists.
    fn contains(&mut self, relative: &str) -> bool;

    /// Read a whole document.
    fn read(&mut self, relative: &str) -> Result<Vec<u8>, SchemaError>;
}

// ============================================================================
// DIRECTORY PROVIDER
// ============================================================================

/// Reads documents from an unpacked definitions directory.
#[derive(Debug, Clone)]
pub struct DirProvider {
    root: PathBuf,
}

impl DirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_of(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl SourceProvider for DirProvider {
    fn contains(&mut self, relative: &str) -> bool {
        self.path_of(relative).is_file()
    }

    fn read(&mut self, relative: &str) -> Result<Vec<u8>, SchemaError> {
        let path = self.path_of(relative);
        if !path.exists() {
            return Err(SchemaError::MissingSource(relative.to_string()));
        }
        std::fs::read(&path).map_err(|error| SchemaError::Io { path, error })
    }
}

// ============================================================================
// ARCHIVE PROVIDER
// ============================================================================

#[cfg(feature = "archive")]
pub use archive::ArchiveProvider;

#[cfg(feature = "archive")]
mod archive {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    /// Reads documents from a zipped definitions bundle.
    ///
    /// Entries may sit at the archive root or under a single top-level folder.
    pub struct ArchiveProvider {
        archive: ZipArchive<Cursor<Vec<u8>>>,
        entries: Vec<String>,
    }

    impl ArchiveProvider {
        pub fn new(bytes: Vec<u8>) -> Result<Self, SchemaError> {
            let archive = ZipArchive::new(Cursor::new(bytes))
                .map_err(|e| SchemaError::Archive(format!("Failed to open archive: {e}")))?;
            let entries = archive.file_names().map(str::to_string).collect();
            Ok(Self { archive, entries })
        }

        fn entry_name(&self, relative: &str) -> Option<String> {
            let suffix = format!("/{relative}");
            self.entries
                .iter()
                .find(|name| *name == relative)
                .or_else(|| self.entries.iter().find(|name| name.ends_with(&suffix)))
                .cloned()
        }
    }

    impl SourceProvider for ArchiveProvider {
        fn contains(&mut self, relative: &str) -> bool {
            self.entry_name(relative).is_some()
        }

        fn read(&mut self, relative: &str) -> Result<Vec<u8>, SchemaError> {
            let name = self
                .entry_name(relative)
                .ok_or_else(|| SchemaError::MissingSource(relative.to_string()))?;
            let mut file = self
                .archive
                .by_name(&name)
                .map_err(|e| SchemaError::Archive(format!("Failed to read {name}: {e}")))?;
            let mut content = Vec::new();
            file.read_to_end(&mut content)
                .map_err(|e| SchemaError::Archive(format!("Failed to read {name}: {e}")))?;
            Ok(content)
        }
    }
}

// ============================================================================
// SCHEMA SOURCES
// ============================================================================

/// Every definition document of one run, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSources {
    /// Schema declaring the primitive types.
    pub primitives: SourceDocument,
    /// Structural schemas, base schema first.
    pub structures: Vec<SourceDocument>,
    pub type_profiles: Option<SourceDocument>,
    pub resource_profiles: SourceDocument,
    pub terminology: SourceDocument,
}

impl SchemaSources {
    /// Load from an unpacked definitions directory.
    ///
    /// `filter` keeps only structural schemas whose file name starts with the
    /// prefix; the base schema is always kept.
    pub fn from_dir(dir: impl AsRef<Path>, filter: Option<&str>) -> Result<Self, SchemaError> {
        let mut provider = DirProvider::new(dir.as_ref());
        Self::load(&mut provider, filter)
    }

    /// Load from a zipped definitions bundle.
    #[cfg(feature = "archive")]
    pub fn from_archive(bytes: Vec<u8>, filter: Option<&str>) -> Result<Self, SchemaError> {
        let mut provider = ArchiveProvider::new(bytes)?;
        Self::load(&mut provider, filter)
    }

    /// Load every document through a provider.
    pub fn load<P: SourceProvider>(
        provider: &mut P,
        filter: Option<&str>,
    ) -> Result<Self, SchemaError> {
        let schema_path = |file: &str| format!("{}/{file}", layout::SCHEMA_DIR);

        let all_path = schema_path(layout::ALL_SCHEMA);
        let all = parse_schema(layout::ALL_SCHEMA, &provider.read(&all_path)?)?;

        let mut structure_names = vec![layout::BASE_SCHEMA.to_string()];
        for include in all.includes {
            if include == layout::BASE_SCHEMA {
                continue;
            }
            if filter.is_some_and(|prefix| !include.starts_with(prefix)) {
                tracing::debug!(schema = %include, "filtered out");
                continue;
            }
            structure_names.push(include);
        }

        let structures = structure_names
            .into_iter()
            .map(|name| {
                let bytes = provider.read(&schema_path(&name))?;
                Ok(SourceDocument::new(name, bytes))
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        let primitives = SourceDocument::new(
            layout::PRIMITIVE_SCHEMA,
            provider.read(&schema_path(layout::PRIMITIVE_SCHEMA))?,
        );
        let type_profiles = if provider.contains(layout::TYPE_PROFILES) {
            Some(SourceDocument::new(
                layout::TYPE_PROFILES,
                provider.read(layout::TYPE_PROFILES)?,
            ))
        } else {
            tracing::debug!("no type profiles, reading resource profiles only");
            None
        };
        let resource_profiles = SourceDocument::new(
            layout::RESOURCE_PROFILES,
            provider.read(layout::RESOURCE_PROFILES)?,
        );
        let terminology =
            SourceDocument::new(layout::TERMINOLOGY, provider.read(layout::TERMINOLOGY)?);

        tracing::info!(structures = structures.len(), "loaded definition documents");
        Ok(Self {
            primitives,
            structures,
            type_profiles,
            resource_profiles,
            terminology,
        })
    }

    /// Parse every document into typed records, in parallel.
    pub fn parse(&self) -> Result<ParsedSources, SchemaError> {
        let ((primitives, structures), (profiles, terminology)) = rayon::join(
            || {
                rayon::join(
                    || parse_schema(&self.primitives.name, &self.primitives.bytes),
                    || {
                        self.structures
                            .par_iter()
                            .map(|doc| parse_schema(&doc.name, &doc.bytes))
                            .collect::<Result<Vec<_>, _>>()
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        let types = self
                            .type_profiles
                            .as_ref()
                            .map(|doc| parse_profiles(&doc.name, &doc.bytes))
                            .transpose()?;
                        let resources =
                            parse_profiles(&self.resource_profiles.name, &self.resource_profiles.bytes)?;
                        Ok::<_, SchemaError>((types, resources))
                    },
                    || parse_terminology(&self.terminology.name, &self.terminology.bytes),
                )
            },
        );
        let (type_profiles, resource_profiles) = profiles?;

        Ok(ParsedSources {
            primitives: primitives?,
            structures: structures?,
            type_profiles,
            resource_profiles,
            terminology: terminology?,
        })
    }
}

/// Every definition document of one run, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSources {
    pub primitives: SchemaDocument,
    pub structures: Vec<SchemaDocument>,
    pub type_profiles: Option<ProfileDocument>,
    pub resource_profiles: ProfileDocument,
    pub terminology: TerminologyDocument,
}
