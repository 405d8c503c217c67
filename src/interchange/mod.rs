//! Definition interchange: export and import of enum tables.
//!
//! Tables can be written out to JSON or YAML and read back, e.g. to diff the
//! builtin tables against a newer native release or to load tables for an
//! ABI this crate does not ship.
//!
//! ## Module Structure
//!
//! ```text
//! mod.rs       → Format selection, to_* / from_* / read_* entry points
//!   ↓
//! document.rs  → Serializable DefinitionDoc (builder inputs)
//!   ↓
//! error.rs     → InterchangeError
//! ```
//!
//! Imported documents are rebuilt through [`EnumDefinitionBuilder`] and
//! [`RegistryBuilder`], so every construction invariant holds for loaded
//! tables exactly as for builtin ones.
//!
//! [`EnumDefinitionBuilder`]: crate::registry::EnumDefinitionBuilder

mod document;
mod error;

pub use document::{AliasDoc, DefinitionDoc, NamedValue, RangeDoc};
pub use error::InterchangeError;

use std::path::Path;

use tracing::debug;

use crate::registry::{EnumDefinition, Registry, RegistryBuilder, RegistryOptions};

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Json, Format::Yaml];

    /// Human-readable name of the format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// File extension(s) for this format.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yaml", "yml"],
        }
    }

    /// Pick a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, InterchangeError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| InterchangeError::unsupported_format(path.display().to_string()))
    }

    /// Serialize documents in this format.
    pub fn write(self, docs: &[DefinitionDoc]) -> Result<String, InterchangeError> {
        Ok(match self {
            Self::Json => serde_json::to_string_pretty(docs)?,
            Self::Yaml => serde_yaml::to_string(docs)?,
        })
    }

    /// Parse documents in this format without validating them.
    pub fn read(self, input: &str) -> Result<Vec<DefinitionDoc>, InterchangeError> {
        Ok(match self {
            Self::Json => serde_json::from_str(input)?,
            Self::Yaml => serde_yaml::from_str(input)?,
        })
    }
}

// ============================================================================
// EXPORT
// ============================================================================

/// Documents for every definition of `registry`, in registration order.
pub fn documents(registry: &Registry) -> Vec<DefinitionDoc> {
    registry.definitions().map(DefinitionDoc::from).collect()
}

/// Export every definition of `registry` as pretty-printed JSON.
pub fn to_json(registry: &Registry) -> Result<String, InterchangeError> {
    Format::Json.write(&documents(registry))
}

/// Export every definition of `registry` as YAML.
pub fn to_yaml(registry: &Registry) -> Result<String, InterchangeError> {
    Format::Yaml.write(&documents(registry))
}

/// Write every definition of `registry` to `path`, format chosen by extension.
pub fn write_definitions(registry: &Registry, path: impl AsRef<Path>) -> Result<(), InterchangeError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    std::fs::write(path, format.write(&documents(registry))?)?;
    debug!("Wrote {} enum definitions to {} as {}", registry.len(), path.display(), format.name());
    Ok(())
}

// ============================================================================
// IMPORT
// ============================================================================

fn build_all(docs: Vec<DefinitionDoc>) -> Result<Vec<EnumDefinition>, InterchangeError> {
    docs.into_iter()
        .map(|doc| doc.into_definition().map_err(InterchangeError::from))
        .collect()
}

/// Import and validate definitions from JSON.
pub fn from_json(input: &str) -> Result<Vec<EnumDefinition>, InterchangeError> {
    build_all(Format::Json.read(input)?)
}

/// Import and validate definitions from YAML.
pub fn from_yaml(input: &str) -> Result<Vec<EnumDefinition>, InterchangeError> {
    build_all(Format::Yaml.read(input)?)
}

/// Import and validate definitions from a file, format chosen by extension.
pub fn read_definitions(path: impl AsRef<Path>) -> Result<Vec<EnumDefinition>, InterchangeError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let input = std::fs::read_to_string(path)?;
    let definitions = build_all(format.read(&input)?)?;
    debug!(
        "Read {} enum definitions from {} ({})",
        definitions.len(),
        path.display(),
        format.name()
    );
    Ok(definitions)
}

/// Build a registry from a definitions file.
pub fn read_registry(path: impl AsRef<Path>, options: RegistryOptions) -> Result<Registry, InterchangeError> {
    let builder = read_definitions(path)?
        .into_iter()
        .try_fold(RegistryBuilder::new().with_options(options), RegistryBuilder::register)?;
    Ok(builder.build())
}
