//! Error types for definition interchange.

use thiserror::Error;

use crate::registry::DefinitionError;

/// Errors that can occur while exporting or importing definitions.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An imported table breaks a definition invariant.
    #[error("Invalid definition: {0}")]
    Definition(#[from] DefinitionError),

    /// No format is registered for the file extension.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl InterchangeError {
    /// Create an unsupported format error.
    pub fn unsupported_format(what: impl Into<String>) -> Self {
        Self::UnsupportedFormat(what.into())
    }

    /// The definition error behind an import failure, if any.
    pub fn as_definition_error(&self) -> Option<&DefinitionError> {
        match self {
            Self::Definition(err) => Some(err),
            _ => None,
        }
    }
}
