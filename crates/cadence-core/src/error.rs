//! Core error types for cadence-core.
//!
//! Every analyzer shares the [`EngineError`] hierarchy. Empty input
//! collections are never errors (each analyzer has a documented
//! zero-element default); errors are reserved for malformed caller
//! input and for configuration problems at construction time.

use std::path::PathBuf;
use thiserror::Error;

/// Engine error type for cadence-core.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller supplied a malformed or inconsistent record or argument.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A sentiment lexicon was constructed with no terms on one side.
    #[error("Sentiment lexicon has no {side} terms")]
    EmptyLexicon { side: &'static str },

    /// Failed to read a lexicon file from disk.
    #[error("Failed to read lexicon from {path}: {source}")]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a lexicon file as TOML.
    #[error("Failed to parse lexicon: {0}")]
    LexiconParse(#[from] toml::de::Error),
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] with owned strings.
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
