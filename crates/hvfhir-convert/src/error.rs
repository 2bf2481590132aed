//! Error types for thing conversion.

use hvfhir_model::ThingKind;
use thiserror::Error;

/// Failures raised by a [`CodeTranslator`](crate::CodeTranslator).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// A coded value carried an empty code.
    #[error("coded value in vocabulary '{vocabulary}' has a blank code")]
    BlankCode { vocabulary: String },

    /// Vocabulary configuration could not be parsed.
    #[error("invalid vocabulary configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors that abort the conversion of a thing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// A detail measurement has no unit code to report.
    #[error("exercise detail '{detail}' has no units")]
    MissingUnits { detail: String },

    /// The code translator rejected a codable value.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// No converter is registered for the thing's kind.
    #[error("no converter registered for thing kind '{kind}'")]
    UnsupportedThing { kind: ThingKind },

    /// A converter was handed a thing of another kind.
    #[error("converter for '{expected}' received a '{actual}' thing")]
    KindMismatch {
        expected: ThingKind,
        actual: ThingKind,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
