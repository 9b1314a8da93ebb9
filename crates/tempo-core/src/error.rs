//! Error types for the conversion library.

use thiserror::Error;

/// Comprehensive error type for all conversion operations.
///
/// Every failure is deterministic for a given request and is reported to
/// the immediate caller; nothing is retried or recovered internally.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A format name with no catalog entry (invalid user input, not a
    /// defect).
    #[error("unknown format name: {name}")]
    UnknownFormat { name: String },
    /// A custom layout entity with no translation. Carries the entity
    /// exactly as the user spelled it.
    #[error("unknown entity in custom layout: {entity}")]
    UnknownEntity { entity: String },
    /// Input text that does not match the resolved layout, or is not a
    /// valid integer for the Unix-epoch kinds.
    #[error("unable to parse \"{input}\" using format {format}: {reason}")]
    Parse {
        input: String,
        format: String,
        reason: String,
    },
    /// A malformed fixed offset or an unresolvable region name.
    #[error("unable to resolve timezone \"{spec}\": {reason}")]
    Timezone { spec: String, reason: String },
    /// No value to convert was supplied.
    #[error("no input provided")]
    EmptyInput,
    /// The output layout could not render the value.
    #[error("unable to format result using {format}: {reason}")]
    Format { format: String, reason: String },
}

impl ConvertError {
    /// Creates a parse error for the given input and format description.
    pub(crate) fn parse(
        input: impl Into<String>,
        format: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConvertError::Parse {
            input: input.into(),
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Creates a timezone resolution error for the given spec.
    pub(crate) fn timezone(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::Timezone {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
