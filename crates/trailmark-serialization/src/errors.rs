use thiserror::Error;
use trailmark_attributes::AttributeError;

/// Errors produced while serializing an event to canonical bytes.
///
/// Every error is terminal for the call that produced it: the pipeline
/// returns no partial output, and re-running the same input reproduces the
/// same error.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The untyped event input is not a well-formed event document.
    #[error("invalid event document: {0}")]
    Decode(String),
    /// An attribute value did not match any recognized kind.
    #[error("attribute '{name}': {source}")]
    UnrecognizedAttributeKind {
        /// Name of the offending attribute.
        name: String,
        /// Underlying classification error.
        source: AttributeError,
    },
    /// The canonical tree violated the encoder contract.
    #[error("canonical encoding failed: {0}")]
    Encoding(String),
}
