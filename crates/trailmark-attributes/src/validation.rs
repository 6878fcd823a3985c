use thiserror::Error;

/// Validation errors for attribute values.
#[derive(Debug, Error)]
pub enum AttributeError {
    /// When a value is not one of the three recognized attribute kinds.
    #[error("unrecognized attribute kind: found {found}, expected string, list, or dict")]
    UnrecognizedKind {
        /// JSON shape of the offending value (e.g. `"number"`, `"null"`).
        found: &'static str,
    },
}
