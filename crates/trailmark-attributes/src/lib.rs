//! Typed attribute model for Trailmark v1 events.
//!
//! An event carries a mapping of named attributes, each one of three kinds:
//! - `String`: a single text value
//! - `List`: an ordered sequence of string-to-string mappings
//! - `Dict`: a single string-to-string mapping
//!
//! Mapping-typed values are backed by `BTreeMap`, so nested keys are sorted
//! by raw byte value from the moment an attribute is constructed. Every
//! field of this crate participates in canonical event bytes.
//!
#![deny(missing_docs)]

/// The attribute sum type and untyped-value classification.
pub mod attribute;
/// Validation errors for attribute values.
pub mod validation;

pub use attribute::Attribute;
pub use validation::AttributeError;
