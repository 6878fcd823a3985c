//! Canonical byte serialization for Trailmark v1 events.
//!
//! An event's attributes and trails (plus an optional event type) are
//! reduced to a single deterministic byte string in three steps:
//!
//! 1. build the canonical tree: mapping nodes key-sorted byte-wise at every
//!    level, list nodes in input order
//! 2. render the tree to canonical JSON (no whitespace, sorted keys)
//! 3. wrap the JSON bytes in a bencode byte-string envelope
//!    (`<decimal length>:<bytes>`)
//!
//! Two events with the same logical content always produce identical bytes
//! regardless of attribute construction order; any difference in content,
//! attribute set, trail order, or event-type presence produces different
//! bytes. The output is the hash input for event fingerprinting; it is
//! write-only and never decoded back.
//!
#![deny(missing_docs)]

/// Canonical tree construction and canonical JSON rendering.
pub mod canonicalizer;
/// Bencode byte-string envelope.
pub mod envelope;
/// Error types for event serialization.
pub mod errors;
/// The serializable event projection.
pub mod event;

pub use errors::SerializationError;
pub use event::SerializableEvent;

use trailmark_attributes::Attribute;

/// Serializes a v1 event from typed attributes and trails.
///
/// Attributes may be supplied in any order; the order never affects the
/// output. Trail order is preserved and significant. The event type is
/// implicitly absent here; callers that carry one go through
/// [`SerializableEvent::with_event_type`].
///
/// # Errors
///
/// Returns [`SerializationError::Encoding`] on canonical-tree contract
/// violations (unreachable for typed input).
pub fn serialize<I>(attributes: I, trails: Vec<String>) -> Result<Vec<u8>, SerializationError>
where
    I: IntoIterator<Item = (String, Attribute)>,
{
    SerializableEvent::new(attributes, trails).serialize()
}

/// Serializes a v1 event from an untyped JSON event document.
///
/// The document carries `attributes`, `trails`, and optionally
/// `event_type`; attribute values are classified into the three recognized
/// kinds before encoding. Typed and untyped entry points produce identical
/// bytes for identical content.
///
/// # Errors
///
/// Returns [`SerializationError::Decode`] for malformed documents and
/// [`SerializationError::UnrecognizedAttributeKind`] for attribute values
/// outside the string/list/dict kinds.
pub fn serialize_from_untyped(event_json: &[u8]) -> Result<Vec<u8>, SerializationError> {
    SerializableEvent::from_untyped(event_json)?.serialize()
}
