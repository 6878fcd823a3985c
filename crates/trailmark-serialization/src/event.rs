use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use trailmark_attributes::Attribute;

use crate::canonicalizer::{canonical_bytes, canonical_value};
use crate::envelope;
use crate::errors::SerializationError;

/// The serializable projection of a v1 event.
///
/// Only the fields that participate in canonical bytes live here: the
/// attribute mapping, the ordered trail list, and the optional event type.
/// The projection is built transiently from a domain event, serialized
/// once, and discarded.
///
/// Attributes are held in a `BTreeMap`, so the top-level key sort is fixed
/// at construction regardless of the order the caller supplies them in.
/// Trail order is preserved exactly; reordering trails changes the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializableEvent {
    /// Attribute name to value, key-sorted.
    pub attributes: BTreeMap<String, Attribute>,
    /// Ordered trail identifiers; duplicates permitted.
    pub trails: Vec<String>,
    /// Optional event type. When absent it is omitted from the output
    /// entirely, never encoded as null or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl SerializableEvent {
    /// Builds the projection from attributes and trails, with no event type.
    pub fn new<I>(attributes: I, trails: Vec<String>) -> Self
    where
        I: IntoIterator<Item = (String, Attribute)>,
    {
        Self {
            attributes: attributes.into_iter().collect(),
            trails,
            event_type: None,
        }
    }

    /// Sets the event type.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Decodes an untyped event document.
    ///
    /// The document must be a JSON object carrying `attributes` (object)
    /// and `trails` (array of strings), and may carry `event_type`
    /// (string). Attribute values are classified into the three recognized
    /// kinds; a value of any other shape aborts decoding.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Decode`] for malformed documents and
    /// [`SerializationError::UnrecognizedAttributeKind`] for attribute
    /// values outside the string/list/dict kinds.
    pub fn from_untyped(event_json: &[u8]) -> Result<Self, SerializationError> {
        let document: Value = serde_json::from_slice(event_json)
            .map_err(|err| SerializationError::Decode(err.to_string()))?;

        let root = match &document {
            Value::Object(map) => map,
            _ => {
                return Err(SerializationError::Decode(
                    "event document is not a JSON object".to_string(),
                ));
            }
        };

        let raw_attributes = match root.get("attributes") {
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(SerializationError::Decode(
                    "'attributes' is not an object".to_string(),
                ));
            }
            None => {
                return Err(SerializationError::Decode(
                    "missing 'attributes' field".to_string(),
                ));
            }
        };

        let mut attributes = BTreeMap::new();
        for (name, value) in raw_attributes {
            let attribute = Attribute::from_value(value).map_err(|source| {
                SerializationError::UnrecognizedAttributeKind {
                    name: name.clone(),
                    source,
                }
            })?;
            attributes.insert(name.clone(), attribute);
        }

        let raw_trails = match root.get("trails") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(SerializationError::Decode(
                    "'trails' is not an array".to_string(),
                ));
            }
            None => {
                return Err(SerializationError::Decode(
                    "missing 'trails' field".to_string(),
                ));
            }
        };

        let mut trails = Vec::with_capacity(raw_trails.len());
        for (index, item) in raw_trails.iter().enumerate() {
            match item {
                Value::String(s) => trails.push(s.clone()),
                _ => {
                    return Err(SerializationError::Decode(format!(
                        "trails[{}] is not a string",
                        index
                    )));
                }
            }
        }

        let event_type = match root.get("event_type") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(SerializationError::Decode(
                    "'event_type' is not a string".to_string(),
                ));
            }
            None => None,
        };

        Ok(Self {
            attributes,
            trails,
            event_type,
        })
    }

    /// Serializes this event to its canonical byte string.
    ///
    /// The canonical tree is built with explicit byte-wise key order,
    /// rendered to canonical JSON, then wrapped in a bencode byte-string
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Encoding`] if the canonical tree
    /// violates the encoder contract (unreachable for trees built from
    /// this projection).
    pub fn serialize(&self) -> Result<Vec<u8>, SerializationError> {
        let tree = canonical_value(self);
        let text = canonical_bytes(&tree)?;
        Ok(envelope::wrap(&text))
    }
}
