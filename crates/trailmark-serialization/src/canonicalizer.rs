use std::fmt;

use canonical_json::to_string;
use serde_json::{Map, Value};
use trailmark_attributes::Attribute;

use crate::errors::SerializationError;
use crate::event::SerializableEvent;

/// Helper for building node paths in encoder diagnostics.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Builds the canonical intermediate tree for an event.
///
/// Every mapping node is emitted in byte-wise ascending key order (the
/// `BTreeMap` iteration order fixed at construction), every list node in
/// its input order. Only three node shapes appear in the result: string,
/// array, and object. An absent `event_type` produces no node at all.
pub fn canonical_value(event: &SerializableEvent) -> Value {
    let mut attributes = Map::new();
    for (name, attribute) in &event.attributes {
        attributes.insert(name.clone(), attribute_value(attribute));
    }

    let trails = event
        .trails
        .iter()
        .map(|trail| Value::String(trail.clone()))
        .collect();

    let mut root = Map::new();
    root.insert("attributes".to_string(), Value::Object(attributes));
    root.insert("trails".to_string(), Value::Array(trails));
    if let Some(event_type) = &event.event_type {
        root.insert("event_type".to_string(), Value::String(event_type.clone()));
    }
    Value::Object(root)
}

/// Encoding rule for one attribute, exhaustive over the three kinds.
fn attribute_value(attribute: &Attribute) -> Value {
    match attribute {
        Attribute::String(s) => Value::String(s.clone()),
        Attribute::List(items) => Value::Array(
            items
                .iter()
                .map(|item| {
                    Value::Object(
                        item.iter()
                            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                            .collect(),
                    )
                })
                .collect(),
        ),
        Attribute::Dict(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        ),
    }
}

/// Renders a canonical tree to canonical JSON bytes.
///
/// The tree is validated against the three-shape contract first: any node
/// that is not a string, array, or object aborts encoding. Trees produced
/// by [`canonical_value`] always pass. The emitted JSON carries no
/// whitespace and sorted object keys; the tree is already key-sorted, so
/// the output order does not rest on the text encoder alone.
///
/// # Errors
///
/// Returns [`SerializationError::Encoding`] for contract violations or
/// text-encoder failures.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, SerializationError> {
    validate(value, Path::root())?;
    let canonical =
        to_string(value).map_err(|err| SerializationError::Encoding(format!("{:?}", err)))?;
    Ok(canonical.into_bytes())
}

/// Validates the three-shape contract: string, array, or object at every
/// node.
fn validate(value: &Value, path: Path) -> Result<(), SerializationError> {
    match value {
        Value::String(_) => Ok(()),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                validate(item, path.push_index(index))?;
            }
            Ok(())
        }
        Value::Object(map) => {
            for (key, child) in map {
                validate(child, path.push_field(key))?;
            }
            Ok(())
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => Err(SerializationError::Encoding(
            format!("{}: node is not a string, list, or dict", path),
        )),
    }
}
