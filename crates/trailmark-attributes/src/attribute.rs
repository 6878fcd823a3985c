use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::AttributeError;

/// A named event attribute value.
///
/// The untagged serde representation matches the attribute wire shape: a
/// String attribute is a bare JSON string, a List is a JSON array of
/// objects, a Dict is a JSON object. Mapping-typed contents are held in
/// `BTreeMap`, so nested keys carry a byte-wise ascending order from
/// construction onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    /// A single text value.
    String(String),
    /// An ordered sequence of string-to-string mappings. Element order is
    /// significant; each element mapping is key-sorted.
    List(Vec<BTreeMap<String, String>>),
    /// A string-to-string mapping, key-sorted.
    Dict(BTreeMap<String, String>),
}

impl Attribute {
    /// Constructs a String attribute.
    pub fn new_string(value: impl Into<String>) -> Self {
        Attribute::String(value.into())
    }

    /// Constructs a List attribute. Element order is preserved; the entries
    /// of each element are collected into a key-sorted mapping.
    pub fn new_list<I, M, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let list = items
            .into_iter()
            .map(|item| {
                item.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect()
            })
            .collect();
        Attribute::List(list)
    }

    /// Constructs a Dict attribute. Entries are collected into a key-sorted
    /// mapping; the order they are supplied in does not matter.
    pub fn new_dict<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let dict = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Attribute::Dict(dict)
    }

    /// Classifies an untyped JSON value into an attribute.
    ///
    /// A JSON string becomes a String attribute, an array of all-string
    /// objects becomes a List, an all-string object becomes a Dict. Any
    /// other shape is rejected with [`AttributeError::UnrecognizedKind`].
    pub fn from_value(value: &Value) -> Result<Self, AttributeError> {
        match value {
            Value::String(s) => Ok(Attribute::String(s.clone())),
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Object(entries) => list.push(string_entries(entries)?),
                        other => {
                            return Err(AttributeError::UnrecognizedKind {
                                found: json_kind(other),
                            });
                        }
                    }
                }
                Ok(Attribute::List(list))
            }
            Value::Object(entries) => Ok(Attribute::Dict(string_entries(entries)?)),
            other => Err(AttributeError::UnrecognizedKind {
                found: json_kind(other),
            }),
        }
    }

    /// Returns the kind name of this attribute: `"string"`, `"list"`, or
    /// `"dict"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Attribute::String(_) => "string",
            Attribute::List(_) => "list",
            Attribute::Dict(_) => "dict",
        }
    }
}

/// Collects an object's entries, requiring every value to be a string.
fn string_entries(
    entries: &serde_json::Map<String, Value>,
) -> Result<BTreeMap<String, String>, AttributeError> {
    let mut out = BTreeMap::new();
    for (key, value) in entries {
        match value {
            Value::String(s) => {
                out.insert(key.clone(), s.clone());
            }
            other => {
                return Err(AttributeError::UnrecognizedKind {
                    found: json_kind(other),
                });
            }
        }
    }
    Ok(out)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
