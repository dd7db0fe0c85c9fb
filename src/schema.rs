//! Schema node classification and qualified-name utilities.
//!
//! Schema documents are plain [`serde_json::Value`] trees. Instead of probing
//! individual keys at every call site, the resolver and builder dispatch on
//! [`NodeShape`], a tagged view of the five shapes a node can take.

use serde_json::{Map, Value};

/// Key that marks a mapping as a reference to another document.
pub const REF_KEY: &str = "$ref";

/// Tagged view over a schema node's shape.
#[derive(Debug)]
pub enum NodeShape<'a> {
    /// Explicit null.
    Null,
    /// Array of schema nodes.
    Sequence(&'a Vec<Value>),
    /// Mapping carrying `$ref`; the string is the referenced document path.
    Reference(&'a str),
    /// Plain mapping without `$ref`.
    Mapping(&'a Map<String, Value>),
    /// String, number, or boolean leaf.
    Scalar(&'a Value),
}

impl<'a> NodeShape<'a> {
    /// Classify a schema node.
    ///
    /// A mapping whose `$ref` value is not a string is treated as a plain
    /// mapping.
    pub fn of(node: &'a Value) -> Self {
        match node {
            Value::Null => NodeShape::Null,
            Value::Array(items) => NodeShape::Sequence(items),
            Value::Object(map) => match map.get(REF_KEY).and_then(Value::as_str) {
                Some(path) => NodeShape::Reference(path),
                None => NodeShape::Mapping(map),
            },
            other => NodeShape::Scalar(other),
        }
    }
}

/// Join a field key onto a dot-separated name prefix.
///
/// An empty prefix yields the key itself, so root-level fields carry no
/// leading dot.
pub fn qualified_name(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
