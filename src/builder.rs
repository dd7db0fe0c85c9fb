//! Schema-to-form-tree construction.
//!
//! Walks a fully-resolved schema and derives a tree of [`FieldDescriptor`]
//! values, one per `properties` entry. Object-typed properties become nested
//! groups whose children carry dot-qualified names. This stage is a pure
//! transform: it does no I/O and never fails — an unusable root yields a
//! single placeholder descriptor, and malformed individual entries are
//! skipped.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{NodeShape, qualified_name};

/// One renderable form field or nested group.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Dot-joined path from the form root; doubles as the input's `name`
    /// attribute and the harvest key.
    pub name: String,
    /// Display label: the schema `title`, falling back to the property key.
    pub label: String,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether the parent schema's `required` list names this field.
    pub required: bool,
}

/// Input kind of a form field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Selectable choice; options are the literal enum values, not coerced.
    Select { options: Vec<Value> },
    /// Whole-number numeric input.
    Integer,
    /// Numeric input, fractional allowed.
    Number,
    /// Date-and-time input.
    DateTime,
    /// Free-text input.
    Text,
    /// Nested group of child fields.
    Group { children: Vec<FieldDescriptor> },
    /// Placeholder emitted when the schema is not a usable mapping.
    Invalid,
}

impl FieldDescriptor {
    /// Placeholder signaling an unusable schema to the rendering consumer.
    fn invalid() -> Self {
        FieldDescriptor {
            name: String::new(),
            label: "Invalid schema".to_string(),
            kind: FieldKind::Invalid,
            required: false,
        }
    }
}

/// Builds the field tree for a fully-resolved schema.
///
/// A root that is absent or not a mapping yields a single invalid-schema
/// placeholder rather than failing.
pub fn build(schema: &Value) -> Vec<FieldDescriptor> {
    build_with_prefix(schema, "")
}

fn build_with_prefix(schema: &Value, prefix: &str) -> Vec<FieldDescriptor> {
    let map = match NodeShape::of(schema) {
        NodeShape::Mapping(map) => map,
        _ => return vec![FieldDescriptor::invalid()],
    };

    let required = required_keys(map);
    let mut fields = Vec::new();

    let Some(Value::Object(properties)) = map.get("properties") else {
        return fields;
    };

    for (key, prop) in properties {
        let prop_map = match NodeShape::of(prop) {
            NodeShape::Mapping(m) => m,
            // Tolerate malformed entries; only resolution is fail-fast.
            _ => continue,
        };

        let name = qualified_name(prefix, key);
        let label = prop_map
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(key)
            .to_string();

        if prop_map.get("type").and_then(Value::as_str) == Some("object") {
            let children = build_with_prefix(prop, &name);
            fields.push(FieldDescriptor {
                name,
                label,
                kind: FieldKind::Group { children },
                required: false,
            });
            continue;
        }

        fields.push(FieldDescriptor {
            name,
            label,
            kind: field_kind(prop_map),
            required: required.contains(&key.as_str()),
        });
    }

    fields
}

/// Field names the parent schema declares as required.
fn required_keys(map: &Map<String, Value>) -> Vec<&str> {
    map.get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Input kind precedence: enum, integer, number, date-time string, text.
fn field_kind(prop: &Map<String, Value>) -> FieldKind {
    if let Some(Value::Array(values)) = prop.get("enum") {
        return FieldKind::Select {
            options: values.clone(),
        };
    }
    match prop.get("type").and_then(Value::as_str) {
        Some("integer") => FieldKind::Integer,
        Some("number") => FieldKind::Number,
        Some("string")
            if prop.get("format").and_then(Value::as_str) == Some("date-time") =>
        {
            FieldKind::DateTime
        }
        _ => FieldKind::Text,
    }
}
