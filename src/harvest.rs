//! Value harvesting from submitted form inputs.
//!
//! Submitted values arrive keyed by the qualified names the renderer stamped
//! on each input. Harvesting walks the descriptor tree, flattening groups,
//! and normalizes date-and-time values to RFC 3339. A date-and-time field
//! left empty harvests as an empty string rather than being omitted.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::builder::{FieldDescriptor, FieldKind};

/// Collects submitted values for `fields` out of `raw`.
pub fn harvest(fields: &[FieldDescriptor], raw: &HashMap<String, String>) -> Map<String, Value> {
    let mut out = Map::new();
    collect(fields, raw, &mut out);
    out
}

fn collect(
    fields: &[FieldDescriptor],
    raw: &HashMap<String, String>,
    out: &mut Map<String, Value>,
) {
    for field in fields {
        match &field.kind {
            FieldKind::Group { children } => collect(children, raw, out),
            FieldKind::Invalid => {}
            FieldKind::DateTime => {
                let value = raw.get(&field.name).map(String::as_str).unwrap_or("");
                out.insert(
                    field.name.clone(),
                    Value::String(normalize_timestamp(value)),
                );
            }
            _ => {
                if let Some(value) = raw.get(&field.name) {
                    out.insert(field.name.clone(), Value::String(value.clone()));
                }
            }
        }
    }
}

/// Normalizes a `datetime-local` input value to an RFC 3339 timestamp.
///
/// Empty input maps to an empty string; a value that does not parse is
/// passed through unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.and_utc().to_rfc3339())
        .unwrap_or_else(|_| raw.to_string())
}
