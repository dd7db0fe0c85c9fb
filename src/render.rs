//! HTML rendering of a field descriptor tree.
//!
//! One swappable consumer of the builder's output: writes labeled inputs into
//! an owned string buffer, grouping nested fields under `<fieldset>`. Every
//! input's `name` attribute is its descriptor's qualified name, the same key
//! the harvest step reads back.

use std::fmt::Write;

use serde_json::Value;

use crate::builder::{FieldDescriptor, FieldKind};

/// Renders a field tree into an owned HTML buffer.
///
/// The target is cleared before each render, so one renderer instance can be
/// reused across schema reloads.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    target: String,
}

impl HtmlRenderer {
    /// Creates a renderer with an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the target and renders `fields` into it.
    pub fn render(&mut self, fields: &[FieldDescriptor]) -> &str {
        self.target.clear();
        self.target.push_str("<form>\n");
        for field in fields {
            render_field(&mut self.target, field);
        }
        self.target.push_str("</form>\n");
        &self.target
    }

    /// The markup produced by the last render.
    pub fn html(&self) -> &str {
        &self.target
    }

    /// Consumes the renderer, returning the rendered markup.
    pub fn into_html(self) -> String {
        self.target
    }
}

fn render_field(out: &mut String, field: &FieldDescriptor) {
    match &field.kind {
        FieldKind::Group { children } => {
            let _ = writeln!(out, "<fieldset><legend>{}</legend>", escape(&field.label));
            for child in children {
                render_field(out, child);
            }
            out.push_str("</fieldset>\n");
        }
        FieldKind::Invalid => {
            let _ = writeln!(out, "<p class=\"schema-error\">{}</p>", escape(&field.label));
        }
        FieldKind::Select { options } => {
            render_label(out, field);
            let name = escape(&field.name);
            let _ = write!(out, "<select id=\"{name}\" name=\"{name}\"");
            push_required(out, field);
            out.push('>');
            for option in options {
                let text = escape(&option_text(option));
                let _ = write!(out, "<option value=\"{text}\">{text}</option>");
            }
            out.push_str("</select>\n");
        }
        kind => {
            render_label(out, field);
            let name = escape(&field.name);
            let (ty, step) = match kind {
                FieldKind::Integer => ("number", Some("1")),
                FieldKind::Number => ("number", Some("any")),
                FieldKind::DateTime => ("datetime-local", None),
                _ => ("text", None),
            };
            let _ = write!(out, "<input type=\"{ty}\" id=\"{name}\" name=\"{name}\"");
            if let Some(step) = step {
                let _ = write!(out, " step=\"{step}\"");
            }
            push_required(out, field);
            out.push_str(">\n");
        }
    }
}

fn render_label(out: &mut String, field: &FieldDescriptor) {
    let _ = write!(
        out,
        "<label for=\"{}\">{}</label>",
        escape(&field.name),
        escape(&field.label)
    );
}

fn push_required(out: &mut String, field: &FieldDescriptor) {
    if field.required {
        out.push_str(" required");
    }
}

/// Option value and text are both the literal enum value; strings render
/// bare, other literals via their JSON serialization.
fn option_text(option: &Value) -> String {
    match option {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
