//! # schemaform
//!
//! Render HTML forms dynamically from JSON Schema documents, resolving
//! external `$ref` references before rendering.
//!
//! The core is a two-stage pipeline: the resolver expands every reference
//! marker into the content of the document it points to (detecting cycles as
//! it goes), and the builder turns the fully-expanded schema into a tree of
//! field descriptors ready for rendering into any UI toolkit. An HTML
//! renderer and a value-harvesting step ship as consumers of that tree.
//!
//! ## Features
//!
//! - External `$ref` resolution through a pluggable async document loader
//! - Cycle detection with a path-sensitive in-progress guard
//! - Nested object schemas become grouped fields with dot-qualified names
//! - Input kinds derived from `enum`, `type`, and `format` hints
//! - Harvested date-and-time values normalized to RFC 3339
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schemaform::{FileLoader, FormPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), schemaform::FormError> {
//!     let pipeline = FormPipeline::new(FileLoader::new("schemas"));
//!     let html = pipeline.render_html("person.json").await?;
//!     println!("{html}");
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Schema node classification and qualified-name utilities
//! - [`loader`] - Document loading capability and shipped implementations
//! - [`resolver`] - Recursive `$ref` expansion with cycle detection
//! - [`builder`] - Schema-to-form-tree construction
//! - [`render`] - HTML rendering of a field descriptor tree
//! - [`harvest`] - Value harvesting from submitted form inputs
//! - [`pipeline`] - End-to-end orchestration

/// Schema-to-form-tree construction.
pub mod builder;

/// Error types for schema loading and reference resolution.
pub mod error;

/// Value harvesting from submitted form inputs.
pub mod harvest;

/// Document loading capability and shipped implementations.
pub mod loader;

/// End-to-end orchestration: load, resolve, build, render.
pub mod pipeline;

/// HTML rendering of a field descriptor tree.
pub mod render;

/// Recursive `$ref` expansion with cycle detection.
pub mod resolver;

/// Schema node classification and qualified-name utilities.
pub mod schema;

pub use builder::{FieldDescriptor, FieldKind, build};
pub use error::{FormError, Result};
pub use harvest::harvest;
pub use loader::{DocumentLoader, FileLoader, MemoryLoader};
pub use pipeline::FormPipeline;
pub use render::HtmlRenderer;
pub use resolver::resolve;
pub use serde_json::Value;
