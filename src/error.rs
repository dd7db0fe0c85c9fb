//! Error types for schema loading and reference resolution.

use thiserror::Error;

/// Errors produced while loading and resolving schema documents.
///
/// Any of these aborts the whole pipeline: no partial form is built from a
/// half-resolved schema. A schema that resolves fine but is not a usable
/// mapping is not an error; the builder emits a placeholder field instead.
#[derive(Debug, Error)]
pub enum FormError {
    /// A schema document could not be fetched or read.
    #[error("failed to load schema document `{path}`: {reason}")]
    Load {
        /// Document path as it appeared in the reference.
        path: String,
        /// Underlying failure (I/O error, HTTP status, missing entry).
        reason: String,
    },

    /// A document body was fetched but is not valid JSON.
    #[error("failed to parse schema document `{path}`")]
    Parse {
        /// Document path as it appeared in the reference.
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A reference chain revisited a document that is still being expanded.
    #[error("circular reference detected: `{path}` is already being resolved")]
    CircularReference {
        /// The repeated document path.
        path: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormError>;
