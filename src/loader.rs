//! Document loading capability and shipped implementations.
//!
//! The resolver only needs the abstract [`DocumentLoader`] signature; where
//! documents actually come from is the caller's choice. [`FileLoader`]
//! resolves paths against a base directory on disk, [`MemoryLoader`] serves a
//! registered in-memory set and is handy in tests and demos.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FormError, Result};

/// Capability to fetch a schema document by path.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Loads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Load`] when the document cannot be fetched and
    /// [`FormError::Parse`] when its body is not valid JSON.
    async fn load(&self, path: &str) -> Result<Value>;
}

/// Loads schema documents from a base directory on disk.
pub struct FileLoader {
    base: PathBuf,
}

impl FileLoader {
    /// Creates a loader resolving document paths against `base`.
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentLoader for FileLoader {
    async fn load(&self, path: &str) -> Result<Value> {
        let full = self.base.join(path);
        let content =
            tokio::fs::read_to_string(&full)
                .await
                .map_err(|err| FormError::Load {
                    path: path.to_string(),
                    reason: err.to_string(),
                })?;
        serde_json::from_str(&content).map_err(|source| FormError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

/// In-memory document store.
#[derive(Default)]
pub struct MemoryLoader {
    documents: HashMap<String, Value>,
}

impl MemoryLoader {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `document` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, document: Value) {
        self.documents.insert(path.into(), document);
    }

    /// Builder-style variant of [`MemoryLoader::insert`].
    pub fn with(mut self, path: impl Into<String>, document: Value) -> Self {
        self.insert(path, document);
        self
    }
}

#[async_trait]
impl DocumentLoader for MemoryLoader {
    async fn load(&self, path: &str) -> Result<Value> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| FormError::Load {
                path: path.to_string(),
                reason: "document not found".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_loader_roundtrip() {
        let loader = MemoryLoader::new().with("root.json", json!({"type": "object"}));
        let doc = loader.load("root.json").await.unwrap();
        assert_eq!(doc, json!({"type": "object"}));
    }

    #[tokio::test]
    async fn test_memory_loader_missing_document() {
        let loader = MemoryLoader::new();
        let err = loader.load("nope.json").await.unwrap_err();
        assert!(matches!(err, FormError::Load { ref path, .. } if path == "nope.json"));
    }

    #[tokio::test]
    async fn test_file_loader_reads_and_parses() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("schema.json"), r#"{"type":"string"}"#).unwrap();

        let loader = FileLoader::new(dir.path());
        let doc = loader.load("schema.json").await.unwrap();
        assert_eq!(doc, json!({"type": "string"}));
    }

    #[tokio::test]
    async fn test_file_loader_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let loader = FileLoader::new(dir.path());
        let err = loader.load("broken.json").await.unwrap_err();
        assert!(matches!(err, FormError::Parse { ref path, .. } if path == "broken.json"));
    }

    #[tokio::test]
    async fn test_file_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileLoader::new(dir.path());
        let err = loader.load("absent.json").await.unwrap_err();
        assert!(matches!(err, FormError::Load { .. }));
    }
}
