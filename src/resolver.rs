//! Recursive `$ref` expansion with cycle detection.
//!
//! A reference marker is substituted wholly by the resolved content of the
//! document it points to; sibling keys next to `$ref` are discarded. Cycle
//! detection tracks the documents currently being expanded on the active
//! root-to-node chain: a path is inserted before its document is loaded and
//! removed once the expansion exits, success or failure, so a later branch
//! may legally revisit a document an earlier branch already finished with.
//! Only a repeat on a single chain is a cycle, and a cycle is fatal.

use std::collections::HashSet;

use futures::future::BoxFuture;
use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{FormError, Result},
    loader::DocumentLoader,
    schema::NodeShape,
};

/// Fully expands every reference marker in `node`.
///
/// The returned tree contains no `$ref` nodes.
///
/// # Errors
///
/// Fails fast: the first load failure or detected cycle aborts the whole
/// call with the nested error unchanged.
pub async fn resolve(node: &Value, loader: &dyn DocumentLoader) -> Result<Value> {
    let mut in_progress = HashSet::new();
    resolve_node(node, loader, &mut in_progress).await
}

/// Resolves one node, threading the in-progress path set through recursion.
///
/// Boxed because async recursion needs an indirection for the future type.
fn resolve_node<'a>(
    node: &'a Value,
    loader: &'a dyn DocumentLoader,
    in_progress: &'a mut HashSet<String>,
) -> BoxFuture<'a, Result<Value>> {
    Box::pin(async move {
        match NodeShape::of(node) {
            NodeShape::Null => Ok(Value::Null),
            NodeShape::Scalar(value) => Ok(value.clone()),
            NodeShape::Sequence(items) => {
                let mut resolved = Vec::with_capacity(items.len());
                for item in items {
                    resolved.push(resolve_node(item, loader, in_progress).await?);
                }
                Ok(Value::Array(resolved))
            }
            NodeShape::Reference(path) => {
                if in_progress.contains(path) {
                    return Err(FormError::CircularReference {
                        path: path.to_string(),
                    });
                }
                debug!("expanding reference `{path}`");
                in_progress.insert(path.to_string());
                let expanded = expand_reference(path, loader, in_progress).await;
                // Removed on failure too, so a completed visit never blocks
                // a later sibling branch.
                in_progress.remove(path);
                expanded
            }
            NodeShape::Mapping(map) => {
                let mut resolved = Map::with_capacity(map.len());
                for (key, value) in map {
                    resolved.insert(key.clone(), resolve_node(value, loader, in_progress).await?);
                }
                Ok(Value::Object(resolved))
            }
        }
    })
}

/// Loads a referenced document and resolves it in place of the marker.
async fn expand_reference(
    path: &str,
    loader: &dyn DocumentLoader,
    in_progress: &mut HashSet<String>,
) -> Result<Value> {
    let document = loader.load(path).await?;
    resolve_node(&document, loader, in_progress).await
}
