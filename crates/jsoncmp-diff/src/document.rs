//! Loading documents into the value tree the differ works on.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{DiffError, DiffResult};

/// Parse raw JSON bytes into a document tree.
pub fn parse_document(bytes: &[u8]) -> DiffResult<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and parse a JSON document from disk.
pub fn load_document(path: impl AsRef<Path>) -> DiffResult<Value> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
    parse_document(&bytes)
}
