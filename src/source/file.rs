//! File-based tree documents.

use crate::model::{Node, SourceError};
use std::path::{Path, PathBuf};

/// A tree document loaded from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    nodes: Vec<Node>,
}

impl FileSource {
    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FileNotFound` if the file does not exist.
    /// Returns `SourceError::Io` for other I/O errors.
    /// Returns `SourceError::Parse` if the contents are not a tree document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SourceError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let nodes = super::parse_document(&contents, path)?;

        tracing::debug!(path = %path.display(), top_level = nodes.len(), "loaded tree document");

        Ok(Self {
            path: path.to_path_buf(),
            nodes,
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed top-level nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Hand the top-level sequence over to a table.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
