//! Tree document sources.
//!
//! Parsing and serializing a document format is a collaborator behind the
//! [`TreeFormat`] trait. Loading always builds a fresh [`Tree`] through
//! `add_node`, so a failed load never leaves a half-populated tree behind.
//!
//! - `json`: the shipped format, a flat JSON node list with parent links

use crate::model::{PersistError, Tree};
use std::fmt::Display;
use std::path::Path;
use tracing::{info, warn};

pub mod json;

pub use json::JsonFormat;

/// Encodes and decodes whole trees.
pub trait TreeFormat {
    /// Codec error.
    type Error: Display;

    /// Build a tree from document text.
    ///
    /// # Errors
    ///
    /// Returns the codec's error if the text is not a valid document.
    fn decode(&self, text: &str) -> Result<Tree, Self::Error>;

    /// Serialize a tree snapshot.
    ///
    /// # Errors
    ///
    /// Returns the codec's error if the tree cannot be represented.
    fn encode(&self, tree: &Tree) -> Result<String, Self::Error>;
}

/// Read and decode a document.
///
/// # Errors
///
/// - `PersistError::FileNotFound` if `path` does not exist
/// - `PersistError::Io` if reading fails
/// - `PersistError::Format` if the content does not decode
pub fn load_data_from_file<F: TreeFormat + ?Sized>(
    path: impl AsRef<Path>,
    format: &F,
) -> Result<Tree, PersistError> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "document not found");
        return Err(PersistError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = format.decode(&text).map_err(|e| {
        warn!(path = %path.display(), error = %e, "document failed to decode");
        PersistError::Format {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    info!(path = %path.display(), nodes = tree.len(), "loaded document");
    Ok(tree)
}

/// Encode and write a document, replacing any existing file.
///
/// # Errors
///
/// - `PersistError::Format` if encoding fails
/// - `PersistError::Io` if writing fails
pub fn save_data_to_file<F: TreeFormat + ?Sized>(
    tree: &Tree,
    path: impl AsRef<Path>,
    format: &F,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    let text = format.encode(tree).map_err(|e| PersistError::Format {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, text).map_err(|source| {
        warn!(path = %path.display(), error = %source, "document write failed");
        PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(path = %path.display(), nodes = tree.len(), "saved document");
    Ok(())
}
