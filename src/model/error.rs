//! Error types for tagtree.
//!
//! Errors are split by layer and compose through `From` so `?` works across
//! module boundaries.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error for the terminal application
//!   - [`PersistError`] - loading or saving a tree document failed
//!   - [`ConfigError`] - the config file exists but is unreadable
//!   - [`LoggingError`] - the log file could not be set up
//!   - `std::io::Error` - terminal setup or drawing failed
//! - [`TreeError`] - a structural mutation was rejected
//!
//! # Recovery Strategy
//!
//! Tree mutations are all-or-nothing: a `TreeError` means the tree was not
//! touched, so callers log it and carry on. A failed load leaves the current
//! tree in place and is reported in the status line. Terminal errors are fatal.

use super::identifiers::NodeIndex;
use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load or save a document.
    #[error("Document error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or rendering error.
    ///
    /// Fatal: the application restores the terminal and exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A structural operation on the tree was rejected.
///
/// Returned before any mutation happens, so the tree is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node index is not present in the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagtree::model::{NodeIndex, TreeError};
    ///
    /// let err = TreeError::NotFound(NodeIndex::new(9));
    /// assert_eq!(err.to_string(), "Node #9 not found");
    /// ```
    #[error("Node {0} not found")]
    NotFound(NodeIndex),

    /// `add_node` was given a non-root parent that does not exist.
    #[error("Parent node {0} does not exist")]
    InvalidParent(NodeIndex),
}

/// Loading or saving a tree document failed.
///
/// `FileNotFound` is kept distinct from generic I/O so the status line can
/// say which path was missing.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The document path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be decoded or encoded.
    #[error("Invalid document {path}: {reason}")]
    Format {
        /// Path of the offending document.
        path: PathBuf,
        /// Codec error message.
        reason: String,
    },
}

impl PersistError {
    /// Path the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PersistError::FileNotFound { path }
            | PersistError::Io { path, .. }
            | PersistError::Format { path, .. } => path,
        }
    }
}
