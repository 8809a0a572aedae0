//! Domain model types (pure).
//!
//! The tree is an index-addressed arena: [`NodeStore`] owns every [`Node`],
//! [`Tree`] keeps the parent/child adjacency and ordered root list, and the
//! editing operations in [`editor`] are the only way relationships change.

pub mod editor;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod node;
pub mod store;
pub mod tree;

// Re-export for convenience
pub use error::{AppError, PersistError, TreeError};
pub use identifiers::NodeIndex;
pub use key_action::KeyAction;
pub use node::{Node, NodeInit, NodeKind, UnknownNodeKind};
pub use store::NodeStore;
pub use tree::{InvariantViolation, Tree};
