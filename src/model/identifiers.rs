//! Node identifier newtype.
//!
//! Node indices are arena slots handed out by [`NodeStore`](super::store::NodeStore).
//! Index `0` is reserved as the "no parent" sentinel and is never assigned to a node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable index of a node in the arena.
///
/// Unique for the node's lifetime and never reused within one load session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Sentinel parent value meaning "this node is a root".
    pub const ROOT: Self = Self(0);

    /// Wrap a raw index value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// True for the root sentinel.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for NodeIndex {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
