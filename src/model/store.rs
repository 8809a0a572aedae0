//! NodeStore - index-addressed arena owning every node.
//!
//! Slots are never reused while the store lives: removing a node leaves a
//! hole, and the next insert takes a fresh index. `clear()` is the only way
//! to reset numbering.

use super::error::TreeError;
use super::identifiers::NodeIndex;
use super::node::Node;

/// Arena of nodes addressed by [`NodeIndex`].
///
/// Slot 0 is the root sentinel and is never occupied. The store does not
/// check structural consistency; see [`Tree`](super::tree::Tree) for that.
#[derive(Debug, Clone)]
pub struct NodeStore {
    slots: Vec<Option<Node>>,
    len: usize,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            len: 0,
        }
    }

    /// Store a node and return its fresh index.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagtree::model::{Node, NodeInit, NodeKind, NodeStore};
    ///
    /// let mut store = NodeStore::new();
    /// let a = store.insert(Node::new("a", NodeKind::Leaf, NodeInit::default()));
    /// let b = store.insert(Node::new("b", NodeKind::Leaf, NodeInit::default()));
    /// assert_eq!(a.get(), 1);
    /// assert_eq!(b.get(), 2);
    /// ```
    pub fn insert(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex::new(self.slots.len() as u32);
        self.slots.push(Some(node));
        self.len += 1;
        index
    }

    /// Look up a node.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if the index is absent or was removed.
    pub fn get(&self, index: NodeIndex) -> Result<&Node, TreeError> {
        self.slots
            .get(index.get() as usize)
            .and_then(Option::as_ref)
            .ok_or(TreeError::NotFound(index))
    }

    /// Look up a node for mutation.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if the index is absent or was removed.
    pub fn get_mut(&mut self, index: NodeIndex) -> Result<&mut Node, TreeError> {
        self.slots
            .get_mut(index.get() as usize)
            .and_then(Option::as_mut)
            .ok_or(TreeError::NotFound(index))
    }

    /// Remove exactly one index.
    ///
    /// Callers are responsible for removing descendants and unlinking the
    /// node from its parent.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if the index is absent.
    pub fn remove(&mut self, index: NodeIndex) -> Result<Node, TreeError> {
        let node = self
            .slots
            .get_mut(index.get() as usize)
            .and_then(Option::take)
            .ok_or(TreeError::NotFound(index))?;
        self.len -= 1;
        Ok(node)
    }

    /// True if the index holds a node.
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.get(index).is_ok()
    }

    /// Drop every node and reset numbering.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.slots.push(None);
        self.len = 0;
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no nodes are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate live nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeIndex::new(i as u32), node)))
    }
}
