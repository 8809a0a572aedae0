//! Topology - parent/child adjacency and the ordered root list.
//!
//! [`Tree`] pairs a [`NodeStore`] with the root list and is the only type that
//! rewires relationships. Mutations live in [`editor`](super::editor).
//!
//! # Invariants
//! - A node's parent is either the root sentinel or a live node listing it as a child.
//! - Every node with the root sentinel as parent appears exactly once in `roots`.
//! - No node is its own ancestor.
//! - No child or root entry refers to a removed node.

use super::error::TreeError;
use super::identifiers::NodeIndex;
use super::node::Node;
use super::store::NodeStore;
use std::collections::HashSet;
use thiserror::Error;

/// A broken structural invariant, reported by [`Tree::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A root list entry or child entry names a node that does not exist.
    #[error("{referrer} refers to missing node {missing}")]
    Dangling {
        /// Node holding the reference (root sentinel for the root list).
        referrer: NodeIndex,
        /// Missing node.
        missing: NodeIndex,
    },
    /// A node's parent does not list it as a child.
    #[error("{node} claims parent {parent}, which does not list it")]
    ParentMismatch {
        /// Node with the bad back-reference.
        node: NodeIndex,
        /// Claimed parent.
        parent: NodeIndex,
    },
    /// A root-parented node is missing from, or repeated in, the root list.
    #[error("root {0} appears {1} times in the root list")]
    RootCount(NodeIndex, usize),
    /// A node is reachable twice, or is its own ancestor.
    #[error("{0} is reachable more than once")]
    Cycle(NodeIndex),
    /// A live node is not reachable from any root.
    #[error("{0} is not reachable from any root")]
    Unreachable(NodeIndex),
}

/// Node arena plus ordered root list.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub(crate) store: NodeStore,
    pub(crate) roots: Vec<NodeIndex>,
    revision: u64,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` for absent indices.
    pub fn get(&self, index: NodeIndex) -> Result<&Node, TreeError> {
        self.store.get(index)
    }

    /// Top-level nodes in display order.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Children of `index` in display order. Empty for absent nodes.
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.store.get(index).map(Node::children).unwrap_or(&[])
    }

    /// Children of `parent`, where the root sentinel yields the root list.
    pub fn children_of_parent(&self, parent: NodeIndex) -> &[NodeIndex] {
        if parent.is_root() {
            &self.roots
        } else {
            self.children(parent)
        }
    }

    /// Parent of `index`.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` for absent indices.
    pub fn parent(&self, index: NodeIndex) -> Result<NodeIndex, TreeError> {
        self.store.get(index).map(Node::parent)
    }

    /// Number of ancestors of `index` (roots have depth 0).
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` for absent indices.
    pub fn depth(&self, index: NodeIndex) -> Result<usize, TreeError> {
        let mut depth = 0;
        let mut current = self.store.get(index)?.parent();
        while !current.is_root() {
            depth += 1;
            current = self.store.get(current)?.parent();
        }
        Ok(depth)
    }

    /// True if `index` is a live node.
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.store.contains(index)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read access to the arena.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Counter bumped by every change that affects layout.
    ///
    /// The layout cache compares this against the revision it was built from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Clear nodes and root list. Always succeeds.
    pub fn reset(&mut self) {
        self.store.clear();
        self.roots.clear();
        self.touch();
    }

    /// Visible nodes in display order: roots in order, depth-first into
    /// expanded children. Yields `(index, depth)`.
    pub fn visible(&self) -> Vec<(NodeIndex, usize)> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<(NodeIndex, usize)> =
            self.roots.iter().rev().map(|&root| (root, 0)).collect();
        while let Some((index, depth)) = stack.pop() {
            let Ok(node) = self.store.get(index) else {
                continue;
            };
            out.push((index, depth));
            if node.is_expanded() {
                stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
            }
        }
        out
    }

    /// Verify every topology invariant.
    ///
    /// # Errors
    ///
    /// The first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (index, node) in self.store.iter() {
            let parent = node.parent();
            if parent.is_root() {
                let count = self.roots.iter().filter(|&&r| r == index).count();
                if count != 1 {
                    return Err(InvariantViolation::RootCount(index, count));
                }
            } else {
                let listed = self
                    .store
                    .get(parent)
                    .map(|p| p.children().contains(&index))
                    .unwrap_or(false);
                if !listed {
                    return Err(InvariantViolation::ParentMismatch { node: index, parent });
                }
            }
        }

        let mut seen = HashSet::with_capacity(self.len());
        let mut stack: Vec<(NodeIndex, NodeIndex)> =
            self.roots.iter().map(|&r| (NodeIndex::ROOT, r)).collect();
        while let Some((referrer, index)) = stack.pop() {
            let node = self.store.get(index).map_err(|_| InvariantViolation::Dangling {
                referrer,
                missing: index,
            })?;
            if !seen.insert(index) {
                return Err(InvariantViolation::Cycle(index));
            }
            if node.parent() != referrer {
                return Err(InvariantViolation::ParentMismatch {
                    node: index,
                    parent: node.parent(),
                });
            }
            stack.extend(node.children().iter().map(|&child| (index, child)));
        }

        if let Some((index, _)) = self.store.iter().find(|(i, _)| !seen.contains(i)) {
            return Err(InvariantViolation::Unreachable(index));
        }
        Ok(())
    }
}
