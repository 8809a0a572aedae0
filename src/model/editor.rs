//! SubtreeEditor - add, delete, rename and expand/collapse operations.
//!
//! Every operation validates before mutating, so a returned error means the
//! tree is untouched. Every successful operation bumps the tree revision,
//! which invalidates cached layout.

use super::error::TreeError;
use super::identifiers::NodeIndex;
use super::node::{Node, NodeInit, NodeKind};
use super::tree::Tree;
use tracing::{debug, warn};

impl Tree {
    /// Create a node and attach it as the last child of `parent`.
    ///
    /// `NodeIndex::ROOT` as parent appends to the root list.
    ///
    /// # Errors
    ///
    /// `TreeError::InvalidParent` if `parent` is non-zero and not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagtree::model::{NodeIndex, NodeInit, NodeKind, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let doc = tree
    ///     .add_node("Document", NodeIndex::ROOT, NodeKind::DocumentRoot, NodeInit::default())
    ///     .unwrap();
    /// let event = tree.add_node("EventA", doc, NodeKind::Event, NodeInit::default()).unwrap();
    /// assert_eq!(tree.roots(), &[doc]);
    /// assert_eq!(tree.children(doc), &[event]);
    /// ```
    pub fn add_node(
        &mut self,
        tag: impl Into<String>,
        parent: NodeIndex,
        kind: NodeKind,
        init: NodeInit,
    ) -> Result<NodeIndex, TreeError> {
        if !parent.is_root() && !self.store.contains(parent) {
            warn!(%parent, "add_node rejected: parent does not exist");
            return Err(TreeError::InvalidParent(parent));
        }

        let mut node = Node::new(tag, kind, init);
        node.parent = parent;
        let index = self.store.insert(node);

        if parent.is_root() {
            self.roots.push(index);
        } else {
            self.store.get_mut(parent)?.children.push(index);
        }
        self.touch();
        Ok(index)
    }

    /// Collect `index` and all of its descendants, parent before children.
    ///
    /// Uses an explicit stack so pathological depth cannot overflow the call
    /// stack. Nothing is mutated.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent.
    pub fn descendants(&self, index: NodeIndex) -> Result<Vec<NodeIndex>, TreeError> {
        self.store.get(index)?;
        let mut collected = Vec::new();
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            collected.push(current);
            if let Ok(node) = self.store.get(current) {
                stack.extend(node.children().iter().rev().copied());
            }
        }
        Ok(collected)
    }

    /// Remove `index` and its whole subtree.
    ///
    /// Two phases: the full removal set is collected first while every child
    /// list is intact, then the node is unlinked from its parent (or the root
    /// list) and every collected index is dropped from the store.
    ///
    /// Returns the removed indices, `index` first.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent; the tree is unchanged.
    pub fn delete_subtree(&mut self, index: NodeIndex) -> Result<Vec<NodeIndex>, TreeError> {
        let removal = self.descendants(index)?;
        let parent = self.store.get(index)?.parent();

        if parent.is_root() {
            if let Some(pos) = self.roots.iter().position(|&r| r == index) {
                self.roots.remove(pos);
            }
        } else if let Ok(parent_node) = self.store.get_mut(parent) {
            if let Some(pos) = parent_node.children.iter().position(|&c| c == index) {
                parent_node.children.remove(pos);
            }
        }

        for &doomed in &removal {
            // Collected from live child lists, so every index is present.
            let _ = self.store.remove(doomed);
        }
        self.touch();
        debug!(%index, removed = removal.len(), "deleted subtree");
        Ok(removal)
    }

    /// Flip the expansion state of `index`.
    ///
    /// Topology is unchanged; cached layout for the subtree becomes stale.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent.
    pub fn toggle_expansion(&mut self, index: NodeIndex) -> Result<bool, TreeError> {
        let node = self.store.get_mut(index)?;
        node.expanded = !node.expanded;
        let expanded = node.expanded;
        self.touch();
        Ok(expanded)
    }

    /// Set the expansion state of `index`. No-op if already in that state.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent.
    pub fn set_expanded(&mut self, index: NodeIndex, expanded: bool) -> Result<(), TreeError> {
        let node = self.store.get_mut(index)?;
        if node.expanded != expanded {
            node.expanded = expanded;
            self.touch();
        }
        Ok(())
    }

    /// Expand every node.
    pub fn expand_all(&mut self) {
        self.set_all_expanded(true);
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        self.set_all_expanded(false);
    }

    fn set_all_expanded(&mut self, expanded: bool) {
        let indices: Vec<_> = self.store.iter().map(|(i, _)| i).collect();
        for index in indices {
            if let Ok(node) = self.store.get_mut(index) {
                node.expanded = expanded;
            }
        }
        self.touch();
    }

    /// Replace the tag name of `index`.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent.
    pub fn rename_node(
        &mut self,
        index: NodeIndex,
        tag: impl Into<String>,
    ) -> Result<(), TreeError> {
        self.store.get_mut(index)?.set_tag(tag.into());
        self.touch();
        Ok(())
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
