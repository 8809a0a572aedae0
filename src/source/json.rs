//! Flat JSON tree documents.
//!
//! Nodes are listed in display order (parent before children, siblings in
//! order). Each record names its parent by position in the list; roots have
//! no `parent`. Nesting depth in the file stays constant however deep the
//! tree is.
//!
//! ```json
//! { "nodes": [
//!     { "tag": "Document", "kind": "document-root" },
//!     { "tag": "EventA", "kind": "event", "expanded": false, "parent": 0 },
//!     { "tag": "Custom", "kind": 42, "parent": 1 }
//! ] }
//! ```
//!
//! `kind` defaults to `leaf`, `expanded` to `true`. A `parent` must refer to
//! an earlier record.

use super::TreeFormat;
use crate::model::{NodeIndex, NodeInit, NodeKind, Tree};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One node as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRecord {
    /// Tag name.
    pub tag: String,
    /// Type classification.
    #[serde(default)]
    pub kind: NodeKind,
    /// Expansion state.
    #[serde(default = "default_expanded")]
    pub expanded: bool,
    /// Position of the parent record, `None` for roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
}

fn default_expanded() -> bool {
    true
}

/// Top-level document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDocument {
    /// Every node in display order.
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

/// A record whose parent is not an earlier record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("node {record} refers to parent {parent}, which is not an earlier node")]
pub struct DanglingParent {
    /// Position of the offending record.
    pub record: usize,
    /// The parent position it named.
    pub parent: usize,
}

impl TreeDocument {
    /// Build a tree, adding records in order so indices follow display order.
    ///
    /// # Errors
    ///
    /// [`DanglingParent`] if a record's parent is itself or a later record.
    pub fn to_tree(&self) -> Result<Tree, DanglingParent> {
        let mut tree = Tree::new();
        let mut added: Vec<NodeIndex> = Vec::with_capacity(self.nodes.len());
        for (record_at, record) in self.nodes.iter().enumerate() {
            let parent = match record.parent {
                None => NodeIndex::ROOT,
                Some(parent) => *added.get(parent).ok_or(DanglingParent {
                    record: record_at,
                    parent,
                })?,
            };
            let init = NodeInit {
                expanded: record.expanded,
            };
            let index = tree
                .add_node(record.tag.clone(), parent, record.kind, init)
                .map_err(|_| DanglingParent {
                    record: record_at,
                    parent: record.parent.unwrap_or_default(),
                })?;
            added.push(index);
        }
        Ok(tree)
    }

    /// Snapshot a tree.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut order = Vec::with_capacity(tree.len());
        for &root in tree.roots() {
            order.extend(tree.descendants(root).unwrap_or_default());
        }

        let mut position: HashMap<NodeIndex, usize> = HashMap::with_capacity(order.len());
        let mut nodes = Vec::with_capacity(order.len());
        for index in order {
            let Ok(node) = tree.get(index) else {
                continue;
            };
            let parent = node.parent();
            position.insert(index, nodes.len());
            nodes.push(NodeRecord {
                tag: node.tag().to_string(),
                kind: node.kind(),
                expanded: node.is_expanded(),
                parent: (!parent.is_root())
                    .then(|| position.get(&parent).copied())
                    .flatten(),
            });
        }

        Self { nodes }
    }
}

/// Pretty-printed JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl TreeFormat for JsonFormat {
    type Error = serde_json::Error;

    fn decode(&self, text: &str) -> Result<Tree, Self::Error> {
        let document: TreeDocument = serde_json::from_str(text)?;
        document.to_tree().map_err(serde_json::Error::custom)
    }

    fn encode(&self, tree: &Tree) -> Result<String, Self::Error> {
        serde_json::to_string_pretty(&TreeDocument::from_tree(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "nodes": [
            { "tag": "Document", "kind": "document-root" },
            { "tag": "EventA", "kind": "event", "expanded": false, "parent": 0 },
            { "tag": "x", "parent": 1 },
            { "tag": "Vars", "kind": "variable", "parent": 0 },
            { "tag": "Second" }
        ]
    }"#;

    #[test]
    fn decode_assigns_indices_in_document_order() {
        let tree = JsonFormat.decode(DOC).unwrap();
        let tags: Vec<_> = (1..=5)
            .map(|i| tree.get(NodeIndex::new(i)).unwrap().tag().to_string())
            .collect();
        assert_eq!(tags, vec!["Document", "EventA", "x", "Vars", "Second"]);
        assert_eq!(tree.roots(), &[NodeIndex::new(1), NodeIndex::new(5)]);
        assert_eq!(
            tree.children(NodeIndex::new(1)),
            &[NodeIndex::new(2), NodeIndex::new(4)]
        );
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn decode_applies_defaults() {
        let tree = JsonFormat.decode(DOC).unwrap();
        let x = tree.get(NodeIndex::new(3)).unwrap();
        assert_eq!(x.kind(), NodeKind::Leaf);
        assert!(x.is_expanded());
        assert!(!tree.get(NodeIndex::new(2)).unwrap().is_expanded());
    }

    #[test]
    fn decode_keeps_uncoded_kind() {
        let tree = JsonFormat
            .decode(r#"{ "nodes": [ { "tag": "a", "kind": 42 } ] }"#)
            .unwrap();
        assert_eq!(tree.get(NodeIndex::new(1)).unwrap().kind(), NodeKind::Other(42));
        assert!(JsonFormat.encode(&tree).unwrap().contains("\"kind\": 42"));
    }

    #[test]
    fn decode_rejects_unknown_kind_name() {
        let err = JsonFormat
            .decode(r#"{ "nodes": [ { "tag": "a", "kind": "widget" } ] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        assert!(JsonFormat
            .decode(r#"{ "nodes": [ { "tag": "a", "colour": "red" } ] }"#)
            .is_err());
    }

    #[test]
    fn decode_rejects_forward_parent() {
        let err = JsonFormat
            .decode(r#"{ "nodes": [ { "tag": "a", "parent": 1 }, { "tag": "b" } ] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("node 0 refers to parent 1"), "{err}");
    }

    #[test]
    fn decode_rejects_self_parent() {
        assert!(JsonFormat
            .decode(r#"{ "nodes": [ { "tag": "a", "parent": 0 } ] }"#)
            .is_err());
    }

    #[test]
    fn encode_round_trips_document() {
        let tree = JsonFormat.decode(DOC).unwrap();
        let text = JsonFormat.encode(&tree).unwrap();
        let again: TreeDocument = serde_json::from_str(&text).unwrap();
        let original: TreeDocument = serde_json::from_str(DOC).unwrap();
        assert_eq!(again, original);
    }

    #[test]
    fn encode_skips_deleted_subtrees() {
        let mut tree = JsonFormat.decode(DOC).unwrap();
        tree.delete_subtree(NodeIndex::new(2)).unwrap();
        let doc = TreeDocument::from_tree(&tree);
        let tags: Vec<_> = doc.nodes.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["Document", "Vars", "Second"]);
        assert_eq!(doc.nodes[1].parent, Some(0));
    }

    #[test]
    fn empty_document() {
        let tree = JsonFormat.decode("{}").unwrap();
        assert!(tree.is_empty());
        assert_eq!(JsonFormat.encode(&tree).unwrap(), "{\n  \"nodes\": []\n}");
    }
}
