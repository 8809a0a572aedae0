//! Tree node record and type classification.

use super::identifiers::NodeIndex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type classification of a node.
///
/// Drives which context-menu actions are offered for the node. The numeric
/// codes match the record format the trees are converted from; codes without
/// a named kind are kept as [`NodeKind::Other`] so they survive a save.
///
/// Named kinds serialize as their kebab-case name, other kinds as the bare
/// integer code. Both forms are accepted when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// Plain node with no special behavior.
    #[default]
    Leaf,
    /// Event list; children are events.
    Event,
    /// Variable list; children are variables.
    Variable,
    /// Structural grouping node with no editing actions.
    Container,
    /// Top of a loaded document.
    DocumentRoot,
    /// Type code with no named kind. Build these with [`NodeKind::from_code`].
    Other(u8),
}

impl NodeKind {
    /// All named kinds, in declaration order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Leaf,
        NodeKind::Event,
        NodeKind::Variable,
        NodeKind::Container,
        NodeKind::DocumentRoot,
    ];

    /// Numeric type code used by the source record format.
    pub fn code(self) -> u8 {
        match self {
            NodeKind::Leaf => 0,
            NodeKind::Event => 11,
            NodeKind::Variable => 12,
            NodeKind::Container => 13,
            NodeKind::DocumentRoot => 95,
            NodeKind::Other(code) => code,
        }
    }

    /// Map a numeric type code to a kind. Codes without a name become
    /// [`NodeKind::Other`].
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => NodeKind::Leaf,
            11 => NodeKind::Event,
            12 => NodeKind::Variable,
            13 => NodeKind::Container,
            95 => NodeKind::DocumentRoot,
            other => NodeKind::Other(other),
        }
    }

    /// Kebab-case name, as used in config files and the JSON format.
    /// `None` for [`NodeKind::Other`].
    pub fn name(self) -> Option<&'static str> {
        match self {
            NodeKind::Leaf => Some("leaf"),
            NodeKind::Event => Some("event"),
            NodeKind::Variable => Some("variable"),
            NodeKind::Container => Some("container"),
            NodeKind::DocumentRoot => Some("document-root"),
            NodeKind::Other(_) => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.code()),
        }
    }
}

/// Error returned when parsing an unknown node kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind: {0} (expected a kind name or a type code 0-255)")]
pub struct UnknownNodeKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    /// Accepts a kebab-case name or a decimal type code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = NodeKind::ALL.into_iter().find(|kind| kind.name() == Some(s)) {
            return Ok(kind);
        }
        s.parse::<u8>()
            .map(NodeKind::from_code)
            .map_err(|_| UnknownNodeKind(s.to_string()))
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u8(self.code()),
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeKindVisitor)
    }
}

struct NodeKindVisitor;

impl Visitor<'_> for NodeKindVisitor {
    type Value = NodeKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a node kind name or an integer type code 0-255")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u8::try_from(v)
            .map(NodeKind::from_code)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u8::try_from(v)
            .map(NodeKind::from_code)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

/// Extra construction arguments for a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInit {
    /// Initial expansion state.
    pub expanded: bool,
}

impl Default for NodeInit {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl NodeInit {
    /// Start the node collapsed.
    pub fn collapsed() -> Self {
        Self { expanded: false }
    }
}

/// One entry in the displayed hierarchy.
///
/// Relationships are plain indices into the owning [`NodeStore`](super::store::NodeStore);
/// only [`Tree`](super::tree::Tree) mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    kind: NodeKind,
    pub(crate) parent: NodeIndex,
    pub(crate) children: Vec<NodeIndex>,
    pub(crate) expanded: bool,
}

impl Node {
    /// Create a detached node (root parent, no children).
    pub fn new(tag: impl Into<String>, kind: NodeKind, init: NodeInit) -> Self {
        Self {
            tag: tag.into(),
            kind,
            parent: NodeIndex::ROOT,
            children: Vec::new(),
            expanded: init.expanded,
        }
    }

    /// Tag name shown as the node's text.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Type classification.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Parent index, or [`NodeIndex::ROOT`] for top-level nodes.
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    /// Child indices in display order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// True if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Expansion state.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn set_tag(&mut self, tag: String) {
        self.tag = tag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_defaults_to_expanded_root() {
        let node = Node::new("Document", NodeKind::DocumentRoot, NodeInit::default());
        assert_eq!(node.tag(), "Document");
        assert_eq!(node.kind(), NodeKind::DocumentRoot);
        assert!(node.parent().is_root());
        assert!(node.children().is_empty());
        assert!(node.is_expanded());
    }

    #[test]
    fn collapsed_init_starts_collapsed() {
        let node = Node::new("x", NodeKind::Leaf, NodeInit::collapsed());
        assert!(!node.is_expanded());
    }

    #[test]
    fn kind_codes_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_code(kind.code()), kind);
        }
        assert_eq!(NodeKind::from_code(42).code(), 42);
    }

    #[test]
    fn unknown_code_is_kept() {
        assert_eq!(NodeKind::from_code(42), NodeKind::Other(42));
        assert_eq!(NodeKind::Other(42).to_string(), "42");
        assert_eq!(NodeKind::Other(42).name(), None);
    }

    #[test]
    fn kind_parses_from_name_or_code() {
        assert_eq!("document-root".parse::<NodeKind>(), Ok(NodeKind::DocumentRoot));
        assert_eq!("event".parse::<NodeKind>(), Ok(NodeKind::Event));
        assert_eq!("11".parse::<NodeKind>(), Ok(NodeKind::Event));
        assert_eq!("200".parse::<NodeKind>(), Ok(NodeKind::Other(200)));
        assert!("Event".parse::<NodeKind>().is_err());
        assert!("256".parse::<NodeKind>().is_err());
    }

    #[test]
    fn kind_serde_name_matches_display() {
        for kind in NodeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn other_kind_serializes_as_code() {
        assert_eq!(serde_json::to_string(&NodeKind::Other(42)).unwrap(), "42");
        assert_eq!(serde_json::from_str::<NodeKind>("42").unwrap(), NodeKind::Other(42));
        assert_eq!(serde_json::from_str::<NodeKind>("12").unwrap(), NodeKind::Variable);
        assert!(serde_json::from_str::<NodeKind>("300").is_err());
        assert!(serde_json::from_str::<NodeKind>("\"widget\"").is_err());
    }
}
