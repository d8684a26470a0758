//! Tree nodes with structural identity.
//!
//! A [`Node`] is a cheap-to-clone handle over an immutable payload. Equality
//! and hashing look at the payload (name, value, children), never at the
//! allocation, so a freshly built tree can be matched against nodes remembered
//! from an older one.
//!
//! The structural hash is computed once, when the node is built, from its own
//! fields and its children's cached hashes. Hashing a node afterwards costs
//! the same whatever the size of its subtree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Payload of a tree node.
///
/// Sum type: a node is either a non-expandable leaf or an expandable group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Non-expandable item.
    Leaf {
        /// Primary display value (column 0).
        name: String,
        /// Secondary display value (column 1).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Expandable item holding an ordered list of children.
    Group {
        /// Primary display value (column 0).
        name: String,
        /// Secondary display value (column 1).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        /// Children in display order.
        #[serde(default)]
        children: Vec<Node>,
    },
}

#[derive(Clone)]
struct NodeData {
    /// Structural hash of `kind`. Children contribute their own cached hash.
    hash: u64,
    kind: NodeKind,
}

/// A node in a tree-table model.
///
/// Clones share the payload. Two nodes are equal when their payloads are
/// structurally equal, regardless of where either was allocated.
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

impl Node {
    /// Create a leaf without a value.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::from(NodeKind::Leaf {
            name: name.into(),
            value: None,
        })
    }

    /// Create a group without a value.
    pub fn group(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self::from(NodeKind::Group {
            name: name.into(),
            value: None,
            children: children.into_iter().collect(),
        })
    }

    /// Return a copy of this node carrying `value` in the value column.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        let kind = match Rc::unwrap_or_clone(self.0).kind {
            NodeKind::Leaf { name, .. } => NodeKind::Leaf { name, value },
            NodeKind::Group { name, children, .. } => NodeKind::Group {
                name,
                value,
                children,
            },
        };
        Self::from(kind)
    }

    /// Underlying payload.
    pub fn kind(&self) -> &NodeKind {
        &self.0.kind
    }

    /// Primary display value (column 0).
    pub fn name(&self) -> &str {
        match self.kind() {
            NodeKind::Leaf { name, .. } | NodeKind::Group { name, .. } => name,
        }
    }

    /// Secondary display value (column 1), if any.
    pub fn value(&self) -> Option<&str> {
        match self.kind() {
            NodeKind::Leaf { value, .. } | NodeKind::Group { value, .. } => value.as_deref(),
        }
    }

    /// Children in display order. Always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self.kind() {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Group { children, .. } => children,
        }
    }

    /// Whether this node can be expanded.
    pub fn is_group(&self) -> bool {
        matches!(self.kind(), NodeKind::Group { .. })
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        !self.is_group()
    }

    /// Visit this node and all of its descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        // Children are already built, so this only reads their cached hashes.
        let mut hasher = DefaultHasher::new();
        kind.hash(&mut hasher);
        Self(Rc::new(NodeData {
            hash: hasher.finish(),
            kind,
        }))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
            || (self.0.hash == other.0.hash && self.0.kind == other.0.kind)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NodeKind::deserialize(deserializer).map(Node::from)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.kind(), f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
