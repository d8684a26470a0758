//! Expansion tracker: the set of groups currently shown expanded.

use crate::model::Node;
use std::collections::HashSet;

/// Set of expanded group values.
///
/// Membership is keyed on node *value*. Entries that no longer appear in the
/// tree are kept and simply have no effect until an equal node shows up again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionTracker {
    expanded: HashSet<Node>,
}

impl ExpansionTracker {
    /// Create a tracker with every group collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a group equal to `node` is expanded.
    pub fn contains(&self, node: &Node) -> bool {
        self.expanded.contains(node)
    }

    /// Mark `node` expanded. Leaves are ignored.
    ///
    /// Returns `true` if membership changed.
    pub fn expand(&mut self, node: &Node) -> bool {
        if !node.is_group() {
            return false;
        }
        self.expanded.insert(node.clone())
    }

    /// Mark `node` collapsed.
    ///
    /// Returns `true` if membership changed.
    pub fn collapse(&mut self, node: &Node) -> bool {
        self.expanded.remove(node)
    }

    /// Expand if collapsed, collapse if expanded.
    ///
    /// Returns `true` if membership changed, which is never the case for a leaf.
    pub fn toggle(&mut self, node: &Node) -> bool {
        if self.contains(node) {
            self.collapse(node)
        } else {
            self.expand(node)
        }
    }

    /// Forget every expanded group. Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.expanded.is_empty();
        self.expanded.clear();
        changed
    }

    /// Number of expanded groups, stale entries included.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether no group is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterate over expanded groups in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.expanded.iter()
    }
}
