//! Flattening a tree into visible rows.
//!
//! Pure function of (top-level nodes, expansion tracker). Only the children of
//! expanded groups are walked, and each membership check hashes the node's
//! cached structural hash, so a collapsed group costs the same however large
//! its subtree is. A group found in the tracker under a different allocation
//! is additionally compared field by field.

use super::tracker::ExpansionTracker;
use crate::model::Node;

/// A visible row: a node and its nesting depth (0 = top level).
///
/// Rows carry no identity of their own and are rebuilt on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Node shown in this row.
    pub node: Node,
    /// Nesting depth; top-level nodes are at 0.
    pub depth: usize,
}

impl Row {
    /// Create a row for `node` at `depth`.
    pub fn new(node: Node, depth: usize) -> Self {
        Self { node, depth }
    }
}

/// Project `top_level` into visible rows.
///
/// Pre-order: each node is followed by its children (at `depth + 1`) only if
/// it is a group and `tracker` contains it.
pub fn flatten(top_level: &[Node], tracker: &ExpansionTracker) -> Vec<Row> {
    let mut rows = Vec::with_capacity(top_level.len());
    push_rows(top_level, 0, tracker, &mut rows);
    rows
}

fn push_rows(nodes: &[Node], depth: usize, tracker: &ExpansionTracker, rows: &mut Vec<Row>) {
    for node in nodes {
        rows.push(Row::new(node.clone(), depth));
        if node.is_group() && tracker.contains(node) {
            push_rows(node.children(), depth + 1, tracker, rows);
        }
    }
}
