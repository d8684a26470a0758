//! Projection engine: tree + expansion state -> cached visible rows.

use super::flatten::{flatten, Row};
use super::listeners::{ChangeCause, ChangeEvent, ChangeListeners, ListenerId};
use super::tracker::ExpansionTracker;
use crate::model::{Column, Node, ProjectionError};
use tracing::debug;

/// Owns the top-level nodes, the expansion tracker and the flattened rows.
///
/// # Invariants
///
/// - `rows == flatten(top_level, tracker)` after every public call.
/// - A notification fires only after the new rows are in place.
/// - Out-of-range rows are rejected before any state is touched.
///
/// # Replacement
///
/// [`on_source_replaced`](Self::on_source_replaced) keeps the tracker, so a
/// group in the new tree that is value-equal to a previously expanded one is
/// shown expanded without any bookkeeping.
#[derive(Debug, Default)]
pub struct ProjectionEngine {
    top_level: Vec<Node>,
    tracker: ExpansionTracker,
    rows: Vec<Row>,
    listeners: ChangeListeners,
}

impl ProjectionEngine {
    /// Create an engine with every group collapsed.
    pub fn new(top_level: Vec<Node>) -> Self {
        Self::with_tracker(top_level, ExpansionTracker::new())
    }

    /// Create an engine with a pre-populated expansion state.
    pub fn with_tracker(top_level: Vec<Node>, tracker: ExpansionTracker) -> Self {
        let rows = flatten(&top_level, &tracker);
        Self {
            top_level,
            tracker,
            rows,
            listeners: ChangeListeners::new(),
        }
    }

    // === Queries ===

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count of the table.
    pub fn column_count(&self) -> usize {
        Column::COUNT
    }

    /// Node shown at `(row, column)`.
    ///
    /// Every column of a row is backed by the same node; `column` is only
    /// validated.
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` / `ColumnOutOfRange` for an invalid address.
    pub fn value_at(&self, row: usize, column: usize) -> Result<&Node, ProjectionError> {
        Column::from_index(column)?;
        Ok(&self.row(row)?.node)
    }

    /// Text displayed in a cell: the name for column 0, the value for column 1.
    pub fn cell_text(&self, row: usize, column: usize) -> Result<Option<&str>, ProjectionError> {
        let column = Column::from_index(column)?;
        Ok(column.text_of(&self.row(row)?.node))
    }

    /// Visible row at `row`.
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` if `row >= row_count()`.
    pub fn row(&self, row: usize) -> Result<&Row, ProjectionError> {
        self.rows.get(row).ok_or(ProjectionError::RowOutOfRange {
            row,
            row_count: self.rows.len(),
        })
    }

    /// All visible rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Nesting depth of the node at `row`.
    pub fn depth(&self, row: usize) -> Result<usize, ProjectionError> {
        Ok(self.row(row)?.depth)
    }

    /// Whether the node at `row` is an expanded group.
    pub fn is_expanded(&self, row: usize) -> Result<bool, ProjectionError> {
        Ok(self.tracker.contains(&self.row(row)?.node))
    }

    /// First row whose node equals `node`.
    pub fn find_row(&self, node: &Node) -> Option<usize> {
        self.rows.iter().position(|r| &r.node == node)
    }

    /// Current top-level sequence.
    pub fn top_level(&self) -> &[Node] {
        &self.top_level
    }

    /// Current expansion state.
    pub fn tracker(&self) -> &ExpansionTracker {
        &self.tracker
    }

    // === Expansion ===

    /// Expand the group at `row`.
    ///
    /// Returns `Ok(true)` if the rows changed and listeners were notified.
    /// Expanding an expanded group or a leaf is a silent no-op.
    pub fn expand(&mut self, row: usize) -> Result<bool, ProjectionError> {
        let node = self.row(row)?.node.clone();
        let changed = self.tracker.expand(&node);
        Ok(self.commit_expansion(changed, "expand", row))
    }

    /// Collapse the group at `row`. Same contract as [`expand`](Self::expand).
    pub fn collapse(&mut self, row: usize) -> Result<bool, ProjectionError> {
        let node = self.row(row)?.node.clone();
        let changed = self.tracker.collapse(&node);
        Ok(self.commit_expansion(changed, "collapse", row))
    }

    /// Toggle the group at `row`. Same contract as [`expand`](Self::expand).
    pub fn toggle(&mut self, row: usize) -> Result<bool, ProjectionError> {
        let node = self.row(row)?.node.clone();
        let changed = self.tracker.toggle(&node);
        Ok(self.commit_expansion(changed, "toggle", row))
    }

    /// Expand every group of the current tree, at any depth.
    ///
    /// At most one notification fires.
    pub fn expand_all(&mut self) -> bool {
        let tracker = &mut self.tracker;
        let mut changed = false;
        for node in &self.top_level {
            node.walk(&mut |n| changed |= tracker.expand(n));
        }
        if changed {
            self.refresh(ChangeCause::Expansion);
        }
        changed
    }

    /// Collapse everything, including stale entries.
    ///
    /// At most one notification fires.
    pub fn collapse_all(&mut self) -> bool {
        let changed = self.tracker.clear();
        if changed {
            self.refresh(ChangeCause::Expansion);
        }
        changed
    }

    fn commit_expansion(&mut self, changed: bool, op: &'static str, row: usize) -> bool {
        if changed {
            debug!(op, row, "expansion changed");
            self.refresh(ChangeCause::Expansion);
        }
        changed
    }

    // === Source ===

    /// Replace the whole top-level sequence.
    ///
    /// The tracker is kept as is. Listeners are always notified, even when the
    /// new tree equals the old one.
    pub fn on_source_replaced(&mut self, top_level: Vec<Node>) {
        self.top_level = top_level;
        self.refresh(ChangeCause::SourceReplaced);
    }

    // === Listeners ===

    /// Register a listener, called after every actual projection change.
    pub fn add_change_listener(
        &mut self,
        listener: impl FnMut(&ChangeEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Rebuild rows, swap them in, then notify.
    fn refresh(&mut self, cause: ChangeCause) {
        let rows = flatten(&self.top_level, &self.tracker);
        self.rows = rows;
        let event = ChangeEvent {
            cause,
            row_count: self.rows.len(),
        };
        debug!(?cause, row_count = event.row_count, "rows rebuilt");
        self.listeners.notify(&event);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
