//! Tree table: projection engine plus edit session.
//!
//! This is the widget-facing side. Every mutation goes through here so the
//! edit session is reconciled right after the engine has rebuilt its rows and
//! notified its listeners.

use super::edit_session::{EditCommit, EditState, Reconciliation};
use crate::model::{Column, EditError, Node, ProjectionError};
use crate::projection::{ChangeEvent, ListenerId, ProjectionEngine};

/// A projection engine paired with the edit it keeps pointed at the right row.
///
/// The engine is only reachable by shared reference, so no projection change
/// can skip reconciliation.
#[derive(Debug, Default)]
pub struct TreeTable {
    engine: ProjectionEngine,
    edit: EditState,
}

impl TreeTable {
    /// Create a table over `top_level` with every group collapsed.
    pub fn new(top_level: Vec<Node>) -> Self {
        Self::from_engine(ProjectionEngine::new(top_level))
    }

    /// Wrap an existing engine, keeping its expansion state and listeners.
    pub fn from_engine(engine: ProjectionEngine) -> Self {
        Self {
            engine,
            edit: EditState::NotEditing,
        }
    }

    /// Read-only view of the projection.
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.engine.row_count()
    }

    // === Source ===

    /// Replace the whole tree. Expansion and the active edit follow their
    /// nodes by value.
    pub fn update_to(&mut self, top_level: Vec<Node>) -> Reconciliation {
        self.engine.on_source_replaced(top_level);
        self.reconcile()
    }

    // === Expansion ===

    /// See [`ProjectionEngine::expand`]. The edit is reconciled on change.
    pub fn expand(&mut self, row: usize) -> Result<bool, ProjectionError> {
        let changed = self.engine.expand(row)?;
        self.reconcile_if(changed);
        Ok(changed)
    }

    /// See [`ProjectionEngine::collapse`]. The edit is reconciled on change.
    pub fn collapse(&mut self, row: usize) -> Result<bool, ProjectionError> {
        let changed = self.engine.collapse(row)?;
        self.reconcile_if(changed);
        Ok(changed)
    }

    /// See [`ProjectionEngine::toggle`]. The edit is reconciled on change.
    pub fn toggle(&mut self, row: usize) -> Result<bool, ProjectionError> {
        let changed = self.engine.toggle(row)?;
        self.reconcile_if(changed);
        Ok(changed)
    }

    /// Expand every group. The edit is reconciled on change.
    pub fn expand_all(&mut self) -> bool {
        let changed = self.engine.expand_all();
        self.reconcile_if(changed);
        changed
    }

    /// Collapse every group. The edit is reconciled on change.
    pub fn collapse_all(&mut self) -> bool {
        let changed = self.engine.collapse_all();
        self.reconcile_if(changed);
        changed
    }

    fn reconcile_if(&mut self, changed: bool) {
        if changed {
            self.reconcile();
        }
    }

    /// Re-resolve the active edit against the current rows.
    fn reconcile(&mut self) -> Reconciliation {
        self.edit.reconcile(self.engine.rows())
    }

    // === Listeners ===

    /// Register a projection change listener. Listeners run before the edit
    /// is reconciled.
    pub fn add_change_listener(
        &mut self,
        listener: impl FnMut(&ChangeEvent) + 'static,
    ) -> ListenerId {
        self.engine.add_change_listener(listener)
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.engine.remove_change_listener(id)
    }

    // === Editing ===

    /// Only the value column is editable: always for leaves, and for groups
    /// that carry a value.
    pub fn is_cell_editable(&self, row: usize, column: usize) -> Result<bool, ProjectionError> {
        let column = Column::from_index(column)?;
        let node = &self.engine.row(row)?.node;
        Ok(column == Column::Value && (node.is_leaf() || node.value().is_some()))
    }

    /// Start editing `(row, column)`, seeding the editor with the cell text.
    ///
    /// An edit already in progress is committed first and returned.
    ///
    /// # Errors
    ///
    /// - `EditError::Projection` for an invalid address
    /// - `EditError::NotEditable` for a read-only cell
    pub fn start_editing(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<Option<EditCommit>, EditError> {
        if !self.is_cell_editable(row, column)? {
            return Err(EditError::NotEditable { row, column });
        }
        let column = Column::from_index(column)?;
        let node = self.engine.row(row)?.node.clone();
        let text = column.text_of(&node).unwrap_or_default().to_string();
        Ok(self.edit.start(node, row, column, text))
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Row of the edited cell, or `None` when not editing.
    pub fn editing_row(&self) -> Option<usize> {
        self.edit.session().map(|s| s.row())
    }

    /// Column index of the edited cell, or `None` when not editing.
    pub fn editing_column(&self) -> Option<usize> {
        self.edit.session().map(|s| s.column().index())
    }

    /// Node being edited.
    pub fn editing_node(&self) -> Option<&Node> {
        self.edit.session().map(|s| s.node())
    }

    /// In-progress editor text.
    pub fn edit_text(&self) -> Option<&str> {
        self.edit.session().map(|s| s.text())
    }

    /// Returns `false` when not editing.
    pub fn set_edit_text(&mut self, text: impl Into<String>) -> bool {
        self.edit.set_text(text)
    }

    /// Finish the edit and hand back its result.
    pub fn commit_editing(&mut self) -> Option<EditCommit> {
        self.edit.commit()
    }

    /// Abandon the edit. Returns `false` when not editing.
    pub fn cancel_editing(&mut self) -> bool {
        self.edit.cancel()
    }
}
