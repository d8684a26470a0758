//! Edit session state machine.
//!
//! An edit remembers *which node* is being edited, not which row. After the
//! projection changes, the session looks the node up again in the new rows:
//!
//! ```text
//! NotEditing --start--> Editing(node, col)
//! Editing    --change, node still visible--> Editing(node, col)  (row rebound)
//! Editing    --commit | cancel | node gone--> NotEditing
//! ```

use crate::model::{Column, Node};
use crate::projection::Row;
use tracing::debug;

/// An active edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    node: Node,
    column: Column,
    /// Row the node occupied after the last reconciliation.
    row: usize,
    /// In-progress editor text.
    text: String,
}

impl EditSession {
    /// Node being edited, as it was when the edit started.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Column being edited.
    pub fn column(&self) -> Column {
        self.column
    }

    /// Row the node currently occupies.
    pub fn row(&self) -> usize {
        self.row
    }

    /// In-progress editor text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of a finished edit, handed to whoever applies the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    /// Node as it was when the edit started.
    pub node: Node,
    /// Column that was edited.
    pub column: Column,
    /// Row the node occupied when the edit was committed.
    pub row: usize,
    /// Final editor text.
    pub text: String,
}

/// Outcome of reconciling an edit against rebuilt rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nothing was being edited.
    Idle,
    /// The node is still at the same row.
    Unchanged,
    /// The node moved; the edit now points at `to`.
    Moved {
        /// Row before the change.
        from: usize,
        /// Row after the change.
        to: usize,
    },
    /// The node disappeared; the edit was cancelled.
    Cancelled,
}

/// Whether an edit is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No cell is being edited.
    #[default]
    NotEditing,
    /// A cell is being edited.
    Editing(EditSession),
}

impl EditState {
    /// Begin editing `node` at `(row, column)`, seeded with `text`.
    ///
    /// Returns the commit of the edit that was active before, if any.
    pub fn start(
        &mut self,
        node: Node,
        row: usize,
        column: Column,
        text: impl Into<String>,
    ) -> Option<EditCommit> {
        let previous = self.commit();
        *self = EditState::Editing(EditSession {
            node,
            column,
            row,
            text: text.into(),
        });
        previous
    }

    /// Active session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditState::NotEditing => None,
            EditState::Editing(session) => Some(session),
        }
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    /// Replace the in-progress text. Returns `false` when not editing.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match self {
            EditState::NotEditing => false,
            EditState::Editing(session) => {
                session.text = text.into();
                true
            }
        }
    }

    /// Finish the edit, yielding its result.
    pub fn commit(&mut self) -> Option<EditCommit> {
        match std::mem::take(self) {
            EditState::NotEditing => None,
            EditState::Editing(session) => Some(EditCommit {
                node: session.node,
                column: session.column,
                row: session.row,
                text: session.text,
            }),
        }
    }

    /// Abandon the edit. Returns `false` when not editing.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.is_editing();
        *self = EditState::NotEditing;
        was_editing
    }

    /// Rebind the edit to the first row holding an equal node, or cancel it.
    ///
    /// The column and the in-progress text are kept untouched.
    pub fn reconcile(&mut self, rows: &[Row]) -> Reconciliation {
        let EditState::Editing(session) = self else {
            return Reconciliation::Idle;
        };

        match rows.iter().position(|r| r.node == session.node) {
            Some(row) if row == session.row => Reconciliation::Unchanged,
            Some(row) => {
                let from = session.row;
                session.row = row;
                debug!(node = %session.node, from, to = row, "edit followed node");
                Reconciliation::Moved { from, to: row }
            }
            None => {
                debug!(node = %session.node, "edited node disappeared, cancelling edit");
                *self = EditState::NotEditing;
                Reconciliation::Cancelled
            }
        }
    }
}

#[cfg(test)]
#[path = "edit_session_tests.rs"]
mod tests;
