//! Table layer - the widget-side collaborator of the projection engine.
//!
//! - `edit_session`: EditState - which node/column is being edited
//! - `tree_table`: TreeTable - engine + edit state, reconciled on every change

pub mod edit_session;
pub mod tree_table;

pub use edit_session::{EditCommit, EditSession, EditState, Reconciliation};
pub use tree_table::TreeTable;
