//! Tests for the edit session state machine.

use super::*;
use crate::projection::{flatten, ExpansionTracker};

fn rows_of(nodes: &[Node]) -> Vec<Row> {
    flatten(nodes, &ExpansionTracker::new())
}

fn editing_item4() -> EditState {
    let mut state = EditState::default();
    state.start(Node::leaf("item4"), 3, Column::Value, "");
    state
}

#[test]
fn default_is_not_editing() {
    let state = EditState::default();
    assert!(!state.is_editing());
    assert!(state.session().is_none());
}

#[test]
fn reconcile_when_idle_does_nothing() {
    let mut state = EditState::default();
    assert_eq!(
        state.reconcile(&rows_of(&[Node::leaf("a")])),
        Reconciliation::Idle
    );
}

#[test]
fn reconcile_moves_edit_to_new_row_of_node() {
    let mut state = editing_item4();
    state.set_text("draft");

    let rows = rows_of(&[
        Node::leaf("item1"),
        Node::leaf("itemX"),
        Node::leaf("item3"),
        Node::leaf("item5"),
        Node::leaf("item4"),
    ]);

    assert_eq!(
        state.reconcile(&rows),
        Reconciliation::Moved { from: 3, to: 4 }
    );
    let session = state.session().expect("edit should survive");
    assert_eq!(session.row(), 4);
    assert_eq!(session.column(), Column::Value);
    assert_eq!(session.text(), "draft", "In-progress text must be kept");
}

#[test]
fn reconcile_keeps_row_when_node_did_not_move() {
    let mut state = editing_item4();
    let rows = rows_of(&[
        Node::leaf("a"),
        Node::leaf("b"),
        Node::leaf("c"),
        Node::leaf("item4"),
    ]);
    assert_eq!(state.reconcile(&rows), Reconciliation::Unchanged);
    assert_eq!(state.session().map(EditSession::row), Some(3));
}

#[test]
fn reconcile_cancels_when_node_is_gone() {
    let mut state = editing_item4();
    let rows = rows_of(&[Node::leaf("item1")]);
    assert_eq!(state.reconcile(&rows), Reconciliation::Cancelled);
    assert_eq!(state, EditState::NotEditing);
}

#[test]
fn reconcile_matches_by_value_not_name() {
    let mut state = EditState::default();
    state.start(Node::leaf("w").with_value("1"), 0, Column::Value, "1");

    // Same name, different value: not the node being edited.
    let rows = rows_of(&[Node::leaf("w").with_value("2")]);
    assert_eq!(state.reconcile(&rows), Reconciliation::Cancelled);
}

#[test]
fn duplicate_nodes_bind_to_first_match() {
    let mut state = EditState::default();
    state.start(Node::leaf("dup"), 2, Column::Value, "");
    let rows = rows_of(&[Node::leaf("dup"), Node::leaf("x"), Node::leaf("dup")]);
    assert_eq!(state.reconcile(&rows), Reconciliation::Moved { from: 2, to: 0 });
}

#[test]
fn commit_returns_result_and_ends_session() {
    let mut state = editing_item4();
    state.set_text("42");

    let commit = state.commit().expect("should commit active edit");

    assert_eq!(commit.node, Node::leaf("item4"));
    assert_eq!(commit.column, Column::Value);
    assert_eq!(commit.row, 3);
    assert_eq!(commit.text, "42");
    assert!(!state.is_editing());
    assert!(state.commit().is_none(), "Nothing left to commit");
}

#[test]
fn cancel_reports_whether_an_edit_was_active() {
    let mut state = editing_item4();
    assert!(state.cancel());
    assert!(!state.cancel());
}

#[test]
fn starting_a_new_edit_commits_the_previous_one() {
    let mut state = editing_item4();
    state.set_text("old");

    let previous = state.start(Node::leaf("item1"), 0, Column::Value, "");

    assert_eq!(previous.map(|c| c.text), Some("old".to_string()));
    assert_eq!(state.session().map(|s| s.node().name()), Some("item1"));
}

#[test]
fn set_text_without_edit_is_rejected() {
    let mut state = EditState::default();
    assert!(!state.set_text("ignored"));
}
