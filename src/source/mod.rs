//! Tree document sources.
//!
//! A tree document is a JSON array of top-level nodes:
//!
//! ```json
//! [
//!   {"kind": "leaf", "name": "text", "value": "Hello"},
//!   {"kind": "group", "name": "padding", "children": [
//!     {"kind": "leaf", "name": "top", "value": "4dp"}
//!   ]}
//! ]
//! ```
//!
//! Documents are parsed at the boundary; the rest of the crate only sees
//! [`Node`](crate::model::Node) values.

use crate::model::{Node, SourceError};
use std::path::Path;

pub mod file;

pub use file::FileSource;

/// Parse a tree document.
///
/// `origin` is only used for error reporting.
///
/// # Errors
///
/// Returns `SourceError::Parse` if `contents` is not a JSON array of nodes.
pub fn parse_document(contents: &str, origin: &Path) -> Result<Vec<Node>, SourceError> {
    serde_json::from_str(contents).map_err(|e| SourceError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leaves_and_groups() {
        let doc = r#"[
            {"kind": "leaf", "name": "item1"},
            {"kind": "group", "name": "item3", "children": [
                {"kind": "leaf", "name": "child1"},
                {"kind": "leaf", "name": "child2"}
            ]}
        ]"#;

        let nodes = parse_document(doc, Path::new("inline.json")).unwrap();

        assert_eq!(
            nodes,
            vec![
                Node::leaf("item1"),
                Node::group("item3", [Node::leaf("child1"), Node::leaf("child2")]),
            ]
        );
    }

    #[test]
    fn group_children_default_to_empty() {
        let nodes = parse_document(r#"[{"kind":"group","name":"g"}]"#, Path::new("x")).unwrap();
        assert!(nodes[0].is_group());
        assert!(nodes[0].children().is_empty());
    }

    #[test]
    fn empty_array_is_empty_tree() {
        let nodes = parse_document("[]", Path::new("x")).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let err = parse_document(r#"[{"kind":"folder","name":"f"}]"#, Path::new("bad.json"))
            .unwrap_err();
        assert!(matches!(err, SourceError::Parse { ref path, .. } if path == Path::new("bad.json")));
    }

    #[test]
    fn top_level_object_is_parse_error() {
        let err = parse_document(r#"{"kind":"leaf","name":"a"}"#, Path::new("x")).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
