//! Integration tests: run the `treetable` binary against documents on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const BEFORE: &str = r#"[
    {"kind": "leaf", "name": "item1"},
    {"kind": "leaf", "name": "item2"},
    {"kind": "group", "name": "item3", "children": [
        {"kind": "leaf", "name": "child1"},
        {"kind": "leaf", "name": "child2"}
    ]},
    {"kind": "leaf", "name": "item4"}
]"#;

const AFTER: &str = r#"[
    {"kind": "leaf", "name": "item1"},
    {"kind": "leaf", "name": "itemX"},
    {"kind": "group", "name": "item3", "children": [
        {"kind": "leaf", "name": "child1"},
        {"kind": "leaf", "name": "child2"}
    ]},
    {"kind": "leaf", "name": "item5"},
    {"kind": "leaf", "name": "item4"}
]"#;

/// Scratch directory holding the documents and a config that keeps the log
/// file out of the user's state directory.
struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("treetable_cli_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let log = dir.join("treetable.log");
        fs::write(
            dir.join("config.toml"),
            format!("log_file_path = {:?}\n", log.display().to_string()),
        )
        .unwrap();
        Self { dir }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_treetable"))
            .arg("--config")
            .arg(self.dir.join("config.toml"))
            .args(args)
            .env_remove("TREETABLE_INDENT")
            .env_remove("TREETABLE_CONFIG")
            .current_dir(&self.dir)
            .output()
            .expect("Failed to execute binary")
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "binary failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_collapsed_tree() {
    let ws = Workspace::new("collapsed");
    let before = ws.write("before.json", BEFORE);

    let out = stdout(&ws.run(&[path_arg(&before)]));

    assert_eq!(out, "- item1\n- item2\n> item3\n- item4\n");
}

#[test]
fn expand_by_name_survives_replacement() {
    let ws = Workspace::new("expand_replace");
    let before = ws.write("before.json", BEFORE);
    let after = ws.write("after.json", AFTER);

    let out = stdout(&ws.run(&[
        path_arg(&before),
        "--expand",
        "item3",
        "--replace",
        path_arg(&after),
    ]));

    assert_eq!(
        out,
        "- item1\n- itemX\nv item3\n  - child1\n  - child2\n- item5\n- item4\n"
    );
}

#[test]
fn edit_moves_to_new_row_after_replacement() {
    let ws = Workspace::new("edit_moves");
    let before = ws.write("before.json", BEFORE);
    let after = ws.write("after.json", AFTER);

    let out = stdout(&ws.run(&[path_arg(&before), "--edit", "3", "-r", path_arg(&after)]));

    assert!(
        out.ends_with("editing: row 4, column 1\n"),
        "unexpected output: {out}"
    );
}

#[test]
fn edit_is_cancelled_when_node_disappears() {
    let ws = Workspace::new("edit_cancelled");
    let before = ws.write("before.json", BEFORE);
    let after = ws.write("after.json", r#"[{"kind": "leaf", "name": "item1"}]"#);

    let out = stdout(&ws.run(&[path_arg(&before), "--edit", "3", "-r", path_arg(&after)]));

    assert_eq!(out, "- item1\nediting: cancelled\n");
}

#[test]
fn expand_all_and_indent_flags() {
    let ws = Workspace::new("expand_all");
    let before = ws.write("before.json", BEFORE);

    let out = stdout(&ws.run(&[path_arg(&before), "--expand-all", "--indent", "4"]));

    assert_eq!(
        out,
        "- item1\n- item2\nv item3\n    - child1\n    - child2\n- item4\n"
    );
}

#[test]
fn missing_file_fails() {
    let ws = Workspace::new("missing");

    let output = ws.run(&["does-not-exist.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.json"));
}

#[test]
fn editing_a_group_row_fails() {
    let ws = Workspace::new("edit_group");
    let before = ws.write("before.json", BEFORE);

    let output = ws.run(&[path_arg(&before), "--edit", "2"]);

    assert!(!output.status.success());
}
