//! treetable - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use treetable::render::{render_rows, RenderOptions};
use treetable::source::FileSource;
use treetable::table::TreeTable;

/// treetable - print a tree document as an expandable table
#[derive(Parser, Debug)]
#[command(name = "treetable")]
#[command(version)]
#[command(about = "Flatten a JSON tree document into table rows")]
pub struct Args {
    /// Path to JSON tree document
    pub file: PathBuf,

    /// Replace the tree with this document after expanding (expansion and edit follow by value)
    #[arg(short, long)]
    pub replace: Option<PathBuf>,

    /// Expand the first visible group with this name (repeatable, applied in order)
    #[arg(short, long = "expand", value_name = "NAME")]
    pub expand: Vec<String>,

    /// Expand every group
    #[arg(long)]
    pub expand_all: bool,

    /// Start editing the value cell of this row before the replacement
    #[arg(long, value_name = "ROW")]
    pub edit: Option<usize>,

    /// Spaces per nesting level
    #[arg(long)]
    pub indent: Option<usize>,

    /// Hide the value column
    #[arg(long)]
    pub no_values: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Expand the first visible collapsed group named `name`.
///
/// Returns `false` if no such group is visible.
fn expand_named(table: &mut TreeTable, name: &str) -> bool {
    let engine = table.engine();
    let target = engine.rows().iter().position(|row| {
        row.node.is_group() && row.node.name() == name && !engine.tracker().contains(&row.node)
    });
    match target {
        Some(row) => table.expand(row).unwrap_or(false),
        None => false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = treetable::config::load_config_with_precedence(args.config.clone())?;
        let merged = treetable::config::merge_config(config_file);
        let with_env = treetable::config::apply_env_overrides(merged);

        let expand_all_override = if args.expand_all { Some(true) } else { None };
        let show_values_override = if args.no_values { Some(false) } else { None };

        treetable::config::apply_cli_overrides(
            with_env,
            args.indent,
            show_values_override,
            expand_all_override,
        )
    };

    // Logging is best effort; the table still prints without it.
    if let Err(e) = treetable::logging::init(&config.log_file_path) {
        eprintln!("treetable: logging disabled: {e}");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let mut table = TreeTable::new(FileSource::load(&args.file)?.into_nodes());

    if config.expand_all {
        table.expand_all();
    }
    for name in &args.expand {
        if !expand_named(&mut table, name) {
            warn!(name = %name, "no collapsed group with this name is visible");
        }
    }

    if let Some(row) = args.edit {
        table.start_editing(row, treetable::model::Column::Value.index())?;
    }

    if let Some(path) = &args.replace {
        let outcome = table.update_to(FileSource::load(path)?.into_nodes());
        info!(?outcome, rows = table.row_count(), "tree replaced");
    }

    print!("{}", render_rows(table.engine(), &RenderOptions::from(&config)));

    if args.edit.is_some() {
        match (table.editing_row(), table.editing_column()) {
            (Some(row), Some(column)) => println!("editing: row {row}, column {column}"),
            _ => println!("editing: cancelled"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use treetable::model::Node;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["treetable", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["treetable", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_file_is_required() {
        let result = Args::try_parse_from(["treetable"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["treetable", "tree.json"]);
        assert_eq!(args.file, PathBuf::from("tree.json"));
        assert_eq!(args.replace, None);
        assert!(args.expand.is_empty());
        assert!(!args.expand_all);
        assert_eq!(args.edit, None);
        assert_eq!(args.indent, None);
        assert!(!args.no_values);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_expand_is_repeatable() {
        let args = Args::parse_from(["treetable", "t.json", "-e", "a", "--expand", "b"]);
        assert_eq!(args.expand, ["a", "b"]);
    }

    #[test]
    fn test_edit_rejects_negative() {
        let result = Args::try_parse_from(["treetable", "t.json", "--edit", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "treetable",
            "before.json",
            "-r",
            "after.json",
            "--edit",
            "3",
            "--indent",
            "4",
            "--no-values",
        ]);
        assert_eq!(args.replace, Some(PathBuf::from("after.json")));
        assert_eq!(args.edit, Some(3));
        assert_eq!(args.indent, Some(4));
        assert!(args.no_values);
    }

    #[test]
    fn expand_named_reaches_nested_groups_in_order() {
        let mut table = TreeTable::new(vec![Node::group(
            "outer",
            [Node::group("inner", [Node::leaf("deep")])],
        )]);

        assert!(expand_named(&mut table, "outer"));
        assert!(expand_named(&mut table, "inner"));
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn expand_named_skips_unknown_and_leaves() {
        let mut table = TreeTable::new(vec![Node::leaf("item1")]);
        assert!(!expand_named(&mut table, "item1"));
        assert!(!expand_named(&mut table, "missing"));
    }
}
