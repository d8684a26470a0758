//! Plain-text rendering of the visible rows.
//!
//! One line per row: indentation by depth, an expansion marker, the name, and
//! (optionally) the value aligned in a second column. Widths are measured in
//! terminal cells, so wide characters line up.

use crate::config::ResolvedConfig;
use crate::model::Node;
use crate::projection::{ExpansionTracker, ProjectionEngine, Row};
use unicode_width::UnicodeWidthStr;

const EXPANDED_MARKER: &str = "v ";
const COLLAPSED_MARKER: &str = "> ";
const LEAF_MARKER: &str = "- ";

/// Gap between the name column and the value column.
const COLUMN_GAP: usize = 2;

/// Layout knobs for [`render_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Render the value column.
    pub show_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_values: true,
        }
    }
}

impl From<&ResolvedConfig> for RenderOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            indent_width: config.indent_width,
            show_values: config.show_values,
        }
    }
}

fn marker(node: &Node, tracker: &ExpansionTracker) -> &'static str {
    if !node.is_group() {
        LEAF_MARKER
    } else if tracker.contains(node) {
        EXPANDED_MARKER
    } else {
        COLLAPSED_MARKER
    }
}

fn name_cell(row: &Row, tracker: &ExpansionTracker, indent_width: usize) -> String {
    format!(
        "{:indent$}{}{}",
        "",
        marker(&row.node, tracker),
        row.node.name(),
        indent = row.depth * indent_width
    )
}

/// Render every visible row of `engine`, one `\n`-terminated line each.
pub fn render_rows(engine: &ProjectionEngine, options: &RenderOptions) -> String {
    let tracker = engine.tracker();
    let names: Vec<String> = engine
        .rows()
        .iter()
        .map(|row| name_cell(row, tracker, options.indent_width))
        .collect();
    let name_width = names.iter().map(|n| n.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, row) in names.iter().zip(engine.rows()) {
        out.push_str(name);
        if let Some(value) = row.node.value().filter(|_| options.show_values) {
            let padding = name_width - name.width() + COLUMN_GAP;
            out.extend(std::iter::repeat(' ').take(padding));
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}
