//! Table columns.

use super::error::ProjectionError;
use super::Node;

/// A column of the tree table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Node name; the primary display value.
    Name,
    /// Node value.
    Value,
}

impl Column {
    /// Number of columns in the table.
    pub const COUNT: usize = 2;

    /// All columns in display order.
    pub const ALL: [Column; Self::COUNT] = [Column::Name, Column::Value];

    /// Resolve a 0-based column index.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::ColumnOutOfRange` for `index >= Column::COUNT`.
    pub fn from_index(index: usize) -> Result<Self, ProjectionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ProjectionError::ColumnOutOfRange {
                column: index,
                column_count: Self::COUNT,
            })
    }

    /// Zero-based column index.
    pub fn index(self) -> usize {
        match self {
            Column::Name => 0,
            Column::Value => 1,
        }
    }

    /// Text shown for `node` in this column.
    pub fn text_of(self, node: &Node) -> Option<&str> {
        match self {
            Column::Name => Some(node.name()),
            Column::Value => node.value(),
        }
    }
}
