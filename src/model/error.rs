//! Error types for treetable.
//!
//! Each concern gets its own `thiserror` enum so callers can match on the
//! failure they care about and compose the rest with `?`.
//!
//! # Error Hierarchy
//!
//! - [`ProjectionError`] - Row/column addressing outside the current projection
//! - [`EditError`] - Refused edit requests (wraps [`ProjectionError`])
//! - [`SourceError`] - Loading a tree document from disk
//!
//! Configuration and logging failures live next to their modules
//! (`config::ConfigError`, `logging::LoggingError`).
//!
//! # Recovery Strategy
//!
//! Addressing errors are programming errors on the caller's side: they are
//! returned before any state is touched, so the projection stays consistent.
//! An edit whose node disappears after a rebuild is *not* an error; the edit
//! session simply ends.

use std::path::PathBuf;
use thiserror::Error;

/// A row or column index does not address a cell of the current projection.
///
/// Indices are never clamped. The projection is left exactly as it was.
///
/// # Examples
///
/// ```
/// use treetable::model::error::ProjectionError;
///
/// let err = ProjectionError::RowOutOfRange { row: 7, row_count: 3 };
/// assert!(err.to_string().contains("row 7"));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// Row index is outside `[0, row_count)`.
    #[error("row {row} is out of range (row count {row_count})")]
    RowOutOfRange {
        /// The requested row.
        row: usize,
        /// Row count at the time of the request.
        row_count: usize,
    },

    /// Column index is outside `[0, column_count)`.
    #[error("column {column} is out of range (column count {column_count})")]
    ColumnOutOfRange {
        /// The requested column.
        column: usize,
        /// Number of columns in the table.
        column_count: usize,
    },
}

/// An edit could not be started.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The cell address is invalid.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The cell exists but does not accept edits.
    ///
    /// Only the value column is editable: always for leaves, and for groups
    /// only when they carry a value.
    #[error("cell at row {row}, column {column} is not editable")]
    NotEditable {
        /// Row of the refused cell.
        row: usize,
        /// Column of the refused cell.
        column: usize,
    },
}

/// Errors encountered when loading a tree document.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use treetable::model::error::SourceError;
///
/// let err = SourceError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.json"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.json"));
/// ```
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The document exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a JSON array of nodes.
    ///
    /// `reason` carries the `serde_json` message (with line/column) rather
    /// than the error value itself.
    #[error("Invalid tree document {}: {reason}", path.display())]
    Parse {
        /// Path of the malformed document.
        path: PathBuf,
        /// Parser error details.
        reason: String,
    },
}
