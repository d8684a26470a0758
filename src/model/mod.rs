//! Domain model types (pure).
//!
//! Nodes, columns and error types. Nothing here holds UI state.

pub mod column;
pub mod error;
pub mod node;

// Re-export for convenience
pub use column::Column;
pub use error::{EditError, ProjectionError, SourceError};
pub use node::{Node, NodeKind};
