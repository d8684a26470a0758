//! treetable
//!
//! Projects a tree of leaves and groups into the flat row list of a table
//! widget, and keeps two pieces of transient state correct across wholesale
//! tree replacement: which groups are expanded, and which cell is being
//! edited. Both are keyed on node *value*, so no row index or node handle has
//! to survive a rebuild.
//!
//! Pure core (`model`, `projection`, `table`) with a thin shell (`source`,
//! `config`, `logging`, `render`) used by the `treetable` binary.

pub mod config;
pub mod logging;
pub mod model;
pub mod projection;
pub mod render;
pub mod source;
pub mod table;
