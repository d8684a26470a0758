//! Projection layer - tree to visible rows
//!
//! Turns a tree of nodes plus a set of expanded groups into the flat row list
//! a table widget displays, and keeps that list current.
//!
//! # Module Structure
//!
//! - `tracker`: ExpansionTracker - value-keyed set of expanded groups
//! - `flatten`: Row and the pure `flatten` function
//! - `listeners`: ChangeEvent, ChangeListeners - coarse change notifications
//! - `engine`: ProjectionEngine - owns tree, tracker and cached rows

pub mod engine;
pub mod flatten;
pub mod listeners;
pub mod tracker;

pub use engine::ProjectionEngine;
pub use flatten::{flatten, Row};
pub use listeners::{ChangeCause, ChangeEvent, ChangeListeners, ListenerId};
pub use tracker::ExpansionTracker;
