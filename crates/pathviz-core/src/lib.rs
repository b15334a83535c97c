//! **pathviz-core**: grid model for replayable shortest-path search.
//!
//! This crate provides the foundational types used across the *pathviz*
//! workspace: geometry primitives, flagged nodes, and the obstacle [`Grid`]
//! with its start/end markers and movement mode.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::{GridError, MIN_SIDE};
pub use geom::{Point, Range};
pub use grid::{Grid, Movement};
pub use node::{Flags, Node};
