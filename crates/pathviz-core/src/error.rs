//! Errors raised by [`Grid`](crate::Grid) construction and mutation.

use std::fmt;

use crate::geom::Point;

/// Smallest accepted grid side.
pub const MIN_SIDE: i32 = 10;

/// Errors that can occur when building or editing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A side is shorter than [`MIN_SIDE`].
    InvalidDimensions { width: i32, height: i32 },
    /// The cell is out of bounds or conflicts with a wall or marker.
    InvalidLocation(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "invalid grid dimensions {width}x{height}: each side must be at least {MIN_SIDE}"
            ),
            Self::InvalidLocation(p) => write!(f, "invalid location {p}"),
        }
    }
}

impl std::error::Error for GridError {}
