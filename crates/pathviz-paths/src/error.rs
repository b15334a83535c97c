//! Errors reported by search algorithms.

use std::fmt;

use pathviz_core::GridError;

/// Errors that can occur while driving a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A grid operation was rejected.
    Grid(GridError),
    /// The algorithm has no grid yet; call `init` first.
    NoGrid,
    /// The grid has already been searched; `clear` or `init` it first.
    AlreadySolved,
    /// The result is only available after a successful search.
    NotSolved,
    /// The open set emptied without reaching the end.
    SearchExhausted,
    /// `pop` on an empty priority queue.
    EmptyQueue,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::NoGrid => f.write_str("grid is not initialized"),
            Self::AlreadySolved => f.write_str("grid is already solved"),
            Self::NotSolved => f.write_str("grid is not solved"),
            Self::SearchExhausted => f.write_str("no path to the end node"),
            Self::EmptyQueue => f.write_str("priority queue is empty"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
