//! Errors reported at the session boundary.

use std::fmt;

use pathviz_core::GridError;
use pathviz_paths::SearchError;

/// Errors from [`Session`](crate::Session) commands and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The active algorithm rejected the call.
    Search(SearchError),
    /// No constructor is registered under this id.
    UnknownAlgorithm(u32),
    /// No algorithm has been selected yet.
    NoActiveAlgorithm,
    /// A caller-provided buffer does not match the grid's cell count.
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::UnknownAlgorithm(id) => write!(f, "unknown algorithm id {id}"),
            Self::NoActiveAlgorithm => f.write_str("no algorithm selected"),
            Self::BufferSize { expected, actual } => {
                write!(f, "buffer holds {actual} bytes, grid has {expected} cells")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Search(SearchError::Grid(e))
    }
}
