//! Session configuration.

use std::fmt;

use pathviz_core::Movement;

use crate::error::SessionError;

/// Ids of the built-in algorithms in the default registry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum AlgorithmId {
    #[default]
    Astar = 0,
    Dijkstra = 1,
}

impl AlgorithmId {
    pub const ALL: [Self; 2] = [Self::Astar, Self::Dijkstra];
}

impl TryFrom<u32> for AlgorithmId {
    type Error = SessionError;

    fn try_from(id: u32) -> Result<Self, SessionError> {
        match id {
            0 => Ok(Self::Astar),
            1 => Ok(Self::Dijkstra),
            _ => Err(SessionError::UnknownAlgorithm(id)),
        }
    }
}

impl From<AlgorithmId> for u32 {
    fn from(id: AlgorithmId) -> u32 {
        id as u32
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Astar => f.write_str("A*"),
            Self::Dijkstra => f.write_str("Dijkstra"),
        }
    }
}

/// Initial state of a [`Session`](crate::Session).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub algorithm: AlgorithmId,
    pub width: i32,
    pub height: i32,
    pub movement: Movement,
    /// Seed for maze generation. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmId::Astar,
            width: 20,
            height: 20,
            movement: Movement::Orthogonal,
            seed: None,
        }
    }
}
