//! Per-round grid snapshots for replaying a finished search.

use std::collections::VecDeque;

use pathviz_core::{Grid, Node, Point};

/// A frozen deep copy of the grid taken after one relaxation round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    round: usize,
    grid: Grid,
}

impl Snapshot {
    /// Zero-based relaxation round this snapshot was taken after.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    /// The copied grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Node> {
        self.grid.at(p)
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        self.grid.nodes()
    }

    /// Number of nodes flagged visited at this point of the search.
    pub fn visited_count(&self) -> usize {
        self.grid.count_fn(|n| n.is_visited())
    }
}

/// Append-only FIFO of [`Snapshot`]s, consumed oldest-first.
///
/// Reading is destructive: each snapshot is handed out exactly once.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLog {
    entries: VecDeque<Snapshot>,
    recorded: usize,
}

impl SnapshotLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a deep copy of `grid`.
    pub fn record(&mut self, grid: &Grid) {
        self.entries.push_back(Snapshot {
            round: self.recorded,
            grid: grid.clone(),
        });
        self.recorded += 1;
    }

    /// Remove and return the oldest snapshot, or `None` once drained.
    pub fn next(&mut self) -> Option<Snapshot> {
        self.entries.pop_front()
    }

    /// Snapshots still waiting to be read.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total snapshots recorded since the last [`clear`](Self::clear),
    /// including the ones already read.
    #[inline]
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recorded = 0;
    }
}
