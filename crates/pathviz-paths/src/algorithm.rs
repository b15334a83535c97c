//! The [`PathAlgorithm`] capability set shared by every search variant.

use pathviz_core::{Grid, Movement, Point};

use crate::error::SearchError;
use crate::parents::ParentMap;
use crate::snapshot::Snapshot;

/// Lifecycle of a search instance.
///
/// `Uninitialized → Ready → Solved | Failed`. `Solved` and `Failed` are
/// terminal until `clear` or `init`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    #[default]
    Uninitialized,
    Ready,
    Solved,
    Failed,
}

impl SearchStatus {
    /// Whether a search has run (successfully or not) on the current grid.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

/// Counters from the last search.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes whose neighbours were fully relaxed; equals snapshots recorded.
    pub rounds: usize,
    /// Successful cost improvements.
    pub relaxations: usize,
    /// Cost of the path to the end, once solved.
    pub cost: Option<f64>,
}

/// A grid search with replayable history.
///
/// Every method takes `&self`: implementations serialize calls with an
/// internal lock, so one instance can be shared between callers.
pub trait PathAlgorithm: Send + Sync {
    /// Algorithm name, e.g. `"A*"`.
    fn name(&self) -> &'static str;

    /// Replace the grid with a fresh `width × height` one and reset all
    /// search state.
    fn init(&self, width: i32, height: i32) -> Result<(), SearchError>;

    /// Rebuild an empty grid of the current size and reset all search state.
    fn clear(&self) -> Result<(), SearchError>;

    /// Run the search to completion.
    fn find_path(&self) -> Result<(), SearchError>;

    /// Deep copy of the current grid.
    fn grid(&self) -> Result<Grid, SearchError>;

    /// Write back a full grid of the same dimensions. The grid must pass
    /// [`Grid::validate`].
    fn replace_grid(&self, grid: Grid) -> Result<(), SearchError>;

    /// Next snapshot of a finished search, or `None` once drained.
    fn snapshot(&self) -> Result<Option<Snapshot>, SearchError>;

    /// Parent map of a solved search.
    fn path(&self) -> Result<ParentMap, SearchError>;

    fn set_start(&self, p: Point) -> Result<(), SearchError>;

    fn set_end(&self, p: Point) -> Result<(), SearchError>;

    fn set_wall(&self, p: Point, wall: bool) -> Result<(), SearchError>;

    fn set_movement(&self, movement: Movement) -> Result<(), SearchError>;

    fn start(&self) -> Result<Point, SearchError>;

    fn end(&self) -> Result<Point, SearchError>;

    /// `(width, height)` of the current grid.
    fn dimensions(&self) -> Result<(i32, i32), SearchError>;

    fn status(&self) -> SearchStatus;

    fn stats(&self) -> SearchStats;
}
