//! [`Search`]: the relaxation loop shared by Dijkstra and A*.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use pathviz_core::{Grid, Movement, Point};

use crate::algorithm::{PathAlgorithm, SearchStats, SearchStatus};
use crate::distance::step_cost;
use crate::error::SearchError;
use crate::parents::ParentMap;
use crate::queue::IndexedQueue;
use crate::snapshot::{Snapshot, SnapshotLog};
use crate::traits::Estimator;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Everything one search instance owns. Guarded by the instance lock.
#[derive(Default)]
struct State {
    grid: Option<Grid>,
    status: SearchStatus,
    open: IndexedQueue,
    closed: Vec<bool>,
    cost: Vec<f64>,
    parents: ParentMap,
    snapshots: SnapshotLog,
    stats: SearchStats,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl State {
    fn grid(&self) -> Result<&Grid, SearchError> {
        self.grid.as_ref().ok_or(SearchError::NoGrid)
    }

    /// The grid, if it may still be edited.
    fn grid_mut(&mut self) -> Result<&mut Grid, SearchError> {
        let grid = self.grid.as_mut().ok_or(SearchError::NoGrid)?;
        if self.status.is_finished() {
            return Err(SearchError::AlreadySolved);
        }
        Ok(grid)
    }

    /// Install `grid` and drop every search artifact.
    fn reset(&mut self, grid: Grid) {
        let len = grid.len();
        self.open = IndexedQueue::with_capacity(len);
        self.closed.clear();
        self.closed.resize(len, false);
        self.cost.clear();
        self.cost.resize(len, f64::INFINITY);
        self.parents.clear();
        self.snapshots.clear();
        self.stats = SearchStats::default();
        self.grid = Some(grid);
        self.status = SearchStatus::Ready;
    }

    fn run<E: Estimator>(&mut self, estimator: &E) -> Result<(), SearchError> {
        let State {
            grid,
            status,
            open,
            closed,
            cost,
            parents,
            snapshots,
            stats,
            nbuf,
        } = self;
        let grid = grid.as_mut().ok_or(SearchError::NoGrid)?;
        if status.is_finished() {
            return Err(SearchError::AlreadySolved);
        }

        let start = grid.start_idx();
        let goal_idx = grid.end_idx();
        let goal = grid.end();
        debug!(
            "{}: searching {}x{} grid from {} to {}",
            E::NAME,
            grid.width(),
            grid.height(),
            grid.start(),
            goal
        );

        cost[start] = 0.0;
        open.push(start, estimator.estimate(grid.start(), goal));

        while !open.is_empty() {
            let (ci, _) = open.pop()?;
            if closed[ci] {
                continue;
            }
            if ci == goal_idx {
                *status = SearchStatus::Solved;
                stats.cost = Some(cost[ci]);
                debug!(
                    "{}: solved in {} rounds, {} relaxations, cost {:.3}",
                    E::NAME,
                    stats.rounds,
                    stats.relaxations,
                    cost[ci]
                );
                return Ok(());
            }

            closed[ci] = true;
            let current = grid.node(ci);
            if !current.is_start() && !current.is_end() {
                grid.set_visited(ci, true);
            }
            let current = grid.node(ci);
            let current_cost = cost[ci];

            nbuf.clear();
            grid.neighbors(current.pos, nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let neighbor = grid.node(ni);
                if closed[ni] || neighbor.is_wall() {
                    continue;
                }
                let tentative = current_cost + step_cost(current.pos, np);
                if tentative >= cost[ni] {
                    continue;
                }

                cost[ni] = tentative;
                parents.insert(current, neighbor);
                stats.relaxations += 1;

                let priority = tentative + estimator.estimate(np, goal);
                if open.contains(ni) {
                    open.update_priority(ni, priority);
                } else {
                    open.push(ni, priority);
                }
            }

            snapshots.record(grid);
            stats.rounds += 1;
            trace!(
                "{}: round {} expanded {}, open set {}",
                E::NAME,
                stats.rounds,
                current.pos,
                open.len()
            );
        }

        *status = SearchStatus::Failed;
        debug!(
            "{}: open set exhausted after {} rounds",
            E::NAME,
            stats.rounds
        );
        Err(SearchError::SearchExhausted)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A best-first grid search parameterized by its [`Estimator`].
///
/// The open-set priority is `cost + estimator.estimate(node, end)`; both
/// variants stop as soon as the end node is popped. After each node's
/// neighbours have been relaxed, a snapshot of the grid is appended to the
/// replay log.
pub struct Search<E: Estimator> {
    estimator: E,
    state: Mutex<State>,
}

impl<E: Estimator + Default> Search<E> {
    /// Create an uninitialized search; call [`PathAlgorithm::init`] next.
    pub fn new() -> Self {
        Self::with_estimator(E::default())
    }
}

impl<E: Estimator + Default> Default for Search<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator> Search<E> {
    /// Create an uninitialized search using `estimator`.
    pub fn with_estimator(estimator: E) -> Self {
        Self {
            estimator,
            state: Mutex::new(State::default()),
        }
    }

    /// Lock the instance state. Every mutation completes before the guard is
    /// released, so a poisoned lock still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Estimator> PathAlgorithm for Search<E> {
    fn name(&self) -> &'static str {
        E::NAME
    }

    fn init(&self, width: i32, height: i32) -> Result<(), SearchError> {
        let mut st = self.lock();
        let mut grid = Grid::new(width, height)?;
        if let Some(old) = &st.grid {
            grid.set_movement(old.movement());
        }
        debug!("{}: new {}x{} grid", E::NAME, width, height);
        st.reset(grid);
        Ok(())
    }

    fn clear(&self) -> Result<(), SearchError> {
        let mut st = self.lock();
        let old = st.grid()?;
        let mut grid = Grid::new(old.width(), old.height())?;
        grid.set_movement(old.movement());
        st.reset(grid);
        Ok(())
    }

    fn find_path(&self) -> Result<(), SearchError> {
        self.lock().run(&self.estimator)
    }

    fn grid(&self) -> Result<Grid, SearchError> {
        self.lock().grid().cloned()
    }

    fn replace_grid(&self, grid: Grid) -> Result<(), SearchError> {
        grid.validate()?;
        let mut st = self.lock();
        let current = st.grid_mut()?;
        if (current.width(), current.height()) != (grid.width(), grid.height()) {
            return Err(pathviz_core::GridError::InvalidDimensions {
                width: grid.width(),
                height: grid.height(),
            }
            .into());
        }
        *current = grid;
        Ok(())
    }

    fn snapshot(&self) -> Result<Option<Snapshot>, SearchError> {
        let mut st = self.lock();
        st.grid()?;
        if !st.status.is_finished() {
            return Err(SearchError::NotSolved);
        }
        Ok(st.snapshots.next())
    }

    fn path(&self) -> Result<ParentMap, SearchError> {
        let st = self.lock();
        st.grid()?;
        if st.status != SearchStatus::Solved {
            return Err(SearchError::NotSolved);
        }
        Ok(st.parents.clone())
    }

    fn set_start(&self, p: Point) -> Result<(), SearchError> {
        Ok(self.lock().grid_mut()?.set_start(p)?)
    }

    fn set_end(&self, p: Point) -> Result<(), SearchError> {
        Ok(self.lock().grid_mut()?.set_end(p)?)
    }

    fn set_wall(&self, p: Point, wall: bool) -> Result<(), SearchError> {
        Ok(self.lock().grid_mut()?.set_wall(p, wall)?)
    }

    fn set_movement(&self, movement: Movement) -> Result<(), SearchError> {
        self.lock().grid_mut()?.set_movement(movement);
        Ok(())
    }

    fn start(&self) -> Result<Point, SearchError> {
        Ok(self.lock().grid()?.start())
    }

    fn end(&self) -> Result<Point, SearchError> {
        Ok(self.lock().grid()?.end())
    }

    fn dimensions(&self) -> Result<(i32, i32), SearchError> {
        let st = self.lock();
        let g = st.grid()?;
        Ok((g.width(), g.height()))
    }

    fn status(&self) -> SearchStatus {
        self.lock().status
    }

    fn stats(&self) -> SearchStats {
        self.lock().stats
    }
}
