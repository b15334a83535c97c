//! The [`Session`] facade: an algorithm registry plus one active instance.

use std::collections::HashMap;

use log::debug;
use pathviz_core::{Grid, Movement, Node, Point};
use pathviz_maze::MazeGen;
use pathviz_paths::{
    Astar, Dijkstra, ParentMap, PathAlgorithm, SearchError, SearchStats, SearchStatus, Snapshot,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{AlgorithmId, SessionConfig};
use crate::encode::{encode_grid, encode_path, pack_point};
use crate::error::SessionError;

/// Builds a fresh, uninitialized algorithm instance.
pub type Constructor = fn() -> Box<dyn PathAlgorithm>;

fn astar() -> Box<dyn PathAlgorithm> {
    Box::new(Astar::new())
}

fn dijkstra() -> Box<dyn PathAlgorithm> {
    Box::new(Dijkstra::new())
}

/// Owner of the active search.
///
/// Every forwarded call fails with [`SessionError::NoActiveAlgorithm`] until
/// [`select_algorithm`](Self::select_algorithm) has succeeded once.
pub struct Session {
    registry: HashMap<u32, Constructor>,
    active: Option<Box<dyn PathAlgorithm>>,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with A* (id 0) and Dijkstra (id 1) registered and nothing
    /// selected. Maze generation is seeded from the thread RNG.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    fn with_seed(seed: u64) -> Self {
        let mut registry: HashMap<u32, Constructor> = HashMap::new();
        registry.insert(AlgorithmId::Astar.into(), astar);
        registry.insert(AlgorithmId::Dijkstra.into(), dijkstra);
        Self {
            registry,
            active: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A session with `config.algorithm` selected on a fresh grid.
    pub fn with_config(config: SessionConfig) -> Result<Self, SessionError> {
        let mut session = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        session.select_algorithm(config.algorithm.into(), config.width, config.height)?;
        session.set_movement(config.movement)?;
        Ok(session)
    }

    /// Register (or replace) the constructor for `id`.
    pub fn register(&mut self, id: u32, constructor: Constructor) {
        self.registry.insert(id, constructor);
    }

    /// Discard the active instance and start a new one on a fresh
    /// `width × height` grid.
    ///
    /// On failure the previous instance is kept.
    pub fn select_algorithm(
        &mut self,
        id: u32,
        width: i32,
        height: i32,
    ) -> Result<(), SessionError> {
        let constructor = self
            .registry
            .get(&id)
            .ok_or(SessionError::UnknownAlgorithm(id))?;
        let algo = constructor();
        algo.init(width, height)?;
        debug!(
            "session: selected {} on {}x{} grid",
            algo.name(),
            width,
            height
        );
        self.active = Some(algo);
        Ok(())
    }

    /// The active instance.
    pub fn active(&self) -> Result<&dyn PathAlgorithm, SessionError> {
        self.active.as_deref().ok_or(SessionError::NoActiveAlgorithm)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    pub fn set_start(&self, p: Point) -> Result<(), SessionError> {
        Ok(self.active()?.set_start(p)?)
    }

    pub fn set_end(&self, p: Point) -> Result<(), SessionError> {
        Ok(self.active()?.set_end(p)?)
    }

    pub fn set_wall(&self, p: Point, wall: bool) -> Result<(), SessionError> {
        Ok(self.active()?.set_wall(p, wall)?)
    }

    pub fn set_movement(&self, movement: Movement) -> Result<(), SessionError> {
        Ok(self.active()?.set_movement(movement)?)
    }

    pub fn find_path(&self) -> Result<(), SessionError> {
        Ok(self.active()?.find_path()?)
    }

    /// Empty the grid, keeping its size and movement mode.
    pub fn clear(&self) -> Result<(), SessionError> {
        Ok(self.active()?.clear()?)
    }

    /// Replace the grid with an empty `width × height` one.
    pub fn resize(&self, width: i32, height: i32) -> Result<(), SessionError> {
        Ok(self.active()?.init(width, height)?)
    }

    /// Carve a random maze into the active grid, seeded from the session RNG.
    pub fn generate_maze(&mut self) -> Result<usize, SessionError> {
        let algo = self.active.as_deref().ok_or(SessionError::NoActiveAlgorithm)?;
        carve_into(algo, &mut self.rng)
    }

    /// Carve a random maze into the active grid using `rng`.
    pub fn generate_maze_with<R: Rng>(&self, rng: R) -> Result<usize, SessionError> {
        carve_into(self.active()?, rng)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Deep copy of the active grid.
    pub fn grid(&self) -> Result<Grid, SessionError> {
        Ok(self.active()?.grid()?)
    }

    /// Every node of the active grid, row-major.
    pub fn nodes(&self) -> Result<Vec<Node>, SessionError> {
        Ok(self.grid()?.nodes().to_vec())
    }

    /// Next replay snapshot, or `None` once the log is drained.
    pub fn snapshot(&self) -> Result<Option<Snapshot>, SessionError> {
        Ok(self.active()?.snapshot()?)
    }

    pub fn path(&self) -> Result<ParentMap, SessionError> {
        Ok(self.active()?.path()?)
    }

    pub fn start(&self) -> Result<Point, SessionError> {
        Ok(self.active()?.start()?)
    }

    pub fn end(&self) -> Result<Point, SessionError> {
        Ok(self.active()?.end()?)
    }

    pub fn dimensions(&self) -> Result<(i32, i32), SessionError> {
        Ok(self.active()?.dimensions()?)
    }

    pub fn status(&self) -> Result<SearchStatus, SessionError> {
        Ok(self.active()?.status())
    }

    pub fn stats(&self) -> Result<SearchStats, SessionError> {
        Ok(self.active()?.stats())
    }

    /// Number of cells in the active grid.
    pub fn node_count(&self) -> Result<usize, SessionError> {
        let (w, h) = self.dimensions()?;
        Ok(w as usize * h as usize)
    }

    /// Number of edges in the parent map of a solved search.
    pub fn path_edge_count(&self) -> Result<usize, SessionError> {
        Ok(self.path()?.len())
    }

    pub fn encoded_grid(&self) -> Result<Vec<u8>, SessionError> {
        Ok(encode_grid(&self.grid()?))
    }

    /// Next snapshot as flag bytes, or `None` once drained.
    pub fn encoded_snapshot(&self) -> Result<Option<Vec<u8>>, SessionError> {
        Ok(self.snapshot()?.map(|s| encode_grid(s.grid())))
    }

    pub fn encoded_path(&self) -> Result<Vec<u32>, SessionError> {
        Ok(encode_path(&self.path()?))
    }

    pub fn packed_start(&self) -> Result<u64, SessionError> {
        Ok(pack_point(self.start()?))
    }

    pub fn packed_end(&self) -> Result<u64, SessionError> {
        Ok(pack_point(self.end()?))
    }
}

/// Read the grid out of `algo`, carve it, and write it back.
fn carve_into<R: Rng>(algo: &dyn PathAlgorithm, rng: R) -> Result<usize, SessionError> {
    if algo.status().is_finished() {
        return Err(SearchError::AlreadySolved.into());
    }
    let mut grid = algo.grid()?;
    let open = MazeGen::new(rng).carve(&mut grid)?;
    algo.replace_grid(grid)?;
    Ok(open)
}
