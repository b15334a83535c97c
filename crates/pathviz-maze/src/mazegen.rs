//! Randomized depth-first maze carving.
//!
//! Corridors run along the even lattice of the grid interior: cells with both
//! coordinates even are rooms, and the odd cell between two adjacent rooms is
//! opened whenever the carver walks from one to the other. Because the
//! lattice starts at (2, 2) and stops one cell short of the border, the outer
//! ring is never touched.

use log::debug;
use pathviz_core::{Grid, GridError, Point};
use rand::Rng;
use rand::seq::SliceRandom;

/// Distance-2 steps between lattice rooms.
const STEPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(-2, 0),
    Point::new(2, 0),
    Point::new(0, 2),
];

/// Where carving starts.
const ORIGIN: Point = Point::new(2, 2);

/// One pending room on the carving stack, with its shuffled exits.
struct Frame {
    room: Point,
    exits: [Point; 4],
    next: usize,
}

/// Maze generator carving into a [`Grid`]'s wall state.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Replace the walls of `grid` with a randomly carved maze.
    ///
    /// Start and end keep their positions and stay reachable from each other.
    /// Visited flags are clear on return. Returns the number of open cells.
    pub fn carve(&mut self, grid: &mut Grid) -> Result<usize, GridError> {
        let bounds = grid.bounds();
        for p in bounds.iter() {
            let n = grid.at(p).ok_or(GridError::InvalidLocation(p))?;
            if !n.is_start() && !n.is_end() {
                grid.set_wall(p, true)?;
            }
        }
        grid.clear_visited();

        let interior = bounds.inset(1);
        let is_room = |p: Point| interior.contains(p) && p.x % 2 == 0 && p.y % 2 == 0;

        self.enter(grid, ORIGIN)?;
        let mut stack = vec![self.frame(ORIGIN)];
        while let Some(top) = stack.last_mut() {
            if top.next == top.exits.len() {
                stack.pop();
                continue;
            }
            let step = top.exits[top.next];
            top.next += 1;
            let from = top.room;
            let to = from + step;
            if !is_room(to) || visited(grid, to) {
                continue;
            }
            open(grid, from + Point::new(step.x / 2, step.y / 2))?;
            self.enter(grid, to)?;
            stack.push(self.frame(to));
        }

        for marker in [grid.start(), grid.end()] {
            connect(grid, marker)?;
        }
        grid.clear_visited();

        let open_cells = grid.count_fn(|n| !n.is_wall());
        debug!(
            "maze: carved {}x{} grid, {} open cells",
            grid.width(),
            grid.height(),
            open_cells
        );
        Ok(open_cells)
    }

    fn frame(&mut self, room: Point) -> Frame {
        let mut exits = STEPS;
        exits.shuffle(&mut self.rng);
        Frame {
            room,
            exits,
            next: 0,
        }
    }

    fn enter(&mut self, grid: &mut Grid, room: Point) -> Result<(), GridError> {
        open(grid, room)?;
        let i = grid.idx(room).ok_or(GridError::InvalidLocation(room))?;
        grid.set_visited(i, true);
        Ok(())
    }
}

fn visited(grid: &Grid, p: Point) -> bool {
    grid.at(p).is_some_and(|n| n.is_visited())
}

/// Clear the wall at `p`. Markers are already open and are left alone.
fn open(grid: &mut Grid, p: Point) -> Result<(), GridError> {
    if grid.is_wall(p) {
        grid.set_wall(p, false)?;
    }
    Ok(())
}

/// Join a marker to the corridor network.
///
/// A marker with an even coordinate already touches a room or a carved
/// passage. One on an odd/odd cell only touches passages that may still be
/// walls, so the horizontal one on the left (right, at the left edge) is
/// opened; it sits on a lattice column and therefore touches a room.
fn connect(grid: &mut Grid, marker: Point) -> Result<(), GridError> {
    if marker.x % 2 == 0 || marker.y % 2 == 0 {
        return Ok(());
    }
    let dx = if marker.x >= 3 { -1 } else { 1 };
    open(grid, marker.shift(dx, 0))
}
