//! The [`Grid`] type: a dense arena of [`Node`]s with start/end markers.
//!
//! Nodes are stored row-major and addressed by their flat index, so identity
//! comparisons elsewhere in the workspace are plain `usize` equality. A
//! `Grid` owns its nodes outright: cloning yields a fully independent deep
//! copy, which is what search snapshots rely on.

use crate::error::{GridError, MIN_SIDE};
use crate::geom::{Point, Range};
use crate::node::{Flags, Node};

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// Orthogonal neighbours: up, left, right, down.
const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// All eight neighbours, row by row from the upper-left corner.
const DIAGONAL: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Which cells count as adjacent during a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// 4-neighbour adjacency.
    #[default]
    Orthogonal,
    /// 8-neighbour adjacency.
    Diagonal,
}

impl Movement {
    /// Neighbour offsets in enumeration order. The order is the tie-break
    /// order for equal-cost relaxations.
    #[inline]
    pub fn directions(self) -> &'static [Point] {
        match self {
            Self::Orthogonal => &ORTHOGONAL,
            Self::Diagonal => &DIAGONAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A width × height obstacle grid with exactly one start and one end.
///
/// Invariants upheld by every method:
/// - border cells are walls;
/// - start and end are never walls and never share a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridParts"))]
pub struct Grid {
    bounds: Range,
    nodes: Vec<Node>,
    start: usize,
    end: usize,
    movement: Movement,
}

impl Grid {
    /// Create a grid with a walled border, start at (width/4, height/2) and
    /// end at (3·width/4 + 1, height/2).
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let y_mid = height / 2;
        let start_p = Point::new(width / 4, y_mid);
        let end_p = Point::new(width * 3 / 4 + 1, y_mid);

        let nodes = bounds
            .iter()
            .map(|p| {
                let mut flags = Flags::NONE;
                flags.set(Flags::WALL, bounds.on_border(p));
                flags.set(Flags::START, p == start_p);
                flags.set(Flags::END, p == end_p);
                Node::new(p).with_flags(flags)
            })
            .collect();

        let w = width as usize;
        Ok(Self {
            bounds,
            nodes,
            start: start_p.y as usize * w + start_p.x as usize,
            end: end_p.y as usize * w + end_p.x as usize,
            movement: Movement::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a constructed grid; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    #[inline]
    pub fn set_movement(&mut self, movement: Movement) {
        self.movement = movement;
    }

    /// Check every invariant: a zero-based bounds of at least
    /// [`MIN_SIDE`] per side matching the node count, each node at its own
    /// position, exactly one start and one end on distinct open cells, and a
    /// walled border.
    ///
    /// Grids built through this module always pass; the check exists for
    /// grids that arrive from outside, such as deserialized ones.
    pub fn validate(&self) -> Result<(), GridError> {
        let (w, h) = (self.width(), self.height());
        if w < MIN_SIDE
            || h < MIN_SIDE
            || self.bounds.min != Point::new(0, 0)
            || self.nodes.len() != self.bounds.len()
        {
            return Err(GridError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        let wu = w as usize;
        for i in [self.start, self.end] {
            if i >= self.nodes.len() {
                let y = i32::try_from(i / wu).unwrap_or(i32::MAX);
                return Err(GridError::InvalidLocation(Point::new((i % wu) as i32, y)));
            }
        }
        if self.start == self.end {
            return Err(GridError::InvalidLocation(self.start()));
        }
        for (i, n) in self.nodes.iter().enumerate() {
            let p = Point::new((i % wu) as i32, (i / wu) as i32);
            let marker = i == self.start || i == self.end;
            if n.pos != p
                || n.is_start() != (i == self.start)
                || n.is_end() != (i == self.end)
                || (marker && n.is_wall())
                || (self.bounds.on_border(p) && !n.is_wall())
            {
                return Err(GridError::InvalidLocation(p));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.nodes[idx].pos
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Node> {
        self.idx(p).map(|i| self.nodes[i])
    }

    /// The node at flat index `idx`.
    #[inline]
    pub fn node(&self, idx: usize) -> Node {
        self.nodes[idx]
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.nodes[self.start].pos
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.nodes[self.end].pos
    }

    #[inline]
    pub fn start_idx(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end_idx(&self) -> usize {
        self.end
    }

    /// Whether `p` is a wall. Out-of-bounds points count as walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_none_or(|n| n.is_wall())
    }

    /// Count how many nodes satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(&Node) -> bool) -> usize {
        self.nodes.iter().filter(|n| f(n)).count()
    }

    /// Append the in-bounds neighbours of `p` into `buf`, in the fixed
    /// enumeration order of the active [`Movement`]. Walls are included;
    /// callers filter them. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for &d in self.movement.directions() {
            let n = p + d;
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Move the start marker to `p`.
    ///
    /// Fails if `p` is out of bounds, a wall, or the end.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::InvalidLocation(p))?;
        let n = self.nodes[i];
        if n.is_wall() || n.is_end() {
            return Err(GridError::InvalidLocation(p));
        }
        self.nodes[self.start].flags.set(Flags::START, false);
        self.nodes[i].flags.set(Flags::START, true);
        self.start = i;
        Ok(())
    }

    /// Move the end marker to `p`.
    ///
    /// Fails if `p` is out of bounds, a wall, or the start.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::InvalidLocation(p))?;
        let n = self.nodes[i];
        if n.is_wall() || n.is_start() {
            return Err(GridError::InvalidLocation(p));
        }
        self.nodes[self.end].flags.set(Flags::END, false);
        self.nodes[i].flags.set(Flags::END, true);
        self.end = i;
        Ok(())
    }

    /// Set or clear the wall flag at `p`.
    ///
    /// Fails if `p` is out of bounds, the start or end, or a border cell
    /// being opened.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::InvalidLocation(p))?;
        let n = self.nodes[i];
        if n.is_start() || n.is_end() || (!wall && self.bounds.on_border(p)) {
            return Err(GridError::InvalidLocation(p));
        }
        self.nodes[i].flags.set(Flags::WALL, wall);
        Ok(())
    }

    /// Set or clear the visited flag of the node at `idx`.
    #[inline]
    pub fn set_visited(&mut self, idx: usize, visited: bool) {
        self.nodes[idx].flags.set(Flags::VISITED, visited);
    }

    /// Clear every visited flag.
    pub fn clear_visited(&mut self) {
        for n in self.nodes.iter_mut() {
            n.flags.set(Flags::VISITED, false);
        }
    }
}

/// Unchecked field set a [`Grid`] is deserialized into before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridParts {
    bounds: Range,
    nodes: Vec<Node>,
    start: usize,
    end: usize,
    movement: Movement,
}

#[cfg(feature = "serde")]
impl TryFrom<GridParts> for Grid {
    type Error = GridError;

    fn try_from(parts: GridParts) -> Result<Self, GridError> {
        let grid = Self {
            bounds: parts.bounds,
            nodes: parts.nodes,
            start: parts.start,
            end: parts.end,
            movement: parts.movement,
        };
        grid.validate()?;
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip_keeps_markers_and_walls() {
        let mut g = Grid::new(12, 10).unwrap();
        g.set_wall(Point::new(4, 4), true).unwrap();
        g.set_movement(Movement::Diagonal);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.start(), g.start());
        assert!(back.is_wall(Point::new(4, 4)));
    }

    #[test]
    fn corrupted_json_is_rejected() {
        let g = Grid::new(10, 10).unwrap();
        let good = serde_json::to_value(&g).unwrap();

        let mut bad = good.clone();
        bad["start"] = 5000.into();
        assert!(serde_json::from_value::<Grid>(bad).is_err());

        let mut bad = good.clone();
        bad["nodes"][0]["flags"] = 0.into();
        assert!(serde_json::from_value::<Grid>(bad).is_err());

        let mut bad = good.clone();
        bad["end"] = bad["start"].clone();
        assert!(serde_json::from_value::<Grid>(bad).is_err());

        assert_eq!(serde_json::from_value::<Grid>(good).unwrap(), g);
    }
}
