//! The parent map produced by a search.

use std::collections::HashMap;

use pathviz_core::{Node, Point};

use crate::distance::step_cost;

/// One recorded relaxation: `child` was reached from `parent`.
///
/// Both sides are value copies of the nodes as they were when the edge was
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathEdge {
    pub parent: Node,
    pub child: Node,
}

/// Child position → best known predecessor.
///
/// This is an edge set, not a trace: iteration order is unspecified. Use
/// [`trace`](Self::trace) to walk it from the end back to the start.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<PathEdge>", into = "Vec<PathEdge>")
)]
pub struct ParentMap {
    edges: HashMap<Point, PathEdge>,
}

impl ParentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the predecessor of `child`.
    pub fn insert(&mut self, parent: Node, child: Node) {
        self.edges.insert(child.pos, PathEdge { parent, child });
    }

    /// The edge leading into `child`, if any.
    pub fn get(&self, child: Point) -> Option<&PathEdge> {
        self.edges.get(&child)
    }

    /// Position of the predecessor of `child`, if any.
    pub fn parent_of(&self, child: Point) -> Option<Point> {
        self.edges.get(&child).map(|e| e.parent.pos)
    }

    /// Number of recorded edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over every recorded edge, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &PathEdge> {
        self.edges.values()
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Walk predecessors from `end` back to `start`, taking at most
    /// `max_steps` steps.
    ///
    /// Returns the path in start-to-end order, or `None` if the chain breaks
    /// or runs longer than `max_steps`.
    pub fn trace(&self, start: Point, end: Point, max_steps: usize) -> Option<Vec<Point>> {
        let mut path = vec![end];
        let mut cur = end;
        while cur != start {
            if path.len() > max_steps {
                return None;
            }
            cur = self.parent_of(cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    /// Total step cost along a traced path.
    pub fn cost(path: &[Point]) -> f64 {
        path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
    }
}

impl From<Vec<PathEdge>> for ParentMap {
    fn from(edges: Vec<PathEdge>) -> Self {
        let mut m = Self::new();
        for e in edges {
            m.insert(e.parent, e.child);
        }
        m
    }
}

impl From<ParentMap> for Vec<PathEdge> {
    fn from(m: ParentMap) -> Self {
        m.edges.into_values().collect()
    }
}
