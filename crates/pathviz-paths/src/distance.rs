use std::f64::consts::SQRT_2;

use pathviz_core::Point;

/// Cost of one step between adjacent cells: 1 orthogonally, √2 diagonally.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 }
}

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
