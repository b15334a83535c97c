use pathviz_core::Point;

use crate::distance::euclidean;
use crate::search::Search;
use crate::traits::Estimator;

/// Straight-line distance to the end. Admissible and consistent for unit and
/// √2 step costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Estimator for Euclidean {
    const NAME: &'static str = "A*";

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

/// A* search guided by [`Euclidean`].
pub type Astar = Search<Euclidean>;
