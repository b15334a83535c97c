use pathviz_core::Point;

use crate::search::Search;
use crate::traits::Estimator;

/// Zero estimate: nodes are expanded in order of accumulated cost alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Estimator for Uniform {
    const NAME: &'static str = "Dijkstra";

    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> f64 {
        0.0
    }
}

/// Dijkstra's algorithm over the grid.
pub type Dijkstra = Search<Uniform>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{PathAlgorithm, SearchStatus};
    use crate::error::SearchError;
    use pathviz_core::{GridError, Movement};
    use std::sync::Arc;
    use std::thread;

    fn ready(width: i32, height: i32) -> Dijkstra {
        let d = Dijkstra::new();
        d.init(width, height).unwrap();
        d
    }

    #[test]
    fn lifecycle_errors_before_init() {
        let d = Dijkstra::new();
        assert_eq!(d.status(), SearchStatus::Uninitialized);
        assert_eq!(d.find_path(), Err(SearchError::NoGrid));
        assert_eq!(d.clear(), Err(SearchError::NoGrid));
        assert_eq!(d.set_wall(Point::new(3, 3), true), Err(SearchError::NoGrid));
        assert_eq!(d.snapshot(), Err(SearchError::NoGrid));
        assert_eq!(d.path().unwrap_err(), SearchError::NoGrid);
    }

    #[test]
    fn init_rejects_small_grid() {
        let d = Dijkstra::new();
        assert_eq!(
            d.init(5, 5),
            Err(SearchError::Grid(GridError::InvalidDimensions {
                width: 5,
                height: 5
            }))
        );
        assert_eq!(d.status(), SearchStatus::Uninitialized);
    }

    #[test]
    fn straight_corridor_cost() {
        let d = ready(20, 20);
        d.set_start(Point::new(2, 5)).unwrap();
        d.set_end(Point::new(12, 5)).unwrap();
        d.find_path().unwrap();
        assert_eq!(d.status(), SearchStatus::Solved);
        assert_eq!(d.stats().cost, Some(10.0));

        let path = d.path().unwrap();
        let trace = path.trace(Point::new(2, 5), Point::new(12, 5), 400).unwrap();
        assert_eq!(trace.len(), 11);
    }

    #[test]
    fn result_queries_require_a_finished_search() {
        let d = ready(12, 12);
        assert_eq!(d.snapshot(), Err(SearchError::NotSolved));
        assert_eq!(d.path().unwrap_err(), SearchError::NotSolved);
    }

    #[test]
    fn second_find_path_is_rejected_until_clear() {
        let d = ready(12, 12);
        d.find_path().unwrap();
        assert_eq!(d.find_path(), Err(SearchError::AlreadySolved));
        assert_eq!(d.set_wall(Point::new(3, 3), true), Err(SearchError::AlreadySolved));
        assert_eq!(d.set_start(Point::new(2, 2)), Err(SearchError::AlreadySolved));
        assert_eq!(d.set_end(Point::new(9, 9)), Err(SearchError::AlreadySolved));
        assert_eq!(
            d.set_movement(Movement::Diagonal),
            Err(SearchError::AlreadySolved)
        );

        d.clear().unwrap();
        assert_eq!(d.status(), SearchStatus::Ready);
        d.set_wall(Point::new(3, 3), true).unwrap();
        d.find_path().unwrap();
    }

    #[test]
    fn clear_keeps_size_and_movement() {
        let d = ready(14, 11);
        d.set_movement(Movement::Diagonal).unwrap();
        d.set_wall(Point::new(4, 4), true).unwrap();
        d.clear().unwrap();
        let g = d.grid().unwrap();
        assert_eq!((g.width(), g.height()), (14, 11));
        assert_eq!(g.movement(), Movement::Diagonal);
        assert!(!g.is_wall(Point::new(4, 4)));
    }

    #[test]
    fn snapshots_match_rounds_and_drain_to_none() {
        let d = ready(15, 15);
        d.find_path().unwrap();
        let rounds = d.stats().rounds;
        assert!(rounds > 0);

        let mut seen = 0;
        let mut last_visited = 0;
        while let Some(snap) = d.snapshot().unwrap() {
            assert_eq!(snap.round(), seen);
            // Visited counts never shrink during a replay.
            assert!(snap.visited_count() >= last_visited);
            last_visited = snap.visited_count();
            seen += 1;
        }
        assert_eq!(seen, rounds);
        assert_eq!(d.snapshot(), Ok(None));
        assert_eq!(d.snapshot(), Ok(None));
    }

    #[test]
    fn start_and_end_are_never_flagged_visited() {
        let d = ready(16, 16);
        d.find_path().unwrap();
        let g = d.grid().unwrap();
        assert!(!g.at(g.start()).unwrap().is_visited());
        assert!(!g.at(g.end()).unwrap().is_visited());
        assert!(g.count_fn(|n| n.is_visited()) > 0);
    }

    #[test]
    fn diagonal_moves_cost_sqrt2() {
        let d = ready(12, 12);
        d.set_movement(Movement::Diagonal).unwrap();
        d.set_start(Point::new(1, 1)).unwrap();
        d.set_end(Point::new(4, 4)).unwrap();
        d.find_path().unwrap();
        let cost = d.stats().cost.unwrap();
        assert!((cost - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn replace_grid_checks_size_and_state() {
        let d = ready(12, 12);
        let mut g = d.grid().unwrap();
        g.set_wall(Point::new(5, 5), true).unwrap();
        d.replace_grid(g).unwrap();
        assert!(d.grid().unwrap().is_wall(Point::new(5, 5)));

        let other = pathviz_core::Grid::new(13, 12).unwrap();
        assert!(matches!(
            d.replace_grid(other),
            Err(SearchError::Grid(GridError::InvalidDimensions { .. }))
        ));

        d.find_path().unwrap();
        let g = d.grid().unwrap();
        assert_eq!(d.replace_grid(g), Err(SearchError::AlreadySolved));
    }

    #[test]
    fn concurrent_readers_split_the_snapshot_log() {
        let d = Arc::new(ready(30, 30));
        d.set_start(Point::new(1, 1)).unwrap();
        d.set_end(Point::new(28, 28)).unwrap();
        d.find_path().unwrap();
        let rounds = d.stats().rounds;

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let d = Arc::clone(&d);
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    while let Some(s) = d.snapshot().unwrap() {
                        seen.push(s.round());
                    }
                    seen
                })
            })
            .collect();

        let mut seen: Vec<usize> = readers
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(seen.len(), rounds);
        seen.sort_unstable();
        assert!(seen.iter().copied().eq(0..rounds));
        assert_eq!(d.snapshot(), Ok(None));
    }
}
