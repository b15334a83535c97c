//! End-to-end behaviour of a session driven the way a front end drives it.

use std::collections::HashMap;

use pathviz_core::{GridError, Movement, Point};
use pathviz_paths::{ParentMap, SearchError, SearchStatus};
use pathviz_session::{AlgorithmId, Session, SessionConfig, SessionError, unpack_point};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session(id: AlgorithmId, width: i32, height: i32) -> Session {
    let mut s = Session::new();
    s.select_algorithm(id.into(), width, height).unwrap();
    s
}

fn path_cost(s: &Session) -> f64 {
    let parents = s.path().unwrap();
    let (w, h) = s.dimensions().unwrap();
    let steps = parents
        .trace(s.start().unwrap(), s.end().unwrap(), (w * h) as usize)
        .expect("parent map leads back to start");
    ParentMap::cost(&steps)
}

#[test]
fn open_grid_path_traces_back_to_start() {
    for id in AlgorithmId::ALL {
        let s = session(id, 20, 20);
        s.find_path().unwrap();
        assert_eq!(s.status(), Ok(SearchStatus::Solved));
        let parents = s.path().unwrap();
        let steps = parents
            .trace(s.start().unwrap(), s.end().unwrap(), 400)
            .unwrap();
        assert!(steps.len() <= 400);
        assert_eq!(steps.first(), Some(&s.start().unwrap()));
        assert_eq!(steps.last(), Some(&s.end().unwrap()));
    }
}

#[test]
fn corner_to_corner_costs_agree() {
    let mut costs = Vec::new();
    for id in AlgorithmId::ALL {
        let s = session(id, 20, 20);
        s.set_start(Point::new(1, 1)).unwrap();
        s.set_end(Point::new(18, 18)).unwrap();
        s.find_path().unwrap();
        costs.push(path_cost(&s));
        assert_eq!(s.stats().unwrap().cost, Some(34.0));
    }
    assert_eq!(costs, vec![34.0, 34.0]);
}

#[test]
fn costs_agree_on_mazes() {
    for seed in 0..6 {
        let mut costs = Vec::new();
        for id in AlgorithmId::ALL {
            let s = session(id, 25, 19);
            s.generate_maze_with(StdRng::seed_from_u64(seed)).unwrap();
            s.find_path().unwrap();
            costs.push(path_cost(&s));
        }
        assert!((costs[0] - costs[1]).abs() < 1e-9, "seed {seed}: {costs:?}");
    }
}

#[test]
fn enclosed_start_or_end_exhausts() {
    for enclose_start in [true, false] {
        for id in AlgorithmId::ALL {
            let s = session(id, 20, 20);
            let target = if enclose_start {
                s.start().unwrap()
            } else {
                s.end().unwrap()
            };
            for d in [(0, -1), (-1, 0), (1, 0), (0, 1)] {
                s.set_wall(target.shift(d.0, d.1), true).unwrap();
            }
            assert_eq!(
                s.find_path(),
                Err(SessionError::Search(SearchError::SearchExhausted))
            );
            assert_eq!(s.status(), Ok(SearchStatus::Failed));
            assert_eq!(
                s.path().unwrap_err(),
                SessionError::Search(SearchError::NotSolved)
            );
        }
    }
}

#[test]
fn diagonal_movement_slips_through_corners() {
    let s = session(AlgorithmId::Astar, 20, 20);
    s.set_movement(Movement::Diagonal).unwrap();
    let end = s.end().unwrap();
    for d in [(0, -1), (-1, 0), (1, 0), (0, 1)] {
        s.set_wall(end.shift(d.0, d.1), true).unwrap();
    }
    s.find_path().unwrap();
}

#[test]
fn markers_cannot_be_walled() {
    let s = session(AlgorithmId::Dijkstra, 20, 20);
    s.set_start(Point::new(5, 5)).unwrap();
    assert_eq!(
        s.set_wall(Point::new(5, 5), true),
        Err(SessionError::from(GridError::InvalidLocation(Point::new(5, 5))))
    );
    let end = s.end().unwrap();
    assert!(s.set_wall(end, true).is_err());

    for p in [(2, 2), (3, 9), (17, 17), (3, 9), (9, 9)] {
        let p = Point::new(p.0, p.1);
        let _ = s.set_start(p);
        let _ = s.set_end(p.shift(1, 0));
        let grid = s.grid().unwrap();
        assert_eq!(grid.count_fn(|n| n.is_start()), 1);
        assert_eq!(grid.count_fn(|n| n.is_end()), 1);
    }
}

#[test]
fn tiny_grids_are_rejected() {
    let mut s = Session::new();
    assert_eq!(
        s.select_algorithm(AlgorithmId::Astar.into(), 5, 5),
        Err(SessionError::from(GridError::InvalidDimensions {
            width: 5,
            height: 5
        }))
    );
    s.select_algorithm(AlgorithmId::Astar.into(), 10, 10).unwrap();
    assert!(s.resize(9, 30).is_err());
    assert_eq!(s.dimensions(), Ok((10, 10)));
}

#[test]
fn one_snapshot_per_round_then_none() {
    for id in AlgorithmId::ALL {
        let s = session(id, 20, 20);
        assert_eq!(
            s.encoded_snapshot(),
            Err(SessionError::Search(SearchError::NotSolved))
        );
        s.find_path().unwrap();
        let rounds = s.stats().unwrap().rounds;
        let mut frames = Vec::new();
        while let Some(frame) = s.encoded_snapshot().unwrap() {
            assert_eq!(frame.len(), 400);
            frames.push(frame);
        }
        assert_eq!(frames.len(), rounds);
        assert_eq!(s.encoded_snapshot(), Ok(None));
        assert_eq!(s.encoded_snapshot(), Ok(None));

        // Visited cells only accumulate across frames.
        let visited = |f: &Vec<u8>| f.iter().filter(|&&b| b & 1 != 0).count();
        for pair in frames.windows(2) {
            assert!(visited(&pair[0]) <= visited(&pair[1]));
        }
    }
}

#[test]
fn solved_grid_is_frozen_until_cleared() {
    let s = session(AlgorithmId::Astar, 20, 20);
    s.find_path().unwrap();
    let frozen = Err(SessionError::Search(SearchError::AlreadySolved));
    assert_eq!(s.set_wall(Point::new(3, 3), true), frozen);
    assert_eq!(s.set_start(Point::new(3, 3)), frozen);
    assert_eq!(s.find_path(), frozen);
    s.clear().unwrap();
    assert_eq!(s.status(), Ok(SearchStatus::Ready));
    s.set_wall(Point::new(3, 3), true).unwrap();
    s.find_path().unwrap();
}

#[test]
fn maze_keeps_border_and_connectivity() {
    for seed in 0..10 {
        let mut s = Session::with_config(SessionConfig {
            seed: Some(seed),
            ..SessionConfig::default()
        })
        .unwrap();
        s.generate_maze().unwrap();
        let grid = s.grid().unwrap();
        for p in grid.bounds().iter().filter(|&p| grid.bounds().on_border(p)) {
            assert!(grid.is_wall(p));
        }
        assert_eq!(grid.count_fn(|n| n.is_visited()), 0);
        s.find_path().unwrap();
    }
}

#[test]
fn encoded_queries_line_up() {
    let s = session(AlgorithmId::Dijkstra, 14, 12);
    assert_eq!(s.node_count(), Ok(168));
    assert_eq!(unpack_point(s.packed_start().unwrap()), s.start().unwrap());
    assert_eq!(unpack_point(s.packed_end().unwrap()), s.end().unwrap());

    let grid = s.encoded_grid().unwrap();
    assert_eq!(grid.len(), 168);
    assert_eq!(grid.iter().filter(|&&b| b == 0b0100).count(), 1);
    assert_eq!(grid.iter().filter(|&&b| b == 0b1000).count(), 1);

    s.find_path().unwrap();
    let words = s.encoded_path().unwrap();
    assert_eq!(words.len(), s.path_edge_count().unwrap() * 4);
    let (sx, sy) = (s.start().unwrap().x as u32, s.start().unwrap().y as u32);
    // The start is never anyone's child.
    assert!(words.chunks(4).all(|q| (q[0], q[1]) != (sx, sy)));
}

#[test]
fn encoded_path_walks_back_from_end() {
    for id in AlgorithmId::ALL {
        let s = session(id, 20, 20);
        s.find_path().unwrap();
        let prev: HashMap<(u32, u32), (u32, u32)> = s
            .encoded_path()
            .unwrap()
            .chunks(4)
            .map(|q| ((q[0], q[1]), (q[2], q[3])))
            .collect();

        let start = s.start().unwrap();
        let end = s.end().unwrap();
        let mut cur = (end.x as u32, end.y as u32);
        let mut steps = 0;
        while cur != (start.x as u32, start.y as u32) {
            cur = *prev.get(&cur).unwrap_or_else(|| panic!("walk broke at {cur:?}"));
            steps += 1;
            assert!(steps <= 400);
        }
        // Straight corridor on an open grid.
        assert_eq!(steps, (end.x - start.x) as usize);
    }
}
