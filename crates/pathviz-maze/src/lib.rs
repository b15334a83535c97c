//! Maze generation for pathviz grids.

pub mod mazegen;

pub use mazegen::MazeGen;
