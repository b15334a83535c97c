//! Replayable shortest-path search on obstacle grids.
//!
//! This crate provides two interchangeable searches over a
//! [`pathviz_core::Grid`]:
//!
//! - **Dijkstra** ([`Dijkstra`]): expands nodes by accumulated cost
//! - **A\*** ([`Astar`]): adds a straight-line estimate to the end
//!
//! Both are [`Search`] instances sharing one relaxation loop, driven by an
//! [`IndexedQueue`] with decrease-key. Every relaxation round appends a grid
//! [`Snapshot`] to a [`SnapshotLog`], so a finished search can be replayed
//! step by step through [`PathAlgorithm::snapshot`].
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Estimator`] | priority function plugged into [`Search`] |
//! | [`PathAlgorithm`] | object-safe lifecycle and query surface |

mod algorithm;
mod astar;
mod dijkstra;
mod distance;
mod error;
mod parents;
mod queue;
mod search;
mod snapshot;
mod traits;

pub use algorithm::{PathAlgorithm, SearchStats, SearchStatus};
pub use astar::{Astar, Euclidean};
pub use dijkstra::{Dijkstra, Uniform};
pub use distance::{euclidean, manhattan, step_cost};
pub use error::SearchError;
pub use parents::{ParentMap, PathEdge};
pub use queue::IndexedQueue;
pub use search::Search;
pub use snapshot::{Snapshot, SnapshotLog};
pub use traits::Estimator;
