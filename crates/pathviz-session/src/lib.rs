//! **pathviz-session**: the command/query surface over pathviz searches.
//!
//! A [`Session`] owns at most one active [`PathAlgorithm`], chosen by
//! numeric id from a registry, and forwards every command to it. The
//! [`encode`] module flattens grids, snapshots and parent maps into the byte
//! and word arrays a rendering front end consumes.
//!
//! ```
//! use pathviz_session::{AlgorithmId, Session};
//!
//! let mut session = Session::new();
//! session.select_algorithm(AlgorithmId::Dijkstra as u32, 20, 20)?;
//! session.find_path()?;
//! while let Some(frame) = session.encoded_snapshot()? {
//!     assert_eq!(frame.len(), session.node_count()?);
//! }
//! assert!(session.path_edge_count()? > 0);
//! # Ok::<(), pathviz_session::SessionError>(())
//! ```
//!
//! [`PathAlgorithm`]: pathviz_paths::PathAlgorithm

pub mod config;
pub mod encode;
pub mod error;
pub mod session;

pub use config::{AlgorithmId, SessionConfig};
pub use encode::{encode_grid, encode_into, encode_path, pack_point, unpack_point};
pub use error::SessionError;
pub use session::{Constructor, Session};
