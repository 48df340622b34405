//! Animated grid searches for the pathviz visualizer.
//!
//! This crate runs three classic searches on a [`TileGrid`], painting every
//! discovered tile as it goes so a front end can watch the frontier spread:
//!
//! - **BFS**, unit step cost ([`Search::bfs`])
//! - **Dijkstra**, with a 1.001 "nudge" on some steps ([`Search::dijkstra`])
//! - **A\***, Dijkstra plus a Manhattan estimate ([`Search::astar`])
//!
//! Searches write through the [`Canvas`] trait, implemented both for a plain
//! [`TileGrid`] and for the lock-protected [`SharedGrid`]. [`spawn_search`]
//! runs one on a detached thread; [`Session`] wraps a shared grid with the
//! busy-gated edits a front end needs.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`TileGrid`]: pathviz_core::TileGrid

mod astar;
mod bfs;
mod bridge;
mod canvas;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod search;
mod session;
mod traits;

#[cfg(test)]
mod properties;

pub use bridge::spawn_search;
pub use canvas::{Canvas, SharedGrid};
pub use distance::{NUDGE_COST, STEP_COST, manhattan, nudge_cost};
pub use error::SearchError;
pub use frontier::{FifoFrontier, PriorityFrontier};
pub use neighbors::GridPather;
pub use search::{Algorithm, Outcome, Pacing, Search, SearchState, SearchStats};
pub use session::{Session, SessionConfig};
pub use traits::{AstarPather, Pather, WeightedPather};
