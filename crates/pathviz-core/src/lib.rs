//! **pathviz-core**: grid model for the pathviz search visualizer.
//!
//! This crate provides the types shared by the search engine and the front
//! ends: grid coordinates, tiles and their states, the fixed-size tile grid,
//! the obstacle index, the busy flag that gates editing while a search runs,
//! and the built-in preset layouts.

pub mod busy;
pub mod geom;
pub mod grid;
pub mod obstacles;
pub mod preset;
pub mod tile;

pub use busy::{BusyFlag, BusyGuard};
pub use geom::{Layout, Point, Rect};
pub use grid::{GridError, MAX_COLS, MAX_ROWS, TileGrid};
pub use obstacles::ObstacleSet;
pub use preset::Preset;
pub use tile::{Direction, Tile, TileState};
