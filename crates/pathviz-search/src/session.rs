//! [`Session`]: the shared grid plus everything a front end needs to edit
//! it and launch searches without racing a running search thread.

use std::thread;
use std::time::{Duration, Instant};

use pathviz_core::{BusyFlag, GridError, Layout, Point, Preset, TileGrid};

use crate::bridge::spawn_search;
use crate::canvas::SharedGrid;
use crate::error::SearchError;
use crate::search::{Algorithm, Pacing};

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub goal: Point,
    /// Screen geometry used for hit-testing.
    pub layout: Layout,
    pub pacing: Pacing,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let grid = TileGrid::default();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            start: grid.start(),
            goal: grid.goal(),
            layout: Layout::default(),
            pacing: Pacing::default(),
            algorithm: Algorithm::default(),
        }
    }
}

/// Busy-gated owner of a [`SharedGrid`].
///
/// Every edit and every launch first takes the busy flag, so nothing here
/// can run while a search thread is painting. Edits made after a finished
/// search drop that search's marks first.
#[derive(Debug, Clone)]
pub struct Session {
    grid: SharedGrid,
    busy: BusyFlag,
    algorithm: Algorithm,
    pacing: Pacing,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GridError> {
        let grid = TileGrid::with_layout(
            config.rows,
            config.cols,
            config.start,
            config.goal,
            config.layout,
        )?;
        let mut session = Self::from_grid(grid);
        session.algorithm = config.algorithm;
        session.pacing = config.pacing;
        Ok(session)
    }

    /// Wrap an existing grid with default algorithm and pacing.
    pub fn from_grid(grid: TileGrid) -> Self {
        Self {
            grid: SharedGrid::new(grid),
            busy: BusyFlag::new(),
            algorithm: Algorithm::default(),
            pacing: Pacing::default(),
        }
    }

    /// Handle to the shared grid, for drawing.
    pub fn grid(&self) -> &SharedGrid {
        &self.grid
    }

    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.pacing = pacing;
    }

    /// Run `f` against the grid under the busy flag, after dropping any
    /// marks left by the previous search.
    pub fn edit<R>(&self, f: impl FnOnce(&mut TileGrid) -> R) -> Result<R, SearchError> {
        let _guard = self.busy.try_acquire().ok_or(SearchError::Busy)?;
        let mut grid = self.grid.write();
        if grid.has_search_marks() {
            grid.purge();
        }
        Ok(f(&mut *grid))
    }

    /// Returns whether the tile changed.
    pub fn place_obstacle(&self, p: Point) -> Result<bool, SearchError> {
        self.edit(|g| g.place_obstacle(p))
    }

    /// Returns whether the tile changed.
    pub fn erase_obstacle(&self, p: Point) -> Result<bool, SearchError> {
        self.edit(|g| g.erase_obstacle(p))
    }

    pub fn move_start(&self, p: Point) -> Result<(), SearchError> {
        self.edit(|g| g.move_start(p))??;
        Ok(())
    }

    pub fn move_goal(&self, p: Point) -> Result<(), SearchError> {
        self.edit(|g| g.move_goal(p))??;
        Ok(())
    }

    /// Everything but start and goal becomes empty.
    pub fn clear(&self) -> Result<(), SearchError> {
        self.edit(TileGrid::clear)
    }

    /// Drop visited and path marks, keeping obstacles.
    pub fn purge(&self) -> Result<(), SearchError> {
        self.edit(TileGrid::purge)
    }

    pub fn load_preset(&self, preset: Preset) -> Result<(), SearchError> {
        self.edit(|g| g.apply_preset(preset))??;
        log::info!("loaded preset {preset:?}");
        Ok(())
    }

    /// Start the selected algorithm on a background thread.
    pub fn launch(&self) -> Result<(), SearchError> {
        self.purge()?;
        spawn_search(self.algorithm, &self.grid, &self.busy, self.pacing)
    }

    /// Poll until no search is running. Returns false on timeout.
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.busy.is_busy() {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(1));
        }
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_grid(TileGrid::default())
    }
}
