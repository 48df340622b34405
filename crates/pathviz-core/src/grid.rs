//! The [`TileGrid`] type: a fixed rows × cols array of [`Tile`]s.
//!
//! The grid owns the start and goal coordinates. Every mutator keeps the
//! invariant that exactly one tile is `Start` and exactly one is `Goal`;
//! searches can only add `Visited`/`Path` marks on top.

use std::fmt;

use crate::geom::{Layout, Point};
use crate::preset::Preset;
use crate::tile::{Direction, Tile, TileState};

/// Default number of rows.
pub const MAX_ROWS: i32 = 25;
/// Default number of columns.
pub const MAX_COLS: i32 = 50;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors from grid construction and editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid.
    OutOfBounds(Point),
    /// Zero or negative rows/columns.
    InvalidDimensions { rows: i32, cols: i32 },
    /// Start or goal cannot be placed on a tile that is not empty.
    Occupied(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
            Self::Occupied(p) => write!(f, "tile {p} is occupied"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
    layout: Layout,
    start: Point,
    goal: Point,
}

impl TileGrid {
    /// Create an empty grid with start and goal placed, using the window
    /// layout for tile rectangles.
    pub fn new(rows: i32, cols: i32, start: Point, goal: Point) -> Result<Self, GridError> {
        Self::with_layout(rows, cols, start, goal, Layout::default())
    }

    /// Create an empty grid with an explicit tile layout.
    pub fn with_layout(
        rows: i32,
        cols: i32,
        start: Point,
        goal: Point,
        layout: Layout,
    ) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut grid = Self::blank(rows, cols, layout, start, goal);
        grid.check(start)?;
        grid.check(goal)?;
        if start == goal {
            return Err(GridError::Occupied(goal));
        }
        grid.tile_mut(start).state = TileState::Start;
        grid.tile_mut(goal).state = TileState::Goal;
        Ok(grid)
    }

    fn blank(rows: i32, cols: i32, layout: Layout, start: Point, goal: Point) -> Self {
        let mut tiles = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Tile::new(row, col, layout.rect(row, col)));
            }
        }
        Self {
            tiles,
            rows,
            cols,
            layout,
            start,
            goal,
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` satisfies `0 <= x < cols` and `0 <= y < rows`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.cols && p.y >= 0 && p.y < self.rows
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| (p.y * self.cols + p.x) as usize)
    }

    fn check(&self, p: Point) -> Result<(), GridError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(p))
        }
    }

    // Only called with coordinates already bounds-checked.
    fn tile_mut(&mut self, p: Point) -> &mut Tile {
        let i = (p.y * self.cols + p.x) as usize;
        &mut self.tiles[i]
    }

    /// The tile at `p`, if in bounds.
    pub fn tile(&self, p: Point) -> Option<&Tile> {
        self.idx(p).map(|i| &self.tiles[i])
    }

    /// The state of the tile at `p`, if in bounds.
    pub fn state(&self, p: Point) -> Option<TileState> {
        self.tile(p).map(|t| t.state)
    }

    /// Row-major iterator over all tiles.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles currently in `state`.
    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// Grid coordinate of the tile whose rectangle contains the screen
    /// position `screen`.
    pub fn tile_at(&self, screen: Point) -> Option<Point> {
        let l = self.layout;
        let sx = l.tile_width + l.gap;
        let sy = l.tile_height + l.gap;
        if sx <= 0 || sy <= 0 {
            return None;
        }
        let col = (screen.x - l.origin.x).div_euclid(sx);
        let row = (screen.y - l.origin.y).div_euclid(sy);
        let p = Point::from_row_col(row, col);
        self.tile(p)
            .filter(|t| t.rect.contains(screen))
            .map(|t| t.pos())
    }

    // --- search marks ---

    /// Mark `p` as visited with a direction label. Start and goal tiles are
    /// left alone. Returns whether the tile changed.
    pub fn mark_visited(&mut self, p: Point, label: Option<Direction>) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        let t = &mut self.tiles[i];
        if t.is_start() || t.is_goal() {
            return false;
        }
        t.state = TileState::Visited;
        t.label = label;
        true
    }

    /// Mark `p` as part of the path. The start tile is left alone and the
    /// goal tile keeps its `Goal` state.
    pub fn mark_path(&mut self, p: Point) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        let t = &mut self.tiles[i];
        if t.is_start() || t.is_goal() {
            return false;
        }
        t.state = TileState::Path;
        true
    }

    /// Re-assert the goal tile's state.
    pub fn mark_goal(&mut self) {
        let goal = self.goal;
        self.tile_mut(goal).state = TileState::Goal;
    }

    // --- editing ---

    /// Turn an empty tile into an obstacle. Returns whether it changed.
    pub fn place_obstacle(&mut self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) if self.tiles[i].is_empty() => {
                self.tiles[i].state = TileState::Obstacle;
                true
            }
            _ => false,
        }
    }

    /// Turn an obstacle back into an empty tile. Returns whether it changed.
    pub fn erase_obstacle(&mut self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) if self.tiles[i].is_obstacle() => {
                self.tiles[i].reset();
                true
            }
            _ => false,
        }
    }

    /// Move the start marker onto the empty tile `p`.
    pub fn move_start(&mut self, p: Point) -> Result<(), GridError> {
        self.check(p)?;
        if p == self.start {
            return Ok(());
        }
        if !self.tile_mut(p).is_empty() {
            return Err(GridError::Occupied(p));
        }
        let old = self.start;
        self.tile_mut(old).reset();
        self.tile_mut(p).state = TileState::Start;
        self.start = p;
        Ok(())
    }

    /// Move the goal marker onto the empty tile `p`.
    pub fn move_goal(&mut self, p: Point) -> Result<(), GridError> {
        self.check(p)?;
        if p == self.goal {
            return Ok(());
        }
        if !self.tile_mut(p).is_empty() {
            return Err(GridError::Occupied(p));
        }
        let old = self.goal;
        self.tile_mut(old).reset();
        self.tile_mut(p).state = TileState::Goal;
        self.goal = p;
        Ok(())
    }

    /// Reset every tile except start and goal to empty.
    pub fn clear(&mut self) {
        for t in self.tiles.iter_mut() {
            if !t.is_start() && !t.is_goal() {
                t.reset();
            }
        }
    }

    /// Remove the marks left by a search, keeping obstacles.
    pub fn purge(&mut self) {
        for t in self.tiles.iter_mut() {
            if t.state.is_search_mark() {
                t.reset();
            }
            t.label = None;
        }
    }

    /// Whether any tile carries a `Visited` or `Path` mark.
    pub fn has_search_marks(&self) -> bool {
        self.tiles.iter().any(|t| t.state.is_search_mark())
    }

    /// Replace the whole layout with `preset`: everything is cleared, the
    /// obstacles that fit are placed, then start and goal are moved.
    pub fn apply_preset(&mut self, preset: Preset) -> Result<(), GridError> {
        let (start, goal) = (preset.start(), preset.goal());
        self.check(start)?;
        self.check(goal)?;
        if start == goal {
            return Err(GridError::Occupied(goal));
        }
        for t in self.tiles.iter_mut() {
            t.reset();
        }
        for p in preset.obstacles() {
            if p != start && p != goal {
                self.place_obstacle(p);
            }
        }
        self.tile_mut(start).state = TileState::Start;
        self.tile_mut(goal).state = TileState::Goal;
        self.start = start;
        self.goal = goal;
        Ok(())
    }
}

impl Default for TileGrid {
    /// The 25×50 grid with start at row 3, col 3 and goal at row 21, col 46.
    fn default() -> Self {
        let mut grid = Self::blank(
            MAX_ROWS,
            MAX_COLS,
            Layout::default(),
            Point::from_row_col(3, 3),
            Point::from_row_col(21, 46),
        );
        grid.tile_mut(grid.start).state = TileState::Start;
        grid.tile_mut(grid.goal).state = TileState::Goal;
        grid
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
