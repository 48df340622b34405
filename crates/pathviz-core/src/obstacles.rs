//! Set of blocked coordinates, rebuilt from the grid before every search.

use std::collections::HashSet;

use crate::geom::Point;
use crate::grid::TileGrid;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    blocked: HashSet<Point>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the set and repopulate it by scanning `grid`.
    pub fn rebuild(&mut self, grid: &TileGrid) {
        self.blocked.clear();
        self.blocked
            .extend(grid.tiles().filter(|t| t.is_obstacle()).map(|t| t.pos()));
    }

    /// Build a fresh set from `grid`.
    pub fn scan(grid: &TileGrid) -> Self {
        let mut set = Self::new();
        set.rebuild(grid);
        set
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

impl FromIterator<Point> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            blocked: iter.into_iter().collect(),
        }
    }
}
