//! The [`Tile`] type and its logical [`TileState`].

use crate::geom::{Point, Rect};

/// Logical state of a tile.
///
/// `Visited` and `Path` are written by searches; the rest by the editor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    #[default]
    Empty,
    Obstacle,
    Start,
    Goal,
    Visited,
    Path,
}

impl TileState {
    /// Whether the state was produced by a search run.
    #[inline]
    pub fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Path)
    }
}

/// One of the four axis-aligned step directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Base expansion order: east, west, north, south.
    pub const ALL: [Direction; 4] = [Self::East, Self::West, Self::North, Self::South];

    /// Unit step of this direction (north is `y - 1`).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::East => Point::new(1, 0),
            Self::West => Point::new(-1, 0),
            Self::North => Point::new(0, -1),
            Self::South => Point::new(0, 1),
        }
    }

    /// Label for `p` given the tile `from` that discovered it.
    ///
    /// Horizontally the label points back at `from`. Vertically it is
    /// mirrored: a predecessor below (larger y) gives `North`, so the arrow
    /// view shows the flow along each column rather than the backpointer.
    pub fn toward(p: Point, from: Point) -> Self {
        if from.x > p.x {
            Self::East
        } else if from.x < p.x {
            Self::West
        } else if from.y > p.y {
            Self::North
        } else {
            Self::South
        }
    }

    /// Arrow glyph used by the vector-field view.
    pub const fn arrow(self) -> char {
        match self {
            Self::East => '→',
            Self::West => '←',
            Self::North => '↑',
            Self::South => '↓',
        }
    }
}

/// A grid tile: fixed slot, screen rectangle, state and optional label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub row: i32,
    pub col: i32,
    pub rect: Rect,
    pub state: TileState,
    pub label: Option<Direction>,
}

impl Tile {
    pub fn new(row: i32, col: i32, rect: Rect) -> Self {
        Self {
            row,
            col,
            rect,
            state: TileState::Empty,
            label: None,
        }
    }

    /// Grid coordinate of this tile.
    #[inline]
    pub fn pos(&self) -> Point {
        Point::from_row_col(self.row, self.col)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == TileState::Empty
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.state == TileState::Obstacle
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == TileState::Start
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.state == TileState::Goal
    }

    /// Reset to empty, dropping any label.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.state = TileState::Empty;
        self.label = None;
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let mut t = Tile::new(1, 2, Rect::new(3, 4, 5, 6));
        t.state = TileState::Visited;
        t.label = Some(Direction::North);
        let json = serde_json::to_string(&t).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
