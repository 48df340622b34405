//! Geometry primitives: [`Point`], [`Rect`] and the tile [`Layout`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid coordinate. `x` is the column, `y` is the row (Y grows down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from a `(row, col)` pair.
    #[inline]
    pub const fn from_row_col(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    /// Whether `x + y` is even. Drives the neighbor-order and cost nudges.
    #[inline]
    pub const fn is_even(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 0
    }
}

// --- trait impls for Point ---

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x ^ (self.y << 4)).hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A screen rectangle attached to every tile.
///
/// The search engine never looks inside it; front ends use it for drawing
/// and mouse hit-testing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the screen position `p` falls inside the rectangle.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Placement of tiles on screen: top-left origin, tile size and the gap
/// between neighbouring tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub origin: Point,
    pub tile_width: i32,
    pub tile_height: i32,
    pub gap: i32,
}

impl Layout {
    /// Pixel layout of the windowed visualizer: 25×25 tiles with a one
    /// pixel gap, starting below the button bar.
    pub const WINDOW: Self = Self {
        origin: Point::new(30, 150),
        tile_width: 25,
        tile_height: 25,
        gap: 1,
    };

    /// Character-cell layout: each tile is two columns wide, one row high.
    pub const fn terminal(origin: Point) -> Self {
        Self {
            origin,
            tile_width: 2,
            tile_height: 1,
            gap: 0,
        }
    }

    /// Screen rectangle of the tile at `(row, col)`.
    pub fn rect(&self, row: i32, col: i32) -> Rect {
        Rect::new(
            self.origin.x + col * (self.tile_width + self.gap),
            self.origin.y + row * (self.tile_height + self.gap),
            self.tile_width,
            self.tile_height,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::WINDOW
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
