use pathviz_core::{Direction, ObstacleSet, Point};

use crate::distance::{manhattan, nudge_cost};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// The four-way grid model shared by all three searches.
///
/// Owns the obstacle snapshot taken when the search started, so the grid
/// itself is only needed for writing marks.
#[derive(Debug, Clone, Default)]
pub struct GridPather {
    rows: i32,
    cols: i32,
    obstacles: ObstacleSet,
}

impl GridPather {
    pub fn new(rows: i32, cols: i32, obstacles: ObstacleSet) -> Self {
        Self {
            rows,
            cols,
            obstacles,
        }
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        0 <= p.x && p.x < self.cols && 0 <= p.y && p.y < self.rows
    }

    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.obstacles.contains(p)
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Give the obstacle set back for reuse.
    pub(crate) fn into_obstacles(self) -> ObstacleSet {
        self.obstacles
    }
}

impl Pather for GridPather {
    /// East, west, north, south; reversed when `x + y` is even.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let first = buf.len();
        for d in Direction::ALL {
            let n = p + d.delta();
            if self.in_bounds(n) && self.passable(n) {
                buf.push(n);
            }
        }
        // Nudge the order so BFS paths come out as staircases.
        if p.is_even() {
            buf[first..].reverse();
        }
    }
}

impl WeightedPather for GridPather {
    fn cost(&self, from: Point, to: Point) -> f64 {
        nudge_cost(from, to)
    }
}

impl AstarPather for GridPather {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(rows: i32, cols: i32) -> GridPather {
        GridPather::new(rows, cols, ObstacleSet::new())
    }

    fn neighbors_of(pather: &GridPather, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        pather.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn odd_parity_keeps_base_order() {
        let p = Point::new(2, 3);
        assert_eq!(
            neighbors_of(&open(10, 10), p),
            vec![
                Point::new(3, 3), // east
                Point::new(1, 3), // west
                Point::new(2, 2), // north
                Point::new(2, 4), // south
            ]
        );
    }

    #[test]
    fn even_parity_reverses_order() {
        let p = Point::new(3, 3);
        assert_eq!(
            neighbors_of(&open(10, 10), p),
            vec![
                Point::new(3, 4), // south
                Point::new(3, 2), // north
                Point::new(2, 3), // west
                Point::new(4, 3), // east
            ]
        );
    }

    #[test]
    fn bounds_and_obstacles_are_filtered() {
        let obstacles: ObstacleSet = [Point::new(1, 0)].into_iter().collect();
        let pather = GridPather::new(3, 3, obstacles);
        // (0, 0) is even: base order would be [south] after filtering east/west/north.
        assert_eq!(neighbors_of(&pather, Point::new(0, 0)), vec![Point::new(0, 1)]);
        // (2, 1) is odd: west and north/south survive, east is out of bounds.
        assert_eq!(
            neighbors_of(&pather, Point::new(2, 1)),
            vec![Point::new(1, 1), Point::new(2, 0), Point::new(2, 2)]
        );
    }

    #[test]
    fn reversal_only_touches_appended_points() {
        let pather = open(5, 5);
        let mut buf = vec![Point::new(9, 9)];
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(9, 9), Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn weighted_and_heuristic_delegate() {
        let pather = open(5, 5);
        assert_eq!(pather.cost(Point::new(0, 0), Point::new(1, 0)), 1.001);
        assert_eq!(pather.estimate(Point::new(0, 0), Point::new(4, 3)), 7.0);
    }
}
