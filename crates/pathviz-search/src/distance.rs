use pathviz_core::Point;

/// Cost of a straight step.
pub const STEP_COST: f64 = 1.0;
/// Cost of a nudged step, slightly above [`STEP_COST`].
pub const NUDGE_COST: f64 = 1.001;

/// Manhattan (L1) distance between two points, as a heuristic value.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    f64::from((b.x - a.x).abs() + (b.y - a.y).abs())
}

/// Step cost from `from` to the adjacent `to`.
///
/// Leaving a tile with even `x + y` horizontally, or one with odd `x + y`
/// vertically, costs [`NUDGE_COST`]; every other step costs [`STEP_COST`].
/// Among paths of equal length this favours alternating moves, which draws
/// staircase paths instead of L-shapes.
#[inline]
pub fn nudge_cost(from: Point, to: Point) -> f64 {
    let nudge = if from.is_even() {
        to.x != from.x
    } else {
        to.y != from.y
    };
    if nudge { NUDGE_COST } else { STEP_COST }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(3, 3);
        let b = Point::new(46, 21);
        assert_eq!(manhattan(a, b), 61.0);
        assert_eq!(manhattan(b, a), 61.0);
        assert_eq!(manhattan(a, a), 0.0);
    }

    #[test]
    fn even_tiles_nudge_horizontal_moves() {
        let p = Point::new(2, 2);
        assert_eq!(nudge_cost(p, Point::new(3, 2)), NUDGE_COST);
        assert_eq!(nudge_cost(p, Point::new(1, 2)), NUDGE_COST);
        assert_eq!(nudge_cost(p, Point::new(2, 1)), STEP_COST);
        assert_eq!(nudge_cost(p, Point::new(2, 3)), STEP_COST);
    }

    #[test]
    fn odd_tiles_nudge_vertical_moves() {
        let p = Point::new(2, 3);
        assert_eq!(nudge_cost(p, Point::new(3, 3)), STEP_COST);
        assert_eq!(nudge_cost(p, Point::new(1, 3)), STEP_COST);
        assert_eq!(nudge_cost(p, Point::new(2, 2)), NUDGE_COST);
        assert_eq!(nudge_cost(p, Point::new(2, 4)), NUDGE_COST);
    }

    #[test]
    fn costs_are_exact_literals() {
        assert_eq!(nudge_cost(Point::ZERO, Point::new(1, 0)), 1.001);
        assert_eq!(nudge_cost(Point::ZERO, Point::new(0, 1)), 1.0);
    }
}
