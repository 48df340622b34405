//! Built-in obstacle layouts for the default 25×50 grid.

use crate::geom::Point;

/// A preset obstacle layout with its own start and goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// Four rectangular blocks.
    Blocks,
    /// A hook-shaped wall bending around the goal.
    Hook,
    /// A diagonal cross between start and goal.
    Cross,
}

// (row_lo, row_hi, col_lo, col_hi), inclusive.
const BLOCKS: [(i32, i32, i32, i32); 4] = [
    (0, 11, 38, 41),
    (8, 11, 42, 45),
    (3, 20, 3, 9),
    (6, 24, 18, 26),
];

// (row, col)
const HOOK: [(i32, i32); 40] = [
    (6, 19), (6, 20), (6, 21), (6, 22), (6, 23), (6, 24), (6, 25), (6, 26), (6, 27), (6, 28),
    (6, 29), (6, 30), (7, 30), (8, 30), (9, 30), (10, 30), (11, 30), (12, 30), (13, 30), (14, 30),
    (15, 30), (16, 30), (17, 30), (18, 14), (18, 15), (18, 16), (18, 17), (18, 18), (18, 19),
    (18, 20), (18, 21), (18, 22), (18, 23), (18, 24), (18, 25), (18, 26), (18, 27), (18, 28),
    (18, 29), (18, 30),
];

const CROSS: [(i32, i32); 21] = [
    (6, 19), (6, 29), (7, 20), (7, 28), (8, 21), (8, 27), (9, 22), (9, 26), (10, 23), (10, 25),
    (11, 24), (12, 23), (12, 25), (13, 22), (13, 26), (14, 21), (14, 27), (15, 20), (15, 28),
    (16, 19), (16, 29),
];

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Blocks, Self::Hook, Self::Cross];

    /// Preset bound to number key `n` (1-based).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Blocks),
            2 => Some(Self::Hook),
            3 => Some(Self::Cross),
            _ => None,
        }
    }

    pub fn start(self) -> Point {
        match self {
            Self::Blocks => Point::from_row_col(14, 14),
            Self::Hook => Point::from_row_col(18, 12),
            Self::Cross => Point::from_row_col(11, 14),
        }
    }

    pub fn goal(self) -> Point {
        match self {
            Self::Blocks => Point::from_row_col(1, 43),
            Self::Hook => Point::from_row_col(5, 27),
            Self::Cross => Point::from_row_col(11, 34),
        }
    }

    /// Obstacle coordinates of the layout.
    pub fn obstacles(self) -> Box<dyn Iterator<Item = Point>> {
        match self {
            Self::Blocks => Box::new(BLOCKS.into_iter().flat_map(|(r0, r1, c0, c1)| {
                (r0..=r1).flat_map(move |r| (c0..=c1).map(move |c| Point::from_row_col(r, c)))
            })),
            Self::Hook => Box::new(HOOK.into_iter().map(|(r, c)| Point::from_row_col(r, c))),
            Self::Cross => Box::new(CROSS.into_iter().map(|(r, c)| Point::from_row_col(r, c))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn blocks_cover_their_rectangles() {
        let set: HashSet<Point> = Preset::Blocks.obstacles().collect();
        assert_eq!(set.len(), 12 * 4 + 4 * 4 + 18 * 7 + 19 * 9);
        assert!(set.contains(&Point::from_row_col(0, 38)));
        assert!(set.contains(&Point::from_row_col(24, 26)));
        assert!(!set.contains(&Point::from_row_col(12, 38)));
    }

    #[test]
    fn endpoints_are_never_blocked() {
        for p in Preset::ALL {
            let set: HashSet<Point> = p.obstacles().collect();
            assert!(!set.contains(&p.start()), "{p:?}");
            assert!(!set.contains(&p.goal()), "{p:?}");
        }
    }

    #[test]
    fn number_keys() {
        assert_eq!(Preset::from_number(2), Some(Preset::Hook));
        assert_eq!(Preset::from_number(0), None);
        assert_eq!(Preset::from_number(4), None);
    }
}
