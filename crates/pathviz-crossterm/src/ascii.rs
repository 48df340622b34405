//! Plain-text rendering of a [`TileGrid`], for headless runs.

use pathviz_core::{TileGrid, TileState};

/// One character per tile, one line per row.
///
/// `.` empty, `#` obstacle, `S` start, `G` goal, `o` visited, `*` path.
/// With `vectors`, visited and path tiles show their direction arrow.
pub fn render_ascii(grid: &TileGrid, vectors: bool) -> String {
    let mut out = String::with_capacity(((grid.cols() + 1) * grid.rows()) as usize);
    for (i, tile) in grid.tiles().enumerate() {
        let ch = match (tile.state, tile.label) {
            (TileState::Visited | TileState::Path, Some(d)) if vectors => d.arrow(),
            (TileState::Empty, _) => '.',
            (TileState::Obstacle, _) => '#',
            (TileState::Start, _) => 'S',
            (TileState::Goal, _) => 'G',
            (TileState::Visited, _) => 'o',
            (TileState::Path, _) => '*',
        };
        out.push(ch);
        if (i as i32 + 1) % grid.cols() == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{BusyFlag, Point};
    use pathviz_search::{Pacing, Search};

    #[test]
    fn renders_rows_top_to_bottom() {
        let mut grid = TileGrid::new(2, 3, Point::new(0, 0), Point::new(2, 1)).unwrap();
        grid.place_obstacle(Point::new(1, 1));
        assert_eq!(render_ascii(&grid, false), "S..\n.#G\n");
    }

    #[test]
    fn renders_a_finished_search() {
        let mut grid = TileGrid::new(1, 4, Point::new(0, 0), Point::new(3, 0)).unwrap();
        Search::with_pacing(Pacing::NONE)
            .bfs(&mut grid, Point::new(0, 0), Point::new(3, 0), &BusyFlag::new())
            .unwrap();
        assert_eq!(render_ascii(&grid, false), "S**G\n");
        assert_eq!(render_ascii(&grid, true), "S←←G\n");
    }

    #[test]
    fn vertical_arrows_follow_column_flow() {
        let down = Point::new(0, 3);
        let mut grid = TileGrid::new(4, 1, Point::new(0, 0), down).unwrap();
        Search::with_pacing(Pacing::NONE)
            .bfs(&mut grid, Point::new(0, 0), down, &BusyFlag::new())
            .unwrap();
        assert_eq!(render_ascii(&grid, true), "S\n↓\n↓\nG\n");

        let mut grid = TileGrid::new(4, 1, down, Point::new(0, 0)).unwrap();
        Search::with_pacing(Pacing::NONE)
            .bfs(&mut grid, down, Point::new(0, 0), &BusyFlag::new())
            .unwrap();
        assert_eq!(render_ascii(&grid, true), "G\n↑\n↑\nS\n");
    }
}
