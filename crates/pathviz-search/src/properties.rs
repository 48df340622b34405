//! Whole-engine checks: fixed scenarios plus seeded random grids.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathviz_core::{BusyFlag, Point, TileGrid, TileState};

use crate::distance::{NUDGE_COST, manhattan};
use crate::neighbors::GridPather;
use crate::search::{Algorithm, Outcome, Pacing, Search};
use crate::traits::Pather;

fn run(grid: &mut TileGrid, algorithm: Algorithm) -> (Search, Outcome) {
    let (start, goal) = (grid.start(), grid.goal());
    let mut search = Search::with_pacing(Pacing::NONE);
    let busy = BusyFlag::new();
    let outcome = search.run(algorithm, grid, start, goal, &busy).unwrap();
    assert!(!busy.is_busy());
    (search, outcome)
}

/// Every tile reachable from the start over non-obstacle tiles.
fn reachable(grid: &TileGrid) -> HashSet<Point> {
    let pather = GridPather::new(
        grid.rows(),
        grid.cols(),
        pathviz_core::ObstacleSet::scan(grid),
    );
    let mut seen = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([grid.start()]);
    let mut buf = Vec::new();
    while let Some(p) = queue.pop_front() {
        buf.clear();
        pather.neighbors(p, &mut buf);
        for &q in &buf {
            if seen.insert(q) {
                queue.push_back(q);
            }
        }
    }
    seen
}

fn marked(grid: &TileGrid, state: TileState) -> Vec<Point> {
    grid.tiles()
        .filter(|t| t.state == state)
        .map(|t| t.pos())
        .collect()
}

fn random_grid(rng: &mut StdRng, density: f64) -> TileGrid {
    let rows = rng.random_range(3..16);
    let cols = rng.random_range(3..24);
    let start = Point::new(rng.random_range(0..cols), rng.random_range(0..rows));
    let goal = loop {
        let p = Point::new(rng.random_range(0..cols), rng.random_range(0..rows));
        if p != start {
            break p;
        }
    };
    let mut grid = TileGrid::new(rows, cols, start, goal).unwrap();
    for y in 0..rows {
        for x in 0..cols {
            if rng.random_bool(density) {
                grid.place_obstacle(Point::new(x, y));
            }
        }
    }
    grid
}

#[test]
fn doorway_forces_path_through_single_gap() {
    let door = Point::from_row_col(10, 25);
    for algorithm in Algorithm::ALL {
        let mut grid = TileGrid::default();
        for col in 0..grid.cols() {
            if col != 25 {
                grid.place_obstacle(Point::from_row_col(10, col));
            }
        }
        let (_, outcome) = run(&mut grid, algorithm);
        let path = outcome.path().expect("doorway is open");
        assert!(path.contains(&door), "{algorithm} avoided the doorway");
        assert_eq!(grid.state(door), Some(TileState::Path));
        // Start (3, 3) -> door (10, 25) -> goal (21, 46), no detour needed.
        assert_eq!(path.len(), 7 + 22 + 11 + 21, "{algorithm}");
    }
}

#[test]
fn enclosed_goal_is_exhausted_without_path() {
    for algorithm in Algorithm::ALL {
        let mut grid = TileGrid::default();
        let goal = grid.goal();
        for d in [Point::new(1, 0), Point::new(-1, 0), Point::new(0, 1), Point::new(0, -1)] {
            grid.place_obstacle(goal + d);
        }
        let (search, outcome) = run(&mut grid, algorithm);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(grid.count(TileState::Path), 0);
        assert_eq!(grid.state(goal), Some(TileState::Goal));
        assert!(search.came_from(goal).is_none());
        // Everything outside the enclosure was explored.
        assert_eq!(grid.count(TileState::Visited), 25 * 50 - 4 - 2);
    }
}

#[test]
fn bfs_frontier_grows_on_open_grid() {
    let mut grid = TileGrid::default();
    let (search, outcome) = run(&mut grid, Algorithm::Bfs);
    assert_eq!(outcome.path().map(<[Point]>::len), Some(61));
    assert!(search.stats().max_frontier >= 2);
    assert!(search.stats().expanded <= 25 * 50);
}

#[test]
fn open_grids_give_manhattan_paths_for_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let grid = random_grid(&mut rng, 0.0);
        let (start, goal) = (grid.start(), grid.goal());
        let edges = manhattan(start, goal);
        for algorithm in Algorithm::ALL {
            let mut g = grid.clone();
            let (search, outcome) = run(&mut g, algorithm);
            let len = outcome.path().unwrap().len();
            assert_eq!(len as f64, edges, "{algorithm} {start} -> {goal}");
            if algorithm != Algorithm::Bfs {
                let cost = search.cost_so_far(goal).unwrap();
                assert!(cost >= edges && cost <= edges * NUDGE_COST + 1e-9);
            }
        }
    }
}

#[test]
fn random_grids_keep_backpointer_and_reachability_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..60 {
        let grid = random_grid(&mut rng, 0.3);
        let reach = reachable(&grid);
        let mut lengths = Vec::new();
        for algorithm in Algorithm::ALL {
            let mut g = grid.clone();
            let (search, outcome) = run(&mut g, algorithm);

            assert_eq!(search.came_from(g.start()), Some(g.start()));
            for (p, from) in search.backpointers() {
                assert!(p == g.start() || p != from, "stray self-loop at {p}");
                assert!(reach.contains(&p));
            }
            for p in marked(&g, TileState::Visited)
                .into_iter()
                .chain(marked(&g, TileState::Path))
            {
                assert!(reach.contains(&p), "{algorithm} marked unreachable {p}");
            }
            assert_eq!(outcome.is_found(), reach.contains(&g.goal()));
            assert_eq!(g.count(TileState::Start), 1);
            assert_eq!(g.count(TileState::Goal), 1);
            lengths.push(outcome.path().map(<[Point]>::len));
        }
        assert!(lengths.iter().all(|l| *l == lengths[0]), "{lengths:?}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let grid = random_grid(&mut rng, 0.2);
        for algorithm in Algorithm::ALL {
            let mut first = grid.clone();
            let (_, a) = run(&mut first, algorithm);

            let mut second = first.clone();
            second.purge();
            let (_, b) = run(&mut second, algorithm);

            assert_eq!(a, b, "{algorithm}");
            assert_eq!(first, second, "{algorithm}");
        }
    }
}
