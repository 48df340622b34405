use clap::{Parser, ValueEnum};
use std::time::Duration;

use pathviz_core::{MAX_COLS, MAX_ROWS, Point};
use pathviz_search::{Algorithm, Pacing};

#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(author, version, about)]
#[command(long_about = "Watch BFS, Dijkstra and A* explore a grid.\n\n\
    Draw walls with the left mouse button, drag S and G to move them,\n\
    erase with the right button, and press Enter to search.\n\n\
    Examples:\n  \
    pathviz                      Empty 25x50 grid\n  \
    pathviz --preset 2 -a astar  Hook preset with A*\n  \
    pathviz --headless -a astar  Print the finished search and exit")]
pub struct Cli {
    /// Grid rows
    #[arg(long, default_value_t = MAX_ROWS, value_parser = clap::value_parser!(i32).range(2..=200))]
    pub rows: i32,

    /// Grid columns
    #[arg(long, default_value_t = MAX_COLS, value_parser = clap::value_parser!(i32).range(2..=200))]
    pub cols: i32,

    /// Algorithm selected at startup
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Bfs)]
    pub algorithm: AlgorithmArg,

    /// Load a preset layout (only on the default 25x50 grid)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub preset: Option<u8>,

    /// Disable all animation delays
    #[arg(long)]
    pub fast: bool,

    /// Delay after each discovered tile, in milliseconds
    #[arg(long, conflicts_with = "fast")]
    pub step_ms: Option<u64>,

    /// Delay after each path tile, in milliseconds
    #[arg(long, conflicts_with = "fast")]
    pub path_ms: Option<u64>,

    /// Start with direction arrows shown on explored tiles
    #[arg(long)]
    pub vectors: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Run the search once without a terminal UI and print the grid
    #[arg(long)]
    pub headless: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    Bfs,
    Dijkstra,
    Astar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Bfs => Algorithm::Bfs,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::Astar => Algorithm::AStar,
        }
    }
}

impl Cli {
    /// Animation delays after applying `--fast`, `--step-ms` and `--path-ms`.
    pub fn pacing(&self) -> Pacing {
        if self.fast {
            return Pacing::NONE;
        }
        let mut pacing = Pacing::default();
        if let Some(ms) = self.step_ms {
            let step = Duration::from_millis(ms);
            pacing = Pacing::uniform(step, pacing.path);
        }
        if let Some(ms) = self.path_ms {
            pacing.path = Duration::from_millis(ms);
        }
        pacing
    }

    /// Start and goal for the chosen size: three tiles in from the top-left
    /// and bottom-right corners, which is (3, 3) and (21, 46) on 25x50.
    pub fn endpoints(&self) -> (Point, Point) {
        let inset = |n: i32| 3.min(n - 1);
        let start = Point::from_row_col(inset(self.rows), inset(self.cols));
        let goal = Point::from_row_col(
            self.rows - 1 - inset(self.rows),
            self.cols - 1 - inset(self.cols),
        );
        if goal == start {
            (start, Point::from_row_col(self.rows - 1, self.cols - 1))
        } else {
            (start, goal)
        }
    }
}
