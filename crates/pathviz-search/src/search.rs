use std::collections::HashMap;
use std::fmt;
use std::thread;
use std::time::Duration;

use pathviz_core::{BusyFlag, BusyGuard, Direction, ObstacleSet, Point};

use crate::canvas::Canvas;
use crate::error::SearchError;
use crate::neighbors::GridPather;

// ---------------------------------------------------------------------------
// Algorithm / pacing
// ---------------------------------------------------------------------------

/// The three search algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dijkstra, Self::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visualization delays. None of them affect the result of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after each BFS admission.
    pub bfs: Duration,
    /// Pause after each Dijkstra admission.
    pub dijkstra: Duration,
    /// Pause after each A* admission.
    pub astar: Duration,
    /// Pause after each path tile is drawn.
    pub path: Duration,
}

impl Pacing {
    /// No delays at all, for tests and headless runs.
    pub const NONE: Self = Self {
        bfs: Duration::ZERO,
        dijkstra: Duration::ZERO,
        astar: Duration::ZERO,
        path: Duration::ZERO,
    };

    /// Same delay after every admission, regardless of algorithm.
    pub fn uniform(step: Duration, path: Duration) -> Self {
        Self {
            bfs: step,
            dijkstra: step,
            astar: step,
            path,
        }
    }

    /// Admission delay for `algorithm`.
    pub fn step(&self, algorithm: Algorithm) -> Duration {
        match algorithm {
            Algorithm::Bfs => self.bfs,
            Algorithm::Dijkstra => self.dijkstra,
            Algorithm::AStar => self.astar,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            bfs: Duration::from_millis(3),
            dijkstra: Duration::from_millis(3),
            astar: Duration::from_millis(6),
            path: Duration::from_millis(40),
        }
    }
}

#[inline]
pub(crate) fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

// ---------------------------------------------------------------------------
// Outcome / state / stats
// ---------------------------------------------------------------------------

/// Where the search state machine currently is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Running,
    Found,
    Exhausted,
}

/// Result of a finished search.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The goal was dequeued. `path` runs from the first step after the
    /// start up to and including the goal.
    Found { path: Vec<Point> },
    /// The frontier emptied first; the goal is unreachable.
    Exhausted,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The materialized path, if any.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path } => Some(path),
            Self::Exhausted => None,
        }
    }
}

/// Counters from the most recent run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops, including stale duplicates in Dijkstra/A*.
    pub expanded: usize,
    /// Neighbor admissions.
    pub admitted: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Search engine: bookkeeping that survives between runs and is rebuilt on
/// every entry.
///
/// The algorithms live in `bfs.rs`, `dijkstra.rs` and `astar.rs`; this file
/// holds the shared entry, admission and exit logic.
#[derive(Debug, Default)]
pub struct Search {
    pub(crate) pacing: Pacing,
    pub(crate) obstacles: ObstacleSet,
    pub(crate) came_from: HashMap<Point, Point>,
    pub(crate) cost_so_far: HashMap<Point, f64>,
    pub(crate) nbuf: Vec<Point>,
    state: SearchState,
    pub(crate) stats: SearchStats,
}

impl Search {
    /// Create an engine with the default visualization delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit delays.
    pub fn with_pacing(pacing: Pacing) -> Self {
        Self {
            pacing,
            ..Self::default()
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Predecessor recorded for `p` by the last run. The start maps to itself.
    pub fn came_from(&self, p: Point) -> Option<Point> {
        self.came_from.get(&p).copied()
    }

    /// All `(coordinate, predecessor)` pairs from the last run.
    pub fn backpointers(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.came_from.iter().map(|(&p, &from)| (p, from))
    }

    /// Cheapest known cost from the start to `p` (Dijkstra/A* only).
    pub fn cost_so_far(&self, p: Point) -> Option<f64> {
        self.cost_so_far.get(&p).copied()
    }

    /// Run `algorithm` from `start` to `goal`, painting onto `canvas`.
    ///
    /// Fails with [`SearchError::Busy`] without touching the grid if `busy`
    /// is already raised. `start` and `goal` must be the grid's own markers,
    /// otherwise [`SearchError::NotEndpoint`] is returned before any painting.
    /// The flag is lowered again on every exit path.
    pub fn run<C: Canvas>(
        &mut self,
        algorithm: Algorithm,
        canvas: &mut C,
        start: Point,
        goal: Point,
        busy: &BusyFlag,
    ) -> Result<Outcome, SearchError> {
        let Some(guard) = busy.try_acquire() else {
            log::warn!("{algorithm} search rejected: another search is running");
            return Err(SearchError::Busy);
        };
        self.run_guarded(algorithm, canvas, start, goal, guard)
    }

    /// Run with a busy guard the caller already holds. The guard is
    /// dropped, and the flag lowered, when this returns.
    pub(crate) fn run_guarded<C: Canvas>(
        &mut self,
        algorithm: Algorithm,
        canvas: &mut C,
        start: Point,
        goal: Point,
        _guard: BusyGuard,
    ) -> Result<Outcome, SearchError> {
        let pather = self.enter(canvas, start, goal)?;
        log::debug!(
            "{algorithm} search from {start} to {goal}, {} obstacles",
            pather.obstacles().len()
        );
        let step = self.pacing.step(algorithm);
        let found = match algorithm {
            Algorithm::Bfs => self.bfs_loop(&pather, canvas, start, goal, step),
            Algorithm::Dijkstra => self.dijkstra_loop(&pather, canvas, start, goal, step),
            Algorithm::AStar => self.astar_loop(&pather, canvas, start, goal, step),
        };
        self.obstacles = pather.into_obstacles();

        let outcome = if found {
            self.state = SearchState::Found;
            let path = self.reconstruct(start, goal)?;
            self.materialize(canvas, &path);
            Outcome::Found { path }
        } else {
            self.state = SearchState::Exhausted;
            Outcome::Exhausted
        };
        log::debug!(
            "{algorithm} search finished: {}, {} expanded, {} admitted",
            match &outcome {
                Outcome::Found { path } => format!("path of {} steps", path.len()),
                Outcome::Exhausted => "goal unreachable".to_string(),
            },
            self.stats.expanded,
            self.stats.admitted
        );
        Ok(outcome)
    }

    /// Entry actions: reset bookkeeping, snapshot obstacles, check endpoints.
    fn enter<C: Canvas>(
        &mut self,
        canvas: &C,
        start: Point,
        goal: Point,
    ) -> Result<GridPather, SearchError> {
        self.state = SearchState::Idle;
        self.came_from.clear();
        self.cost_so_far.clear();
        self.stats = SearchStats::default();

        let mut obstacles = std::mem::take(&mut self.obstacles);
        let (rows, cols, marked) = canvas.inspect(|g| {
            obstacles.rebuild(g);
            (g.rows(), g.cols(), [g.start(), g.goal()])
        });
        let pather = GridPather::new(rows, cols, obstacles);
        for p in [start, goal] {
            if !pather.in_bounds(p) {
                self.obstacles = pather.into_obstacles();
                return Err(SearchError::OutOfBounds(p));
            }
        }
        // Goal re-assertion and path painting write the grid's own markers.
        for (p, m) in [start, goal].into_iter().zip(marked) {
            if p != m {
                self.obstacles = pather.into_obstacles();
                return Err(SearchError::NotEndpoint(p));
            }
        }
        self.state = SearchState::Running;
        Ok(pather)
    }

    /// Admission side effects shared by all three algorithms: paint `next`
    /// (or re-assert the goal), update counters, then pause.
    pub(crate) fn admit<C: Canvas>(
        &mut self,
        canvas: &mut C,
        next: Point,
        current: Point,
        goal: Point,
        frontier_len: usize,
        step: Duration,
    ) {
        self.stats.admitted += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(frontier_len);
        if next == goal {
            canvas.paint(|g| g.mark_goal());
        } else {
            let label = Direction::toward(next, current);
            canvas.paint(|g| g.mark_visited(next, Some(label)));
        }
        pause(step);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
