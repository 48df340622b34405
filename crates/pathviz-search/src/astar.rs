use std::time::Duration;

use pathviz_core::{BusyFlag, Point};

use crate::canvas::Canvas;
use crate::error::SearchError;
use crate::neighbors::GridPather;
use crate::search::{Algorithm, Outcome, Search};
use crate::traits::AstarPather;

impl Search {
    /// A* search from `start` to `goal`: Dijkstra's admission rule with the
    /// Manhattan estimate added to each queue priority.
    ///
    /// See [`Search::run`] for the busy-flag contract.
    pub fn astar<C: Canvas>(
        &mut self,
        canvas: &mut C,
        start: Point,
        goal: Point,
        busy: &BusyFlag,
    ) -> Result<Outcome, SearchError> {
        self.run(Algorithm::AStar, canvas, start, goal, busy)
    }

    pub(crate) fn astar_loop<C: Canvas>(
        &mut self,
        pather: &GridPather,
        canvas: &mut C,
        start: Point,
        goal: Point,
        step: Duration,
    ) -> bool {
        self.weighted_loop(pather, canvas, start, goal, step, |p| {
            pather.estimate(p, goal)
        })
    }
}
