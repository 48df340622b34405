use std::time::Duration;

use pathviz_core::{BusyFlag, Point};

use crate::canvas::Canvas;
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::neighbors::GridPather;
use crate::search::{Algorithm, Outcome, Search};
use crate::traits::{Pather, WeightedPather};

impl Search {
    /// Dijkstra search from `start` to `goal` using the nudged step cost.
    ///
    /// A tile is (re-)admitted whenever a strictly cheaper route to it is
    /// found. See [`Search::run`] for the busy-flag contract.
    pub fn dijkstra<C: Canvas>(
        &mut self,
        canvas: &mut C,
        start: Point,
        goal: Point,
        busy: &BusyFlag,
    ) -> Result<Outcome, SearchError> {
        self.run(Algorithm::Dijkstra, canvas, start, goal, busy)
    }

    pub(crate) fn dijkstra_loop<C: Canvas>(
        &mut self,
        pather: &GridPather,
        canvas: &mut C,
        start: Point,
        goal: Point,
        step: Duration,
    ) -> bool {
        self.weighted_loop(pather, canvas, start, goal, step, |_| 0.0)
    }

    /// Shared Dijkstra/A* loop. `estimate` is added to the queue priority
    /// only; `cost_so_far` always holds the pure cumulative cost.
    pub(crate) fn weighted_loop<C, H>(
        &mut self,
        pather: &GridPather,
        canvas: &mut C,
        start: Point,
        goal: Point,
        step: Duration,
        estimate: H,
    ) -> bool
    where
        C: Canvas,
        H: Fn(Point) -> f64,
    {
        let mut frontier = PriorityFrontier::new();
        frontier.push(start, 0.0);
        self.came_from.insert(start, start);
        self.cost_so_far.insert(start, 0.0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = frontier.pop() else {
                break false;
            };
            self.stats.expanded += 1;
            if current == goal {
                break true;
            }
            let Some(&current_cost) = self.cost_so_far.get(&current) else {
                continue;
            };

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                let new_cost = current_cost + pather.cost(current, next);
                if !self.cost_so_far.get(&next).is_none_or(|&old| new_cost < old) {
                    continue;
                }
                self.cost_so_far.insert(next, new_cost);
                self.came_from.insert(next, current);
                frontier.push(next, new_cost + estimate(next));
                self.admit(canvas, next, current, goal, frontier.len(), step);
            }
        };

        self.nbuf = nbuf;
        found
    }
}
