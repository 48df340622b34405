use std::time::Duration;

use pathviz_core::{BusyFlag, Point};

use crate::canvas::Canvas;
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::neighbors::GridPather;
use crate::search::{Algorithm, Outcome, Search};
use crate::traits::Pather;

impl Search {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Every step counts the same; a tile is admitted the first time it is
    /// seen. See [`Search::run`] for the busy-flag contract.
    pub fn bfs<C: Canvas>(
        &mut self,
        canvas: &mut C,
        start: Point,
        goal: Point,
        busy: &BusyFlag,
    ) -> Result<Outcome, SearchError> {
        self.run(Algorithm::Bfs, canvas, start, goal, busy)
    }

    /// Returns whether the goal was dequeued.
    pub(crate) fn bfs_loop<C: Canvas>(
        &mut self,
        pather: &GridPather,
        canvas: &mut C,
        start: Point,
        goal: Point,
        step: Duration,
    ) -> bool {
        let mut frontier = FifoFrontier::new();
        frontier.push(start);
        self.came_from.insert(start, start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = frontier.pop() else {
                break false;
            };
            self.stats.expanded += 1;
            if current == goal {
                break true;
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                if self.came_from.contains_key(&next) {
                    continue;
                }
                frontier.push(next);
                self.came_from.insert(next, current);
                self.admit(canvas, next, current, goal, frontier.len(), step);
            }
        };

        self.nbuf = nbuf;
        found
    }
}
