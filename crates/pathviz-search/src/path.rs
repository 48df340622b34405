use pathviz_core::Point;

use crate::canvas::Canvas;
use crate::error::SearchError;
use crate::search::{Search, pause};

impl Search {
    /// Walk `came_from` back from `goal` until the start's self-loop.
    ///
    /// Returns the chain in start→goal order, without the start itself.
    /// Only valid after the goal has been dequeued.
    pub(crate) fn reconstruct(&self, start: Point, goal: Point) -> Result<Vec<Point>, SearchError> {
        let mut path = Vec::new();
        let mut current = goal;
        while current != start {
            if path.len() >= self.came_from.len() {
                return Err(SearchError::BrokenPath(current));
            }
            path.push(current);
            match self.came_from.get(&current) {
                Some(&from) if from != current => current = from,
                _ => return Err(SearchError::BrokenPath(current)),
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Paint `path` tile by tile, keeping the goal visible at the end.
    pub(crate) fn materialize<C: Canvas>(&self, canvas: &mut C, path: &[Point]) {
        for &p in path {
            canvas.paint(|g| {
                g.mark_path(p);
                g.mark_goal();
            });
            pause(self.pacing.path);
        }
    }
}
