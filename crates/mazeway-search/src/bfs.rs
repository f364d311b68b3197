use std::collections::VecDeque;

use mazeway_core::Cell;

use crate::backtrack::Backtrack;
use crate::objectives::ObjectiveSet;
use crate::searcher::{Searcher, Segment};
use crate::traits::Maze;

impl Searcher {
    /// Breadth-first segment search from `from` to the nearest member of
    /// `goals` by edge count.
    ///
    /// FIFO expansion discovers cells in non-decreasing distance from
    /// `from`, so the returned segment path is shortest under unit edge
    /// cost. The objective test runs on the cell just popped off the
    /// frontier, before its neighbors are expanded.
    ///
    /// Returns `None` if the frontier is exhausted first.
    pub fn bfs_segment<M: Maze>(
        &mut self,
        maze: &M,
        from: Cell,
        goals: &ObjectiveSet,
    ) -> Option<Segment> {
        let mut backtrack = Backtrack::new();
        backtrack.root(from);

        let mut frontier = VecDeque::new();
        frontier.push_back(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = None;

        while let Some(current) = frontier.pop_front() {
            if goals.contains(current) {
                reached = Some(current);
                break;
            }
            nbuf.clear();
            maze.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if backtrack.discover(n, current).is_some() {
                    frontier.push_back(n);
                }
            }
        }
        self.nbuf = nbuf;

        let Some(goal) = reached else {
            log::trace!(
                "bfs segment from {from}: frontier exhausted after {} cells",
                backtrack.len()
            );
            return None;
        };
        Some(Segment {
            path: backtrack.walk(goal),
            reached: goal,
            explored: backtrack.len(),
        })
    }
}
