use mazeway_core::Cell;

use crate::backtrack::Backtrack;
use crate::objectives::ObjectiveSet;
use crate::searcher::{Searcher, Segment};
use crate::traits::Maze;

impl Searcher {
    /// Depth-first segment search from `from` to whichever member of
    /// `goals` discovery order reaches first.
    ///
    /// Same discovery bookkeeping as breadth-first, but LIFO expansion:
    /// the path found is valid yet carries no shortest-path guarantee.
    ///
    /// Returns `None` if the frontier is exhausted first.
    pub fn dfs_segment<M: Maze>(
        &mut self,
        maze: &M,
        from: Cell,
        goals: &ObjectiveSet,
    ) -> Option<Segment> {
        let mut backtrack = Backtrack::new();
        backtrack.root(from);

        let mut frontier = vec![from];

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = None;

        while let Some(current) = frontier.pop() {
            if goals.contains(current) {
                reached = Some(current);
                break;
            }
            nbuf.clear();
            maze.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if backtrack.discover(n, current).is_some() {
                    frontier.push(n);
                }
            }
        }
        self.nbuf = nbuf;

        let Some(goal) = reached else {
            log::trace!(
                "dfs segment from {from}: frontier exhausted after {} cells",
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
