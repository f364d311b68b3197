use std::collections::BinaryHeap;

use mazeway_core::Cell;

use crate::backtrack::Backtrack;
use crate::distance::min_manhattan;
use crate::objectives::ObjectiveSet;
use crate::searcher::{OpenEntry, Searcher, Segment};
use crate::traits::Maze;

impl Searcher {
    /// Greedy best-first segment search from `from` toward the nearest
    /// member of `goals` by Manhattan estimate.
    ///
    /// The frontier cell with the smallest heuristic value expands next;
    /// accumulated path cost is ignored, so the result is not guaranteed
    /// shortest. Equal estimates break ties by insertion order, which
    /// keeps the chosen path deterministic on symmetric mazes.
    ///
    /// Returns `None` if the frontier is exhausted first, or if `goals`
    /// is empty.
    pub fn greedy_segment<M: Maze>(
        &mut self,
        maze: &M,
        from: Cell,
        goals: &ObjectiveSet,
    ) -> Option<Segment> {
        let h0 = min_manhattan(from, goals.iter())?;

        let mut backtrack = Backtrack::new();
        backtrack.root(from);

        let mut open = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(OpenEntry {
            cell: from,
            priority: h0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = None;

        while let Some(OpenEntry { cell: current, .. }) = open.pop() {
            if goals.contains(current) {
                reached = Some(current);
                break;
            }
            nbuf.clear();
            maze.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if backtrack.discover(n, current).is_none() {
                    continue;
                }
                if let Some(h) = min_manhattan(n, goals.iter()) {
                    seq += 1;
                    open.push(OpenEntry {
                        cell: n,
                        priority: h,
                        seq,
                    });
                }
            }
        }
        self.nbuf = nbuf;

        let Some(goal) = reached else {
            log::trace!(
                "greedy segment from {from}: frontier exhausted after {} cells",
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
