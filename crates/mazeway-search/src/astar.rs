use std::collections::BinaryHeap;

use mazeway_core::Cell;

use crate::backtrack::Backtrack;
use crate::distance::min_manhattan;
use crate::objectives::ObjectiveSet;
use crate::searcher::{OpenEntry, Searcher, Segment};
use crate::traits::Maze;

impl Searcher {
    /// Heuristic-cost (A*) segment search from `from` to the nearest
    /// member of `goals` by edge count.
    ///
    /// Priority is accumulated path cost plus the Manhattan estimate to
    /// the closest remaining objective. Cells are finalized at first
    /// discovery rather than re-opened with a lower cost; that shortcut
    /// relies on every edge costing exactly 1 and on the estimate being
    /// admissible and consistent. This is not a general decrease-key
    /// search. Equal priorities break ties by insertion order.
    ///
    /// Returns `None` if the frontier is exhausted first, or if `goals`
    /// is empty.
    pub fn astar_segment<M: Maze>(
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
                let Some(g) = backtrack.discover(n, current) else {
                    continue;
                };
                if let Some(h) = min_manhattan(n, goals.iter()) {
                    seq += 1;
                    open.push(OpenEntry {
                        cell: n,
                        priority: g + h,
                        seq,
                    });
                }
            }
        }
        self.nbuf = nbuf;

        let Some(goal) = reached else {
            log::trace!(
                "astar segment from {from}: frontier exhausted after {} cells",
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
