use mazeway_core::Cell;

use crate::objectives::ObjectiveSet;
use crate::strategy::Strategy;
use crate::traits::Maze;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Result of a single search segment: one start cell to one objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment path, segment start through the reached objective inclusive.
    pub path: Vec<Cell>,
    /// The objective the segment ended on (last cell of `path`).
    pub reached: Cell,
    /// Distinct cells discovered while searching this segment.
    pub explored: usize,
}

/// Result of a full multi-objective search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Path from the maze start through every objective, in visit order.
    pub path: Vec<Cell>,
    /// Total cells discovered, summed over segments. Cells re-discovered by
    /// a later segment count again; segments do not share history.
    pub explored: usize,
}

// ---------------------------------------------------------------------------
// Frontier entry for priority-queue strategies
// ---------------------------------------------------------------------------

/// Frontier entry ordered for use in `BinaryHeap`: lowest `priority` pops
/// first, and equal priorities pop in insertion order (`seq`).
///
/// The fixed insertion-order tie-break makes greedy and A* paths
/// deterministic on symmetric mazes.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) cell: Cell,
    pub(crate) priority: i32,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // then smallest seq among equals.
        other
            .priority
            .cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Central coordinator for maze searches.
///
/// Owns the neighbor scratch buffer shared by all strategies, so repeated
/// queries reuse its allocation. Frontiers and backtrack maps are created
/// fresh per segment and discarded once the segment path is reconstructed.
pub struct Searcher {
    pub(crate) nbuf: Vec<Cell>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new `Searcher`.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Run one segment of `strategy` from `from` toward any member of
    /// `goals`.
    ///
    /// Returns `None` if the frontier is exhausted before a remaining
    /// objective is reached.
    pub fn segment<M: Maze>(
        &mut self,
        maze: &M,
        from: Cell,
        goals: &ObjectiveSet,
        strategy: Strategy,
    ) -> Option<Segment> {
        match strategy {
            Strategy::BreadthFirst => self.bfs_segment(maze, from, goals),
            Strategy::DepthFirst => self.dfs_segment(maze, from, goals),
            Strategy::Greedy => self.greedy_segment(maze, from, goals),
            Strategy::AStar => self.astar_segment(maze, from, goals),
        }
    }
}
