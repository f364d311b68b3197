use crate::error::SearchError;
use crate::objectives::ObjectiveSet;
use crate::searcher::{SearchOutcome, Searcher};
use crate::strategy::Strategy;
use crate::traits::Maze;

impl Searcher {
    /// Search `maze` with `strategy`, visiting every objective.
    ///
    /// Runs one segment per objective: from the current position toward the
    /// remaining objective set, removing the objective each segment ends on.
    /// Segment paths are concatenated with the duplicate junction cell
    /// dropped, and explored counts are summed (a later segment counts
    /// re-discovered cells again).
    ///
    /// Degenerate inputs are trivial successes: an empty objective list
    /// yields the one-cell start path with zero explored cells, and a start
    /// sitting on its sole objective yields the one-cell path after a
    /// single trivial segment.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoPath`] if any segment exhausts its frontier before
    /// reaching a remaining objective; the traversal aborts rather than
    /// looping on the unreachable remainder.
    pub fn search<M: Maze>(
        &mut self,
        maze: &M,
        strategy: Strategy,
    ) -> Result<SearchOutcome, SearchError> {
        let start = maze.start();
        let mut goals: ObjectiveSet = maze.objectives().into_iter().collect();

        let mut path = vec![start];
        let mut explored = 0usize;
        let mut current = start;

        while !goals.is_empty() {
            let seg = self
                .segment(maze, current, &goals, strategy)
                .ok_or(SearchError::NoPath { from: current })?;

            let was_remaining = goals.remove(seg.reached);
            debug_assert!(was_remaining, "segment ended off the objective set");

            explored += seg.explored;
            // Drop the leading junction cell: it is already the tail of the
            // accumulated path.
            path.extend(seg.path.iter().skip(1));
            log::debug!(
                "{strategy} segment {current} -> {}: {} cells explored, {} objectives left",
                seg.reached,
                seg.explored,
                goals.len()
            );
            current = seg.reached;
        }

        Ok(SearchOutcome { path, explored })
    }

    /// [`Searcher::search`] with the strategy selected by name.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnknownStrategy`] if `name` is not one of `bfs`,
    /// `dfs`, `greedy`, `astar`; otherwise as [`Searcher::search`].
    pub fn search_by_name<M: Maze>(
        &mut self,
        maze: &M,
        name: &str,
    ) -> Result<SearchOutcome, SearchError> {
        let strategy: Strategy = name.parse()?;
        self.search(maze, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::AsciiMaze;
    use mazeway_core::Cell;

    #[test]
    fn single_objective_all_strategies() {
        let maze = AsciiMaze::open_grid(5, 5, Cell::new(0, 0), &[Cell::new(4, 4)]);
        for strategy in Strategy::ALL {
            let out = Searcher::new().search(&maze, strategy).unwrap();
            assert_eq!(out.path[0], Cell::new(0, 0), "{strategy}");
            assert_eq!(*out.path.last().unwrap(), Cell::new(4, 4), "{strategy}");
            assert!(out.explored >= out.path.len(), "{strategy}");
        }
    }

    #[test]
    fn optimal_strategies_find_eight_edges() {
        let maze = AsciiMaze::open_grid(5, 5, Cell::new(0, 0), &[Cell::new(4, 4)]);
        for strategy in [Strategy::BreadthFirst, Strategy::AStar] {
            let out = Searcher::new().search(&maze, strategy).unwrap();
            assert_eq!(out.path.len(), 9, "{strategy}");
            assert!(out.explored <= 25, "{strategy}");
        }
    }

    #[test]
    fn objectives_in_a_row_are_chained() {
        let maze = AsciiMaze::open_grid(
            5,
            5,
            Cell::new(0, 0),
            &[Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 4)],
        );
        for strategy in [Strategy::BreadthFirst, Strategy::AStar] {
            let out = Searcher::new().search(&maze, strategy).unwrap();
            // Segment optima: 1 + 1 + 2 edges; junctions deduplicated.
            assert_eq!(
                out.path,
                vec![
                    Cell::new(0, 0),
                    Cell::new(0, 1),
                    Cell::new(0, 2),
                    Cell::new(0, 3),
                    Cell::new(0, 4),
                ],
                "{strategy}"
            );
        }
    }

    #[test]
    fn visits_every_objective() {
        let maze = AsciiMaze::new(&[
            ".   P", //
            "  %  ", //
            ".   .",
        ]);
        let objectives = maze.objectives();
        for strategy in Strategy::ALL {
            let out = Searcher::new().search(&maze, strategy).unwrap();
            for o in &objectives {
                assert!(out.path.contains(o), "{strategy} missed {o}");
            }
            assert!(out.explored >= out.path.len(), "{strategy}");
        }
    }

    #[test]
    fn start_on_one_of_two_objectives() {
        let maze = AsciiMaze::open_grid(3, 5, Cell::new(1, 1), &[Cell::new(1, 1), Cell::new(1, 3)]);
        let out = Searcher::new().search(&maze, Strategy::BreadthFirst).unwrap();
        // First segment is trivial; the real movement is one segment.
        assert_eq!(
            out.path,
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)]
        );
        // The trivial segment still discovers the start cell.
        assert!(out.explored >= out.path.len());
    }

    #[test]
    fn start_on_sole_objective_is_one_cell() {
        let maze = AsciiMaze::open_grid(3, 3, Cell::new(1, 1), &[Cell::new(1, 1)]);
        for strategy in Strategy::ALL {
            let out = Searcher::new().search(&maze, strategy).unwrap();
            assert_eq!(out.path, vec![Cell::new(1, 1)], "{strategy}");
            assert_eq!(out.explored, 1, "{strategy}");
        }
    }

    #[test]
    fn empty_objective_list_is_trivial_success() {
        let maze = AsciiMaze::open_grid(3, 3, Cell::new(2, 0), &[]);
        let out = Searcher::new().search(&maze, Strategy::Greedy).unwrap();
        assert_eq!(out.path, vec![Cell::new(2, 0)]);
        assert_eq!(out.explored, 0);
    }

    #[test]
    fn unreachable_objective_aborts_with_no_path() {
        let maze = AsciiMaze::new(&[
            "P %. ", //
            "  %  ", //
            "  %  ",
        ]);
        for strategy in Strategy::ALL {
            let err = Searcher::new().search(&maze, strategy).unwrap_err();
            assert_eq!(err, SearchError::NoPath { from: Cell::new(0, 0) }, "{strategy}");
        }
    }

    #[test]
    fn reachable_then_unreachable_aborts_midway() {
        // (0, 1) is reachable, the walled-off (2, 4) is not.
        let maze = AsciiMaze::new(&[
            "P. % ", //
            "   % ", //
            "   %.",
        ]);
        let err = Searcher::new()
            .search(&maze, Strategy::BreadthFirst)
            .unwrap_err();
        assert!(matches!(err, SearchError::NoPath { .. }));
    }

    #[test]
    fn search_by_name_selects_and_validates() {
        let maze = AsciiMaze::open_grid(3, 3, Cell::new(0, 0), &[Cell::new(2, 2)]);
        let mut searcher = Searcher::new();
        let out = searcher.search_by_name(&maze, "astar").unwrap();
        assert_eq!(out.path.len(), 5);
        let err = searcher.search_by_name(&maze, "best-first").unwrap_err();
        assert_eq!(err, SearchError::UnknownStrategy("best-first".to_string()));
    }

    #[test]
    fn explored_counts_accumulate_across_segments() {
        let maze = AsciiMaze::open_grid(1, 9, Cell::new(0, 4), &[Cell::new(0, 0), Cell::new(0, 8)]);
        let out = Searcher::new().search(&maze, Strategy::BreadthFirst).unwrap();
        // Second segment re-walks the corridor, so its re-discoveries count
        // again on top of the first segment's.
        assert!(out.explored > 9);
        assert_eq!(out.path.len(), 13);
    }
}
