use mazeway_core::Cell;
use thiserror::Error;

/// Errors surfaced by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The strategy name did not match any known strategy. Configuration
    /// error: fail fast instead of returning an empty result.
    #[error("unknown search strategy {0:?} (expected one of: bfs, dfs, greedy, astar)")]
    UnknownStrategy(String),

    /// The frontier was exhausted before any remaining objective was
    /// reached. The orchestrator aborts the traversal when this happens.
    #[error("no path from {from} to any remaining objective")]
    NoPath {
        /// Start cell of the failed segment.
        from: Cell,
    },
}
