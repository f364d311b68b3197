//! Graph-search strategies for grid mazes.
//!
//! This crate computes a path from a maze's start cell through every one of
//! its objective cells, and reports how many distinct cells were examined
//! along the way. Four single-target strategies are provided:
//!
//! | Strategy | Frontier | Guarantee |
//! |---|---|---|
//! | [`Strategy::BreadthFirst`] | FIFO queue | shortest segment (edge count) |
//! | [`Strategy::DepthFirst`] | LIFO stack | some path |
//! | [`Strategy::Greedy`] | min-heap on heuristic | some path |
//! | [`Strategy::AStar`] | min-heap on cost + heuristic | shortest segment (edge count) |
//!
//! All strategies operate through [`Searcher`], which owns a reusable
//! neighbor scratch buffer and chains per-objective segment searches via
//! [`Searcher::search`]. The maze itself stays behind the [`Maze`] trait:
//! the engine only asks for the start cell, the objective cells, and
//! traversable neighbors.

mod astar;
mod backtrack;
mod bfs;
mod dfs;
mod distance;
mod error;
mod greedy;
mod multi;
mod objectives;
mod searcher;
mod strategy;
mod traits;

#[cfg(test)]
pub(crate) mod fixtures;

pub use backtrack::Backtrack;
pub use distance::{manhattan, min_manhattan};
pub use error::SearchError;
pub use objectives::ObjectiveSet;
pub use searcher::{SearchOutcome, Searcher, Segment};
pub use strategy::Strategy;
pub use traits::Maze;
