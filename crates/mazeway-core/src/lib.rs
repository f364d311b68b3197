//! **mazeway-core** — Grid-search engine for mazes (core types).
//!
//! This crate provides the foundational value type shared across the
//! *mazeway* workspace: the [`Cell`] grid coordinate.

pub mod cell;

pub use cell::Cell;
