//! Discovery bookkeeping and path reconstruction.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use mazeway_core::Cell;

/// Per-cell discovery record: the predecessor on the discovery tree and
/// the path cost (edge count) from the segment root.
#[derive(Debug, Clone, Copy)]
struct Discovery {
    parent: Option<Cell>,
    cost: i32,
}

/// Predecessor map built up during a single search segment.
///
/// A cell counts as *explored* the moment it is inserted here, on first
/// discovery, not when it is later expanded off the frontier. The reported
/// explored count for a segment is therefore [`Backtrack::len`].
///
/// The segment root has no predecessor (`parent == None`); there is no
/// in-band sentinel coordinate.
#[derive(Debug, Default)]
pub struct Backtrack {
    map: HashMap<Cell, Discovery>,
}

impl Backtrack {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the segment root at cost 0, with no predecessor.
    pub fn root(&mut self, c: Cell) {
        self.map.insert(
            c,
            Discovery {
                parent: None,
                cost: 0,
            },
        );
    }

    /// Record the first discovery of `c` via `parent`.
    ///
    /// Returns the path cost of `c` if it was newly discovered, or `None`
    /// if `c` was already known (the earlier discovery wins).
    pub fn discover(&mut self, c: Cell, parent: Cell) -> Option<i32> {
        let cost = self.cost(parent).map_or(1, |g| g + 1);
        match self.map.entry(c) {
            Entry::Vacant(slot) => {
                slot.insert(Discovery {
                    parent: Some(parent),
                    cost,
                });
                Some(cost)
            }
            Entry::Occupied(_) => None,
        }
    }

    /// Path cost of `c` from the segment root, if `c` has been discovered.
    #[inline]
    pub fn cost(&self, c: Cell) -> Option<i32> {
        self.map.get(&c).map(|d| d.cost)
    }

    /// Whether `c` has been discovered.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.map.contains_key(&c)
    }

    /// Number of distinct cells discovered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no cell has been discovered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Reconstruct the root→`terminal` path by walking predecessors.
    pub fn walk(&self, terminal: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(terminal);
        while let Some(c) = cur {
            path.push(c);
            cur = self.map.get(&c).and_then(|d| d.parent);
        }
        path.reverse();
        path
    }
}
