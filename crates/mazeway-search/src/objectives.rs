use mazeway_core::Cell;

/// The shrinking set of not-yet-visited objectives.
///
/// Owned by the orchestrator; built from a snapshot of the maze's objective
/// list so that removals never alias the maze model. Insertion order is
/// preserved, which keeps heuristic tie-breaks deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectiveSet {
    cells: Vec<Cell>,
}

impl ObjectiveSet {
    /// Build a set from an ordered cell sequence, dropping duplicates.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut set = Self::default();
        for c in cells {
            if !set.contains(c) {
                set.cells.push(c);
            }
        }
        set
    }

    /// Whether `c` is still an unvisited objective.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    /// Remove `c` from the set. Returns whether it was present.
    pub fn remove(&mut self, c: Cell) -> bool {
        match self.cells.iter().position(|&o| o == c) {
            Some(i) => {
                self.cells.remove(i);
                true
            }
            None => false,
        }
    }

    /// Number of remaining objectives.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether every objective has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the remaining objectives in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Cell> for ObjectiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter)
    }
}
