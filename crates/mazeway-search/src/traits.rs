use mazeway_core::Cell;

/// Query contract the search engine requires from a maze.
///
/// The engine never inspects maze internals: walls, dimensions and file
/// formats are the implementor's business. Neighbor enumeration must
/// already be filtered to traversable cells.
pub trait Maze {
    /// The start cell. Exactly one per maze.
    fn start(&self) -> Cell;

    /// The objective cells, in maze order, without duplicates.
    fn objectives(&self) -> Vec<Cell>;

    /// Append the traversable grid-adjacent neighbors of `c` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Whether `c` is an objective cell.
    fn is_objective(&self, c: Cell) -> bool {
        self.objectives().contains(&c)
    }
}
