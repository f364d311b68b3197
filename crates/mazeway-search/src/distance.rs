use mazeway_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for unit-cost 4-connected grid moves.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Minimum Manhattan distance from `from` to any of `objectives`.
///
/// Returns `None` if `objectives` is empty.
#[inline]
pub fn min_manhattan(from: Cell, objectives: impl IntoIterator<Item = Cell>) -> Option<i32> {
    objectives.into_iter().map(|o| manhattan(from, o)).min()
}
