//! Shared test mazes.

use std::collections::HashSet;

use mazeway_core::Cell;

use crate::traits::Maze;

/// Test maze built from ASCII rows: `%` is a wall, `P` the start, `.` an
/// objective, anything else open floor.
pub(crate) struct AsciiMaze {
    open: HashSet<Cell>,
    start: Cell,
    objectives: Vec<Cell>,
}

impl AsciiMaze {
    pub(crate) fn new(rows: &[&str]) -> Self {
        let mut open = HashSet::new();
        let mut start = None;
        let mut objectives = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let c = Cell::new(row as i32, col as i32);
                match ch {
                    '%' => continue,
                    'P' => start = Some(c),
                    '.' => objectives.push(c),
                    _ => {}
                }
                open.insert(c);
            }
        }
        Self {
            open,
            start: start.expect("fixture maze needs a P start"),
            objectives,
        }
    }

    /// Fully open `rows` x `cols` grid with explicit start and objectives.
    pub(crate) fn open_grid(rows: i32, cols: i32, start: Cell, objectives: &[Cell]) -> Self {
        let mut open = HashSet::new();
        for row in 0..rows {
            for col in 0..cols {
                open.insert(Cell::new(row, col));
            }
        }
        Self {
            open,
            start,
            objectives: objectives.to_vec(),
        }
    }
}

impl Maze for AsciiMaze {
    fn start(&self) -> Cell {
        self.start
    }

    fn objectives(&self) -> Vec<Cell> {
        self.objectives.clone()
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for n in c.neighbors_4() {
            if self.open.contains(&n) {
                buf.push(n);
            }
        }
    }
}
