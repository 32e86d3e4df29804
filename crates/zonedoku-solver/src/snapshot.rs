//! Read-only grid captures.

use std::fmt::{self, Display};

use zonedoku_core::{Candidates, Cell, Coord, Value};

/// The externally visible state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// The cell resolved to a single value.
    Resolved(Value),
    /// The cell still admits the given candidates. Empty only for a
    /// contradicted board.
    Unresolved(Candidates),
}

/// A read-only capture of the grid, detached from the board.
///
/// This is the solver's whole output surface: callers render, serialize,
/// or diff snapshots; they never touch cells. The [`Display`]
/// implementation prints resolved values as digits and unresolved cells as
/// `-`, nine rows of nine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: [CellState; 81],
}

impl Snapshot {
    pub(crate) fn capture(cells: &[Cell; 81]) -> Self {
        let cells = std::array::from_fn(|index| {
            let cell = &cells[index];
            match cell.solved_value() {
                Some(value) => CellState::Resolved(value),
                None => CellState::Unresolved(cell.candidates()),
            }
        });
        Self { cells }
    }

    /// Returns the state of the cell at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[coord.cell_index()]
    }

    /// Returns the resolved value at `coord`, or `None` while candidates
    /// remain.
    #[must_use]
    pub fn resolved(&self, coord: Coord) -> Option<Value> {
        match self.get(coord) {
            CellState::Resolved(value) => Some(value),
            CellState::Unresolved(_) => None,
        }
    }

    /// Returns the number of resolved cells.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| matches!(state, CellState::Resolved(_)))
            .count()
    }

    /// Iterates over all 81 cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &state)| (Coord::from_cell_index(index), state))
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.get(Coord::new(x, y)) {
                    CellState::Resolved(value) => write!(f, "{value}")?,
                    CellState::Unresolved(_) => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zonedoku_core::Givens;

    use crate::Board;

    use super::*;

    #[test]
    fn test_snapshot_reflects_board() {
        let givens = Givens::from_triples([(0, 0, 5), (8, 8, 1)]).unwrap();
        let board = Board::new(&givens);
        let snapshot = board.snapshot();

        assert_eq!(
            snapshot.resolved(Coord::new(0, 0)),
            Some(Value::new(5).unwrap())
        );
        assert_eq!(snapshot.resolved(Coord::new(4, 4)), None);
        assert_eq!(
            snapshot.get(Coord::new(4, 4)),
            CellState::Unresolved(Candidates::FULL)
        );
        assert_eq!(snapshot.resolved_count(), 2);
        assert_eq!(snapshot.iter().count(), 81);
    }

    #[test]
    fn test_display_renders_rows() {
        let givens = Givens::from_triples([(0, 0, 5), (2, 0, 3), (8, 1, 9)]).unwrap();
        let board = Board::new(&givens);
        let rendered = board.snapshot().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "5 - 3 - - - - - -");
        assert_eq!(lines[1], "- - - - - - - - 9");
        assert_eq!(lines[8], "- - - - - - - - -");
    }
}
