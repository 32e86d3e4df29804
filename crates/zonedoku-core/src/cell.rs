//! A single grid cell and its lock rank.

use crate::{candidates::Candidates, coord::Coord, value::Value};

/// How strongly a cell has been pinned down by the solver.
///
/// `Solved` marks a cell assigned by unique-location deduction; `Pair`,
/// `Triple`, and `Quadruple` mark membership in a locked group of that size.
/// A cell that was given in the puzzle or resolved purely by elimination
/// stays `Unlocked` — being solved is visible from its candidate count, not
/// its rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum GroupRank {
    /// Not locked into any group.
    #[default]
    Unlocked,
    /// Assigned as the only possible location of a value in some zone.
    Solved,
    /// Member of a locked pair.
    Pair,
    /// Member of a locked triple.
    Triple,
    /// Member of a locked quadruple.
    Quadruple,
}

impl GroupRank {
    /// Size of the locked group this rank records, if any.
    #[must_use]
    pub const fn group_size(self) -> Option<usize> {
        match self {
            Self::Unlocked => None,
            Self::Solved => Some(1),
            Self::Pair => Some(2),
            Self::Triple => Some(3),
            Self::Quadruple => Some(4),
        }
    }
}

/// A single grid position: its coordinate, its remaining candidate values,
/// and its lock rank.
///
/// Cells are created once by the board and mutated only through the board's
/// propagation passes. The candidate set only ever shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    candidates: Candidates,
    rank: GroupRank,
}

impl Cell {
    /// Creates an unknown cell with the full candidate set.
    #[must_use]
    pub const fn unknown(coord: Coord) -> Self {
        Self {
            coord,
            candidates: Candidates::FULL,
            rank: GroupRank::Unlocked,
        }
    }

    /// Creates a cell fixed to a given value.
    #[must_use]
    pub const fn given(coord: Coord, value: Value) -> Self {
        Self {
            coord,
            candidates: Candidates::from_elem(value),
            rank: GroupRank::Unlocked,
        }
    }

    /// Returns the cell's coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns the cell's remaining candidates.
    #[must_use]
    pub const fn candidates(&self) -> Candidates {
        self.candidates
    }

    /// Returns the cell's lock rank.
    #[must_use]
    pub const fn rank(&self) -> GroupRank {
        self.rank
    }

    /// Returns `true` if exactly one candidate remains.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Returns the resolved value when the cell is solved.
    #[must_use]
    pub const fn solved_value(&self) -> Option<Value> {
        self.candidates.solitary()
    }

    /// Removes every value in `excluded` from the candidate set.
    ///
    /// A solved cell is left untouched. Returns `true` if the candidate set
    /// changed.
    pub fn restrict(&mut self, excluded: Candidates) -> bool {
        if self.is_solved() {
            return false;
        }
        let before = self.candidates;
        self.candidates = before.difference(excluded);
        self.candidates != before
    }

    /// Replaces the candidate set and rank as part of a deduction.
    pub const fn lock(&mut self, candidates: Candidates, rank: GroupRank) {
        self.candidates = candidates;
        self.rank = rank;
    }

    /// Returns `true` if the cell is at least as constrained as a locked
    /// pair member (pair-locked or solved).
    #[must_use]
    pub const fn is_locked_pair(&self) -> bool {
        matches!(self.rank, GroupRank::Pair) || self.is_solved()
    }

    /// Returns `true` if the cell is at least as constrained as a locked
    /// triple member.
    #[must_use]
    pub const fn is_locked_triple(&self) -> bool {
        matches!(self.rank, GroupRank::Triple) || self.is_locked_pair()
    }

    /// Returns `true` if the cell is at least as constrained as a locked
    /// quadruple member.
    #[must_use]
    pub const fn is_locked_quadruple(&self) -> bool {
        matches!(self.rank, GroupRank::Quadruple) || self.is_locked_triple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: u8) -> Value {
        Value::new(v).unwrap()
    }

    fn set(raw: &[u8]) -> Candidates {
        raw.iter().map(|&v| value(v)).collect()
    }

    #[test]
    fn test_unknown_starts_full() {
        let cell = Cell::unknown(Coord::new(0, 0));
        assert_eq!(cell.candidates(), Candidates::FULL);
        assert_eq!(cell.rank(), GroupRank::Unlocked);
        assert!(!cell.is_solved());
    }

    #[test]
    fn test_given_is_solved_but_unlocked() {
        let cell = Cell::given(Coord::new(1, 2), value(7));
        assert!(cell.is_solved());
        assert_eq!(cell.solved_value(), Some(value(7)));
        assert_eq!(cell.rank(), GroupRank::Unlocked);
    }

    #[test]
    fn test_restrict_shrinks_unsolved() {
        let mut cell = Cell::unknown(Coord::new(0, 0));
        assert!(cell.restrict(set(&[1, 2, 3])));
        assert_eq!(cell.candidates(), set(&[4, 5, 6, 7, 8, 9]));
        assert!(!cell.restrict(set(&[1])));
    }

    #[test]
    fn test_restrict_ignores_solved() {
        let mut cell = Cell::given(Coord::new(0, 0), value(5));
        assert!(!cell.restrict(set(&[5])));
        assert_eq!(cell.solved_value(), Some(value(5)));
    }

    #[test]
    fn test_lock_chain_is_monotone() {
        let mut cell = Cell::unknown(Coord::new(0, 0));
        assert!(!cell.is_locked_pair());
        assert!(!cell.is_locked_quadruple());

        cell.lock(set(&[3, 7]), GroupRank::Pair);
        assert!(cell.is_locked_pair());
        assert!(cell.is_locked_triple());
        assert!(cell.is_locked_quadruple());

        let mut triple = Cell::unknown(Coord::new(1, 0));
        triple.lock(set(&[2, 4, 6]), GroupRank::Triple);
        assert!(!triple.is_locked_pair());
        assert!(triple.is_locked_triple());
        assert!(triple.is_locked_quadruple());
    }

    #[test]
    fn test_solved_cell_counts_as_any_lock() {
        let cell = Cell::given(Coord::new(0, 0), value(1));
        assert!(cell.is_locked_pair());
        assert!(cell.is_locked_triple());
        assert!(cell.is_locked_quadruple());
    }

    #[test]
    fn test_group_size() {
        assert_eq!(GroupRank::Unlocked.group_size(), None);
        assert_eq!(GroupRank::Solved.group_size(), Some(1));
        assert_eq!(GroupRank::Pair.group_size(), Some(2));
        assert_eq!(GroupRank::Triple.group_size(), Some(3));
        assert_eq!(GroupRank::Quadruple.group_size(), Some(4));
    }
}
