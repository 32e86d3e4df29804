//! The board and its fixed-point propagation loop.

use log::{debug, trace};
use zonedoku_core::{Candidates, Cell, Coord, Givens, GroupRank, Value, Zone};

use crate::{snapshot::Snapshot, zone_view::ZoneView};

/// Terminal state of a solving run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Status {
    /// All 81 cells resolved to a single value.
    Solved,
    /// No propagation rule can make further progress; the residual
    /// candidates are left in place.
    Stalled,
}

/// Error raised while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A cell's candidate set became empty: the puzzle contradicts itself.
    #[display("cell {coord} has no remaining candidates")]
    Contradiction {
        /// The contradicted cell.
        coord: Coord,
    },
}

/// Error raised by [`Board::check_consistency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A zone holds the same resolved value in two cells.
    #[display("{zone} holds value {value} more than once")]
    DuplicateValue {
        /// The zone containing the duplicate.
        zone: Zone,
        /// The duplicated value.
        value: Value,
    },
}

/// The 9x9 board: 81 cells, 27 zones, and the propagation loop over them.
///
/// A board is built once from the puzzle's [`Givens`], solved (or stalled)
/// by [`solve`](Board::solve), and then read through
/// [`snapshot`](Board::snapshot). Only the cells' candidate sets and ranks
/// mutate over its lifetime.
///
/// # Examples
///
/// ```
/// use zonedoku_core::{Coord, Givens, Value};
/// use zonedoku_solver::{Board, Status};
///
/// let givens: Givens = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let mut board = Board::new(&givens);
/// let status = board.solve()?;
/// assert_eq!(status, Status::Solved);
///
/// let snapshot = board.snapshot();
/// assert_eq!(snapshot.resolved(Coord::new(2, 0)), Some(Value::new(4)?));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; 81],
    zones: [Zone; 27],
}

impl Board {
    /// Builds a board from the puzzle's fixed values.
    ///
    /// Every cell not named by the givens starts with the full candidate
    /// set. No consistency check is performed here; duplicate givens
    /// surface during solving, either as a [`SolverError::Contradiction`]
    /// or as a stall.
    #[must_use]
    pub fn new(givens: &Givens) -> Self {
        let cells = std::array::from_fn(|index| {
            let coord = Coord::from_cell_index(index);
            match givens.get(coord) {
                Some(value) => Cell::given(coord, value),
                None => Cell::unknown(coord),
            }
        });
        Self {
            cells,
            zones: Zone::ALL,
        }
    }

    /// Returns the board's cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the board's 27 zones in row, column, box order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_solved()).count()
    }

    /// Returns the total number of candidates across all cells.
    #[must_use]
    pub fn candidate_total(&self) -> usize {
        self.cells.iter().map(|cell| cell.candidates().len()).sum()
    }

    /// Returns `true` if all 81 cells are solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count() == self.cells.len()
    }

    /// Captures the current grid state for rendering or inspection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cells)
    }

    /// Verifies that no zone holds a resolved value twice.
    ///
    /// This is a diagnostic for callers and tests; solving never calls it
    /// (an inconsistent puzzle is a caller error, not a solver state).
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::DuplicateValue`] for the first duplicate
    /// found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for zone in self.zones {
            let mut seen = Candidates::EMPTY;
            for cell in ZoneView::new(zone, &self.cells).cells() {
                if let Some(value) = cell.solved_value()
                    && !seen.insert(value)
                {
                    return Err(ConsistencyError::DuplicateValue { zone, value });
                }
            }
        }
        Ok(())
    }

    /// Runs the propagation loop to its fixed point.
    ///
    /// Alternates two layers until neither makes progress: a cheap inner
    /// loop of elimination and unique-location assignment, and, when that
    /// stalls, a conjugate layer that locks pairs, triples, and quadruples
    /// per zone and sweeps their values out of the rest of each zone.
    ///
    /// There is no guessing: [`Status::Stalled`] is a legitimate outcome
    /// for puzzles that need trial-and-error beyond these rules. Solving an
    /// already-terminal board is a no-op returning the same status.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a cell runs out of
    /// candidates, which only happens for an inconsistent puzzle.
    pub fn solve(&mut self) -> Result<Status, SolverError> {
        debug!(
            "solving: {} givens, {} candidates",
            self.solved_count(),
            self.candidate_total()
        );
        loop {
            let known = self.solved_count();
            self.run_singles()?;
            if self.solved_count() == known {
                self.run_conjugates()?;
            }
            if self.is_solved() {
                debug!("solved");
                return Ok(Status::Solved);
            }
            if self.solved_count() == known {
                debug!(
                    "stalled with {} solved cells, {} candidates",
                    self.solved_count(),
                    self.candidate_total()
                );
                return Ok(Status::Stalled);
            }
        }
    }

    /// Inner fixed point: eliminate and assign until the solved-cell count
    /// stops changing.
    fn run_singles(&mut self) -> Result<(), SolverError> {
        loop {
            let known = self.solved_count();
            self.eliminate_solved()?;
            self.assign_unique();
            if self.solved_count() == known {
                return Ok(());
            }
        }
    }

    /// Middle fixed point: conjugate detection and its consequences until
    /// the total candidate count stops changing.
    fn run_conjugates(&mut self) -> Result<(), SolverError> {
        loop {
            let possible = self.candidate_total();
            self.assign_groups();
            self.sweep_locked_values()?;
            self.assign_unique();
            self.eliminate_solved()?;
            if self.candidate_total() == possible {
                return Ok(());
            }
        }
    }

    /// Removes each unsolved cell's zones' resolved values from its
    /// candidates.
    fn eliminate_solved(&mut self) -> Result<(), SolverError> {
        for index in 0..self.cells.len() {
            if self.cells[index].is_solved() {
                continue;
            }
            let coord = self.cells[index].coord();
            let mut resolved = Candidates::EMPTY;
            for zone_index in coord.zone_indices() {
                resolved |= ZoneView::new(self.zones[zone_index], &self.cells).solved_values();
            }
            if self.cells[index].restrict(resolved) {
                trace!(
                    "eliminate {coord}: candidates now {:?}",
                    self.cells[index].candidates()
                );
            }
        }
        self.ensure_no_empty()
    }

    /// Assigns a value wherever a zone leaves it a single possible
    /// location.
    fn assign_unique(&mut self) {
        for zone in self.zones {
            let singles: Vec<(Value, Coord)> = ZoneView::new(zone, &self.cells)
                .value_frequency(1)
                .into_iter()
                .map(|(value, coords)| (value, coords[0]))
                .collect();
            for (value, coord) in singles {
                let cell = &mut self.cells[coord.cell_index()];
                if !cell.is_solved() {
                    trace!("assign {value} to {coord}: sole location in {zone}");
                    cell.lock(Candidates::from_elem(value), GroupRank::Solved);
                }
            }
        }
    }

    /// Detects and locks conjugate groups: pairs, then triples, then
    /// quadruples, zone by zone.
    fn assign_groups(&mut self) {
        for (size, rank) in [
            (2, GroupRank::Pair),
            (3, GroupRank::Triple),
            (4, GroupRank::Quadruple),
        ] {
            for zone in self.zones {
                let groups = ZoneView::new(zone, &self.cells).locked_groups(size);
                for (coord, subset) in groups {
                    let cell = &mut self.cells[coord.cell_index()];
                    let already_locked = match rank {
                        GroupRank::Pair => cell.is_locked_pair(),
                        GroupRank::Triple => cell.is_locked_triple(),
                        _ => cell.is_locked_quadruple(),
                    };
                    if !already_locked {
                        trace!("lock {coord} to {subset:?} as group of {size} in {zone}");
                        cell.lock(subset, rank);
                    }
                }
            }
        }
    }

    /// Removes the values claimed by each zone's locked cells from that
    /// zone's unlocked cells.
    fn sweep_locked_values(&mut self) -> Result<(), SolverError> {
        for zone in self.zones {
            let mut locked = Candidates::EMPTY;
            for cell in ZoneView::new(zone, &self.cells).cells() {
                if cell.rank() != GroupRank::Unlocked {
                    locked |= cell.candidates();
                }
            }
            for coord in zone.coords() {
                let cell = &mut self.cells[coord.cell_index()];
                if cell.rank() == GroupRank::Unlocked && cell.restrict(locked) {
                    trace!(
                        "sweep {coord} in {zone}: candidates now {:?}",
                        cell.candidates()
                    );
                }
            }
        }
        self.ensure_no_empty()
    }

    /// Fails with the first cell whose candidate set has become empty.
    fn ensure_no_empty(&self) -> Result<(), SolverError> {
        match self.cells.iter().find(|cell| cell.candidates().is_empty()) {
            Some(cell) => Err(SolverError::Contradiction {
                coord: cell.coord(),
            }),
            None => Ok(()),
        }
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

    fn medium_givens() -> Givens {
        "
        __3 ___ ___
        _7_ 8__ 96_
        _2_ 75_ __1
        ___ ___ 85_
        __6 ___ 7__
        _19 ___ ___
        3__ _94 _7_
        _62 __1 _3_
        ___ ___ 6__
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_new_builds_cells_from_givens() {
        let givens = Givens::from_triples([(2, 0, 3), (8, 2, 1)]).unwrap();
        let board = Board::new(&givens);
        assert_eq!(board.solved_count(), 2);
        assert_eq!(
            board.cells()[Coord::new(2, 0).cell_index()].solved_value(),
            Some(value(3))
        );
        assert_eq!(
            board.cells()[Coord::new(0, 0).cell_index()].candidates(),
            Candidates::FULL
        );
        assert_eq!(board.candidate_total(), 79 * 9 + 2);
    }

    #[test]
    fn test_elimination_clears_peers() {
        let givens = Givens::from_triples([(0, 0, 5)]).unwrap();
        let mut board = Board::new(&givens);
        board.eliminate_solved().unwrap();
        // Same row, column, and box all lose 5.
        for coord in [Coord::new(8, 0), Coord::new(0, 8), Coord::new(2, 2)] {
            assert!(
                !board.cells()[coord.cell_index()]
                    .candidates()
                    .contains(value(5)),
                "{coord} still allows 5"
            );
        }
        // An unrelated cell keeps it.
        assert!(
            board.cells()[Coord::new(4, 4).cell_index()]
                .candidates()
                .contains(value(5))
        );
    }

    #[test]
    fn test_assign_unique_places_sole_location() {
        let mut board = Board::new(&Givens::new());
        // Make (2, 0) the only cell of row 0 allowing 6.
        for x in 0..9 {
            if x != 2 {
                board.cells[Coord::new(x, 0).cell_index()].restrict(set(&[6]));
            }
        }
        board.assign_unique();
        let cell = &board.cells()[Coord::new(2, 0).cell_index()];
        assert_eq!(cell.solved_value(), Some(value(6)));
        assert_eq!(cell.rank(), GroupRank::Solved);
    }

    #[test]
    fn test_conjugate_pass_locks_pair_and_sweeps_zone() {
        let mut board = Board::new(&Givens::new());
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 0);
        // 3 and 7 survive only in cells a and b of row 0.
        for x in 0..9 {
            let coord = Coord::new(x, 0);
            if coord != a && coord != b {
                board.cells[coord.cell_index()].restrict(set(&[3, 7]));
            }
        }
        board.assign_groups();
        board.sweep_locked_values().unwrap();

        for coord in [a, b] {
            let cell = &board.cells()[coord.cell_index()];
            assert_eq!(cell.candidates(), set(&[3, 7]));
            assert_eq!(cell.rank(), GroupRank::Pair);
        }
        for x in 0..9 {
            let coord = Coord::new(x, 0);
            if coord != a && coord != b {
                let candidates = board.cells()[coord.cell_index()].candidates();
                assert!(!candidates.contains(value(3)));
                assert!(!candidates.contains(value(7)));
            }
        }
    }

    #[test]
    fn test_passes_shrink_monotonically_and_stay_consistent() {
        let mut board = Board::new(&medium_givens());
        for _ in 0..12 {
            let before: Vec<Candidates> =
                board.cells().iter().map(Cell::candidates).collect();
            board.eliminate_solved().unwrap();
            board.assign_unique();
            board.assign_groups();
            board.sweep_locked_values().unwrap();
            board.check_consistency().unwrap();
            for (cell, &previous) in board.cells().iter().zip(&before) {
                assert!(
                    cell.candidates().is_subset(previous),
                    "{} grew from {previous:?} to {:?}",
                    cell.coord(),
                    cell.candidates()
                );
            }
        }
    }

    #[test]
    fn test_contradiction_is_reported() {
        // The peers of (0, 0) carry all nine values, so elimination leaves
        // it with nothing.
        let givens = Givens::from_triples([
            (1, 0, 1),
            (2, 0, 2),
            (3, 0, 3),
            (4, 0, 4),
            (5, 0, 5),
            (6, 0, 6),
            (7, 0, 7),
            (8, 0, 8),
            (0, 1, 9),
        ])
        .unwrap();
        let mut board = Board::new(&givens);
        let result = board.solve();
        assert_eq!(
            result,
            Err(SolverError::Contradiction {
                coord: Coord::new(0, 0)
            })
        );
    }

    #[test]
    fn test_check_consistency_flags_duplicates() {
        let givens = Givens::from_triples([(0, 0, 5), (8, 0, 5)]).unwrap();
        let board = Board::new(&givens);
        assert_eq!(
            board.check_consistency(),
            Err(ConsistencyError::DuplicateValue {
                zone: Zone::row(0),
                value: value(5)
            })
        );
    }

    #[test]
    fn test_solve_is_idempotent_after_stall() {
        let mut board = Board::new(&Givens::new());
        // An empty board makes no progress at all.
        assert_eq!(board.solve().unwrap(), Status::Stalled);
        let first = board.snapshot();
        assert_eq!(board.solve().unwrap(), Status::Stalled);
        assert_eq!(board.snapshot(), first);
        assert_eq!(board.candidate_total(), 81 * 9);
    }

    #[test]
    fn test_status_predicates() {
        assert!(Status::Solved.is_solved());
        assert!(Status::Stalled.is_stalled());
        assert!(!Status::Stalled.is_solved());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            // Arbitrary givens may well be contradictory; both runs must
            // then fail identically.
            #[test]
            fn prop_solving_is_deterministic(
                triples in prop::collection::vec((0u8..9, 0u8..9, 1u8..=9), 0..16),
            ) {
                let givens = Givens::from_triples(triples).unwrap();
                let mut first = Board::new(&givens);
                let mut second = Board::new(&givens);
                prop_assert_eq!(first.solve(), second.solve());
                prop_assert_eq!(first.snapshot(), second.snapshot());
            }
        }
    }
}
