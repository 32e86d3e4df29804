//! Candidate analysis over a single zone.

use itertools::Itertools as _;
use tinyvec::ArrayVec;
use zonedoku_core::{Candidates, Cell, Coord, Value, Zone};

/// Coordinates of cells within a single zone (at most 9).
pub type ZoneCoords = ArrayVec<[Coord; 9]>;

/// A borrowing view over one zone of the board's full cell slice.
///
/// The view never caches membership: every query walks the zone's bounds
/// against the slice it was given, so it always reflects the current cell
/// state. All results are newly computed values; nothing aliases the cells.
///
/// Member cells are visited in the board's row-major order, and values
/// ascending, which makes every analysis below deterministic.
#[derive(Debug, Clone, Copy)]
pub struct ZoneView<'a> {
    zone: Zone,
    cells: &'a [Cell],
}

impl<'a> ZoneView<'a> {
    /// Creates a view of `zone` over the board's 81-cell slice.
    #[must_use]
    pub fn new(zone: Zone, cells: &'a [Cell]) -> Self {
        debug_assert_eq!(cells.len(), 81);
        Self { zone, cells }
    }

    /// Returns the zone under analysis.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    fn cell(&self, coord: Coord) -> &'a Cell {
        &self.cells[coord.cell_index()]
    }

    /// Returns the zone's member cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = &'a Cell> {
        let cells = self.cells;
        self.zone
            .coords()
            .map(move |coord| &cells[coord.cell_index()])
    }

    /// Returns the member cells that are solved.
    pub fn solved_cells(self) -> impl Iterator<Item = &'a Cell> {
        self.cells().filter(|cell| cell.is_solved())
    }

    /// Returns the member cells that are not solved.
    pub fn unsolved_cells(self) -> impl Iterator<Item = &'a Cell> {
        self.cells().filter(|cell| !cell.is_solved())
    }

    /// Returns the set of values already resolved within the zone.
    ///
    /// A duplicate resolved value would indicate an invalid puzzle; it is
    /// not checked here.
    #[must_use]
    pub fn solved_values(&self) -> Candidates {
        self.solved_cells().filter_map(Cell::solved_value).collect()
    }

    /// Returns the coordinates of member cells still allowing `value`.
    #[must_use]
    pub fn cells_allowing(&self, value: Value) -> ZoneCoords {
        self.cells()
            .filter(|cell| cell.candidates().contains(value))
            .map(Cell::coord)
            .collect()
    }

    /// For every value 1-9, the member cells still allowing it, keeping
    /// only values with exactly `frequency` possible locations.
    ///
    /// `frequency == 1` drives unique-location assignment; 2, 3, and 4 feed
    /// the locked-group search.
    #[must_use]
    pub fn value_frequency(&self, frequency: usize) -> Vec<(Value, ZoneCoords)> {
        Value::ALL
            .into_iter()
            .filter_map(|value| {
                let coords = self.cells_allowing(value);
                (coords.len() == frequency).then_some((value, coords))
            })
            .collect()
    }

    /// Searches the zone for locked groups of exactly `size` cells.
    ///
    /// A locked group is a set of `size` cells and `size` values such that
    /// every chosen value can only live in the chosen cells; the cells may
    /// then hold nothing but the chosen values. Returns each member cell's
    /// coordinate with its restricted value subset.
    ///
    /// The search is exhaustive: every combination of `size` pool cells is
    /// paired with every combination of `size` qualifying values. A value
    /// qualifies when it is confined to `k` member cells for some
    /// `k <= size` (so a pair-confined value participates in triple and
    /// quadruple groups too). A pairing is accepted when every chosen cell
    /// allows between 2 and `size` of the chosen values, and every chosen
    /// value is allowed by exactly its `k` chosen cells. Cells already
    /// locked into a smaller group stay out of the pool, so a found pair is
    /// not re-derived as a larger group.
    ///
    /// `C(n, size) * C(m, size)` pairings with `n, m <= 9`; small enough to
    /// enumerate outright.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not 2, 3, or 4.
    #[must_use]
    pub fn locked_groups(&self, size: usize) -> Vec<(Coord, Candidates)> {
        assert!(matches!(size, 2..=4), "group size must be 2, 3, or 4");

        // Values confined to k member cells, k = 2..=size. Each value has a
        // single frequency, so the buckets are disjoint.
        let mut confined: Vec<(Value, usize, ZoneCoords)> = Vec::new();
        for k in 2..=size {
            for (value, coords) in self.value_frequency(k) {
                confined.push((value, k, coords));
            }
        }
        if confined.len() < size {
            return Vec::new();
        }
        confined.sort_by_key(|&(value, _, _)| value);

        // Candidate cell pool: every location of a confined value, skipping
        // cells already locked into a smaller group in this zone.
        let mut pool: Vec<Coord> = Vec::new();
        for (_, _, coords) in &confined {
            for &coord in coords.iter() {
                if pool.contains(&coord) {
                    continue;
                }
                let locked_smaller = self
                    .cell(coord)
                    .rank()
                    .group_size()
                    .is_some_and(|k| k < size);
                if !locked_smaller {
                    pool.push(coord);
                }
            }
        }
        pool.sort_by_key(|coord| coord.cell_index());

        // With exactly `size` qualifying values there must be exactly
        // `size` pool cells, or no group exists.
        if confined.len() == size && pool.len() != size {
            return Vec::new();
        }

        let participants: Vec<(Value, usize)> =
            confined.iter().map(|&(value, k, _)| (value, k)).collect();

        let mut groups: Vec<(Coord, Candidates)> = Vec::new();
        for chosen_cells in pool.iter().copied().combinations(size) {
            'pairings: for chosen_values in participants.iter().copied().combinations(size) {
                // Which of the chosen values each chosen cell still allows.
                let mut allowed: ArrayVec<[Candidates; 4]> = ArrayVec::new();
                for &coord in &chosen_cells {
                    let candidates = self.cell(coord).candidates();
                    let subset: Candidates = chosen_values
                        .iter()
                        .map(|&(value, _)| value)
                        .filter(|&value| candidates.contains(value))
                        .collect();
                    if subset.len() < 2 || subset.len() > size {
                        continue 'pairings;
                    }
                    allowed.push(subset);
                }
                // Every chosen value must have all of its k locations among
                // the chosen cells.
                for &(value, k) in &chosen_values {
                    let tally = allowed
                        .iter()
                        .filter(|subset| subset.contains(value))
                        .count();
                    if tally != k {
                        continue 'pairings;
                    }
                }
                for (&coord, &subset) in chosen_cells.iter().zip(allowed.iter()) {
                    if !groups.iter().any(|&(taken, _)| taken == coord) {
                        groups.push((coord, subset));
                    }
                }
                // First satisfying pairing for this cell set wins.
                break;
            }
        }
        groups
    }
}
