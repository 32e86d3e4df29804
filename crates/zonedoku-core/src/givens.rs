//! The initial fixed values of a puzzle.

use std::str::FromStr;

use crate::{
    coord::{Coord, CoordOutOfRange},
    value::{Value, ValueOutOfRange},
};

/// The input mapping from coordinates to fixed values.
///
/// Coordinates not present default to "unknown" (all nine candidates
/// allowed). No check is made that the fixed values themselves form a
/// consistent puzzle; a contradictory puzzle surfaces later, during solving.
///
/// # Examples
///
/// Building from raw triples, with validation at the boundary:
///
/// ```
/// use zonedoku_core::Givens;
///
/// let givens = Givens::from_triples([(0, 0, 5), (8, 8, 1)])?;
/// assert_eq!(givens.len(), 2);
/// assert!(Givens::from_triples([(9, 0, 5)]).is_err());
/// assert!(Givens::from_triples([(0, 0, 12)]).is_err());
/// # Ok::<(), zonedoku_core::GivensError>(())
/// ```
///
/// Parsing the grid text format (digits for givens; `.`, `_`, or `0` for
/// empty cells; whitespace ignored):
///
/// ```
/// use zonedoku_core::{Coord, Givens, Value};
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
/// assert_eq!(givens.get(Coord::new(0, 0)), Some(Value::new(5)?));
/// assert_eq!(givens.get(Coord::new(2, 0)), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Givens {
    cells: [Option<Value>; 81],
}

impl Default for Givens {
    fn default() -> Self {
        Self {
            cells: [None; 81],
        }
    }
}

/// Error returned when a raw given lies outside the grid or value range.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum GivensError {
    /// The coordinate is outside the 9x9 grid.
    #[display("{_0}")]
    Coord(CoordOutOfRange),
    /// The value is outside the range 1-9.
    #[display("{_0}")]
    Value(ValueOutOfRange),
}

/// Error returned when parsing the grid text format fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGivensError {
    /// A character other than a digit, placeholder, or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text did not describe exactly 81 cells.
    #[display("grid text has {cells} cells, expected 81")]
    WrongCellCount {
        /// The number of cells found.
        cells: usize,
    },
}

impl Givens {
    /// Creates an empty set of givens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds givens from raw `(x, y, value)` triples.
    ///
    /// Later triples overwrite earlier ones at the same coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GivensError`] on the first out-of-range coordinate or
    /// value.
    pub fn from_triples<I>(triples: I) -> Result<Self, GivensError>
    where
        I: IntoIterator<Item = (u8, u8, u8)>,
    {
        let mut givens = Self::new();
        for (x, y, value) in triples {
            let coord = Coord::try_new(x, y)?;
            let value = Value::new(value)?;
            givens.set(coord, value);
        }
        Ok(givens)
    }

    /// Fixes a value at a coordinate.
    pub fn set(&mut self, coord: Coord, value: Value) {
        self.cells[coord.cell_index()] = Some(value);
    }

    /// Returns the fixed value at a coordinate, if any.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Value> {
        self.cells[coord.cell_index()]
    }

    /// Returns the number of fixed cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell is fixed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterates over the fixed cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Value)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|value| (Coord::from_cell_index(index), value)))
    }
}

impl FromStr for Givens {
    type Err = ParseGivensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut givens = Self::new();
        let mut cells = 0usize;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    let raw = character as u8 - b'0';
                    let value = Value::new(raw)
                        .map_err(|_| ParseGivensError::UnexpectedCharacter { character })?;
                    Some(value)
                }
                _ => return Err(ParseGivensError::UnexpectedCharacter { character }),
            };
            if cells < 81
                && let Some(value) = value
            {
                givens.set(Coord::from_cell_index(cells), value);
            }
            cells += 1;
        }
        if cells == 81 {
            Ok(givens)
        } else {
            Err(ParseGivensError::WrongCellCount { cells })
        }
    }
}
