//! Grid coordinates.

use std::fmt::{self, Display};

/// A grid coordinate `(x, y)` with `x, y` in the range 0-8.
///
/// `x` selects the column, `y` the row. The canonical enumeration order of
/// the board is row-major: `(0, 0), (1, 0), ..., (8, 8)`, as produced by
/// [`Coord::all`] and reflected in [`Coord::cell_index`].
///
/// Each coordinate knows the indices of its three owning zones in
/// [`Zone::ALL`], so zone membership never requires scanning the zone table.
///
/// [`Zone::ALL`]: crate::Zone::ALL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    x: u8,
    y: u8,
}

/// Error returned when a raw coordinate lies outside the 9x9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("coordinate ({x}, {y}) is outside the 9x9 grid")]
pub struct CoordOutOfRange {
    /// The rejected x component.
    pub x: u8,
    /// The rejected y component.
    pub y: u8,
}

impl Coord {
    /// Creates a coordinate, panicking out of range.
    ///
    /// Use [`Coord::try_new`] at input boundaries where the components are
    /// not known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a coordinate from raw components.
    ///
    /// # Errors
    ///
    /// Returns [`CoordOutOfRange`] if `x` or `y` is not in the range 0-8.
    pub const fn try_new(x: u8, y: u8) -> Result<Self, CoordOutOfRange> {
        if x < 9 && y < 9 {
            Ok(Self { x, y })
        } else {
            Err(CoordOutOfRange { x, y })
        }
    }

    /// Creates a coordinate from its row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self {
            x: index % 9,
            y: index / 9,
        }
    }

    /// Returns the x (column) component.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the y (row) component.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this coordinate (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3x3 box containing this coordinate
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Index of the containing row zone in [`Zone::ALL`].
    ///
    /// [`Zone::ALL`]: crate::Zone::ALL
    #[must_use]
    pub const fn row_zone(self) -> usize {
        self.y as usize
    }

    /// Index of the containing column zone in [`Zone::ALL`].
    ///
    /// [`Zone::ALL`]: crate::Zone::ALL
    #[must_use]
    pub const fn column_zone(self) -> usize {
        9 + self.x as usize
    }

    /// Index of the containing box zone in [`Zone::ALL`].
    ///
    /// [`Zone::ALL`]: crate::Zone::ALL
    #[must_use]
    pub const fn box_zone(self) -> usize {
        18 + self.box_index() as usize
    }

    /// Indices of the three zones containing this coordinate, in
    /// row, column, box order.
    #[must_use]
    pub const fn zone_indices(self) -> [usize; 3] {
        [self.row_zone(), self.column_zone(), self.box_zone()]
    }

    /// Returns all 81 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_cell_index)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert!(Coord::try_new(8, 8).is_ok());
        assert_eq!(Coord::try_new(9, 0), Err(CoordOutOfRange { x: 9, y: 0 }));
        assert_eq!(Coord::try_new(0, 9), Err(CoordOutOfRange { x: 0, y: 9 }));
    }

    #[test]
    fn test_cell_index_is_row_major() {
        assert_eq!(Coord::new(0, 0).cell_index(), 0);
        assert_eq!(Coord::new(8, 0).cell_index(), 8);
        assert_eq!(Coord::new(0, 1).cell_index(), 9);
        assert_eq!(Coord::new(4, 4).cell_index(), 40);
        assert_eq!(Coord::new(8, 8).cell_index(), 80);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Coord::new(0, 0).box_index(), 0);
        assert_eq!(Coord::new(8, 0).box_index(), 2);
        assert_eq!(Coord::new(4, 4).box_index(), 4);
        assert_eq!(Coord::new(2, 8).box_index(), 6);
        assert_eq!(Coord::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_zone_indices() {
        let coord = Coord::new(5, 2);
        assert_eq!(coord.zone_indices(), [2, 14, 19]);
    }

    #[test]
    fn test_all_enumerates_in_order() {
        let coords: Vec<_> = Coord::all().collect();
        assert_eq!(coords.len(), 81);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[1], Coord::new(1, 0));
        assert_eq!(coords[80], Coord::new(8, 8));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn prop_cell_index_round_trips(x in 0u8..9, y in 0u8..9) {
            let coord = Coord::new(x, y);
            prop_assert_eq!(Coord::from_cell_index(coord.cell_index()), coord);
        }
    }
}
