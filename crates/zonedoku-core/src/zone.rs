//! Zones: rows, columns, and 3x3 boxes.

use std::fmt::{self, Display};

use crate::coord::Coord;

/// The three zone families of a 9x9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    /// A full-width row.
    Row,
    /// A full-height column.
    Column,
    /// A 3x3 box.
    Box,
}

/// A rectangular region of the grid that must contain each value 1-9
/// exactly once: a row, a column, or a 3x3 box.
///
/// A zone stores no cells. Membership is the inclusive boundary test
/// [`Zone::contains`]; the board's cell slice is always passed to whatever
/// needs the member cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    kind: ZoneKind,
    xmin: u8,
    xmax: u8,
    ymin: u8,
    ymax: u8,
}

impl Zone {
    /// All 27 zones in row, column, box order.
    ///
    /// The indices into this table match [`Coord::row_zone`],
    /// [`Coord::column_zone`], and [`Coord::box_zone`].
    pub const ALL: [Self; 27] = {
        let mut all = [Self::row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::row(i as u8);
            all[i + 9] = Self::column(i as u8);
            all[i + 18] = Self::box_at(i as u8);
            i += 1;
        }
        all
    };

    /// The row zone at the given y coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub const fn row(y: u8) -> Self {
        assert!(y < 9);
        Self {
            kind: ZoneKind::Row,
            xmin: 0,
            xmax: 8,
            ymin: y,
            ymax: y,
        }
    }

    /// The column zone at the given x coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub const fn column(x: u8) -> Self {
        assert!(x < 9);
        Self {
            kind: ZoneKind::Column,
            xmin: x,
            xmax: x,
            ymin: 0,
            ymax: 8,
        }
    }

    /// The box zone at the given box index (0-8, left to right, top to
    /// bottom).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn box_at(index: u8) -> Self {
        assert!(index < 9);
        let xmin = index % 3 * 3;
        let ymin = index / 3 * 3;
        Self {
            kind: ZoneKind::Box,
            xmin,
            xmax: xmin + 2,
            ymin,
            ymax: ymin + 2,
        }
    }

    /// Returns which family this zone belongs to.
    #[must_use]
    pub const fn kind(self) -> ZoneKind {
        self.kind
    }

    /// Returns `true` if the coordinate falls within this zone's bounds.
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        coord.x() >= self.xmin
            && coord.x() <= self.xmax
            && coord.y() >= self.ymin
            && coord.y() <= self.ymax
    }

    /// Returns the zone's 9 coordinates in row-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (self.ymin..=self.ymax)
            .flat_map(move |y| (self.xmin..=self.xmax).map(move |x| Coord::new(x, y)))
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ZoneKind::Row => write!(f, "row {}", self.ymin),
            ZoneKind::Column => write!(f, "column {}", self.xmin),
            ZoneKind::Box => {
                write!(f, "box {}", self.ymin / 3 * 3 + self.xmin / 3)
            }
        }
    }
}
