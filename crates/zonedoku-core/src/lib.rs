//! Core data structures for zone-based sudoku deduction.
//!
//! This crate provides the data model shared by the solving components:
//!
//! - [`value`]: validated puzzle values 1-9
//! - [`candidates`]: per-cell candidate sets backed by a 9-bit mask
//! - [`coord`]: grid coordinates with row-major indexing and owning-zone
//!   lookup
//! - [`cell`]: a grid position with its candidates and lock rank
//! - [`zone`]: the 27 rows, columns, and boxes as boundary-test regions
//! - [`givens`]: the puzzle input mapping, with boundary validation and a
//!   grid text format
//!
//! The crate contains no solving logic; see `zonedoku-solver` for the
//! deduction engine.
//!
//! # Examples
//!
//! ```
//! use zonedoku_core::{Cell, Coord, Value, Zone};
//!
//! let coord = Coord::new(4, 2);
//! let cell = Cell::given(coord, Value::new(8)?);
//! assert!(cell.is_solved());
//!
//! // Every coordinate belongs to exactly one row, column, and box.
//! let owners = coord.zone_indices().map(|i| Zone::ALL[i]);
//! assert!(owners.iter().all(|zone| zone.contains(coord)));
//! # Ok::<(), zonedoku_core::ValueOutOfRange>(())
//! ```

pub mod candidates;
pub mod cell;
pub mod coord;
pub mod givens;
pub mod value;
pub mod zone;

pub use self::{
    candidates::Candidates,
    cell::{Cell, GroupRank},
    coord::{Coord, CoordOutOfRange},
    givens::{Givens, GivensError, ParseGivensError},
    value::{Value, ValueOutOfRange},
    zone::{Zone, ZoneKind},
};
