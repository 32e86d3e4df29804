//! A deduction-only sudoku solver.
//!
//! This crate solves 9x9 puzzles by constraint propagation alone: it never
//! guesses and never backtracks. A [`Board`] owns the 81 cells and the 27
//! zones (rows, columns, and boxes) and interleaves four propagation rules
//! to a fixed point:
//!
//! 1. **Elimination** — a zone's resolved values leave its other cells.
//! 2. **Unique assignment** — a value with a single possible location in
//!    some zone is placed there.
//! 3. **Conjugate groups** — pairs, triples, and quadruples of cells that
//!    must hold a matching set of values are locked to exactly those
//!    values ([`ZoneView::locked_groups`]).
//! 4. **Locked-value sweep** — values claimed by a zone's locked cells are
//!    removed from the zone's other cells.
//!
//! Puzzles beyond the reach of these rules terminate in
//! [`Status::Stalled`] with their residual candidates intact.
//!
//! # Examples
//!
//! ```
//! use zonedoku_core::Givens;
//! use zonedoku_solver::{Board, Status};
//!
//! let givens: Givens = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut board = Board::new(&givens);
//! match board.solve()? {
//!     Status::Solved => println!("{}", board.snapshot()),
//!     Status::Stalled => println!("needs trial and error"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod snapshot;
pub mod zone_view;

pub use self::{
    board::{Board, ConsistencyError, SolverError, Status},
    snapshot::{CellState, Snapshot},
    zone_view::{ZoneCoords, ZoneView},
};
