//! Puzzle value representation.

use std::fmt::{self, Display};

/// A puzzle value in the range 1-9.
///
/// Construction goes through [`Value::new`], which rejects out-of-range
/// numbers, so a `Value` held anywhere in the crate is always valid.
///
/// # Examples
///
/// ```
/// use zonedoku_core::Value;
///
/// let five = Value::new(5)?;
/// assert_eq!(five.get(), 5);
/// assert!(Value::new(0).is_err());
/// assert!(Value::new(10).is_err());
/// # Ok::<(), zonedoku_core::ValueOutOfRange>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value(u8);

/// Error returned when a raw number is outside the range 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("value {value} is outside the range 1-9")]
pub struct ValueOutOfRange {
    /// The rejected raw number.
    pub value: u8,
}

impl Value {
    /// Array containing all values from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a value from a raw number.
    ///
    /// # Errors
    ///
    /// Returns [`ValueOutOfRange`] if `value` is not in the range 1-9.
    pub const fn new(value: u8) -> Result<Self, ValueOutOfRange> {
        if matches!(value, 1..=9) {
            Ok(Self(value))
        } else {
            Err(ValueOutOfRange { value })
        }
    }

    /// Returns the numeric value (1-9).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Bit assigned to this value in a [`Candidates`] mask.
    ///
    /// [`Candidates`]: crate::Candidates
    pub(crate) const fn bit(self) -> u16 {
        1 << (self.0 - 1)
    }

    /// Inverse of [`bit`](Self::bit): value for bit index 0-8.
    ///
    /// Callers keep `index < 9`.
    pub(crate) const fn from_bit_index(index: u8) -> Self {
        debug_assert!(index < 9);
        Self(index + 1)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Value> for u8 {
    fn from(value: Value) -> u8 {
        value.get()
    }
}

impl TryFrom<u8> for Value {
    type Error = ValueOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
