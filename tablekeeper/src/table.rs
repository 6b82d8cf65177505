//! Table types for restaurant seating.
//!
//! A [`Table`] is one reservable unit of capacity. Tables are numbered from 1
//! and carry a two-valued availability flag.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// A valid table number (1 or greater).
///
/// # Examples
///
/// ```
/// use tablekeeper::TableNumber;
///
/// let number = TableNumber::try_from(3).unwrap();
/// assert_eq!(number.value(), 3);
///
/// assert!(TableNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(u32);

impl TableNumber {
    /// The lowest valid table number.
    pub const MIN: u32 = 1;

    /// Returns the underlying number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Numbers `1..=count` in ascending order.
    pub(crate) fn sequence(count: u32) -> impl Iterator<Item = Self> {
        (Self::MIN..=count).map(Self)
    }
}

impl TryFrom<u32> for TableNumber {
    type Error = InvalidTableNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidTableNumberError {
                value,
                reason: "table numbers start at 1".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid table numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTableNumberError {
    /// The invalid value.
    pub value: u32,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidTableNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid table number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidTableNumberError {}

/// A single physical table.
///
/// The table itself does not check its own transitions: [`Table::reserve`] on
/// a reserved table is allowed. The restaurant only reserves available tables.
///
/// # Examples
///
/// ```
/// use tablekeeper::{Table, TableNumber};
///
/// let mut table = Table::new(TableNumber::try_from(1).unwrap());
/// assert!(table.is_available());
///
/// table.reserve();
/// assert!(!table.is_available());
///
/// table.release();
/// assert!(table.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    number: TableNumber,
    available: bool,
}

impl Table {
    /// Creates an available table.
    #[must_use]
    pub const fn new(number: TableNumber) -> Self {
        Self {
            number,
            available: true,
        }
    }

    /// Returns the table number.
    #[must_use]
    pub const fn number(&self) -> TableNumber {
        self.number
    }

    /// Returns `true` if nobody is seated at this table.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Marks the table as reserved.
    pub fn reserve(&mut self) {
        self.available = false;
    }

    /// Marks the table as available.
    pub fn release(&mut self) {
        self.available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: u32) -> TableNumber {
        TableNumber::try_from(n).unwrap()
    }

    #[test]
    fn test_table_number_rejects_zero() {
        let err = TableNumber::try_from(0).unwrap_err();
        assert_eq!(err.value, 0);
        assert!(err.to_string().contains("start at 1"));
    }

    #[test]
    fn test_table_number_ordering() {
        assert!(number(1) < number(2));
        assert_eq!(number(5).to_string(), "5");
    }

    #[test]
    fn test_sequence() {
        let numbers: Vec<u32> = TableNumber::sequence(3).map(TableNumber::value).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(TableNumber::sequence(0).count(), 0);
    }

    #[test]
    fn test_table_starts_available() {
        let table = Table::new(number(4));
        assert!(table.is_available());
        assert_eq!(table.number(), number(4));
    }

    #[test]
    fn test_reserve_and_release() {
        let mut table = Table::new(number(1));
        table.reserve();
        assert!(!table.is_available());
        table.release();
        assert!(table.is_available());
    }

    #[test]
    fn test_reserve_is_unchecked() {
        let mut table = Table::new(number(1));
        table.reserve();
        table.reserve();
        assert!(!table.is_available());
    }

    #[test]
    fn test_table_number_serializes_transparently() {
        let json = serde_json::to_string(&number(12)).unwrap();
        assert_eq!(json, "12");
    }
}
