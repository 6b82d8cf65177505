//! Serializable view of a restaurant's state.

use serde::Serialize;

use crate::TableNumber;

/// Point-in-time state of a restaurant, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantSnapshot {
    /// Every table in ascending number order.
    pub tables: Vec<TableSnapshot>,
    /// Names of customers still waiting, oldest first.
    pub waitlist: Vec<String>,
    /// Waitlist entries whose customer has been withdrawn.
    pub stale_entries: usize,
}

/// State of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    /// The table number.
    pub number: TableNumber,
    /// Whether the table is free.
    pub available: bool,
    /// Who is seated there, if anyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seated: Option<String>,
}

impl RestaurantSnapshot {
    /// Number of free tables.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.tables.iter().filter(|t| t.available).count()
    }
}
