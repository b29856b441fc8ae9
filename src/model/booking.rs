//! Booking record as read from the reservation export.

use serde::{Deserialize, Serialize};

/// Column holding the service period ("Lunch Dine-in", "Dinner", ...).
pub const COL_SERVICE: &str = "Service or Event";
/// Column holding the booking time.
pub const COL_TIME: &str = "Time";
/// Column holding the party size.
pub const COL_PARTY_SIZE: &str = "Number of People";
/// Column holding the customer name.
pub const COL_CUSTOMER: &str = "Customer";
/// Column holding the table assignment.
pub const COL_TABLES: &str = "Table(s)";

/// Columns every input file must carry, in display order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_SERVICE,
    COL_TIME,
    COL_PARTY_SIZE,
    COL_CUSTOMER,
    COL_TABLES,
];

/// One row of the booking export. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "Service or Event", default)]
    pub service_category: Option<String>,
    #[serde(rename = "Time", default)]
    pub raw_time: Option<String>,
    #[serde(rename = "Number of People", default)]
    pub party_size: Option<String>,
    #[serde(rename = "Customer", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "Table(s)", default)]
    pub table_spec: Option<String>,
}

impl Booking {
    /// Create a booking with every field set.
    pub fn new(
        service_category: &str,
        raw_time: &str,
        party_size: &str,
        customer_name: &str,
        table_spec: &str,
    ) -> Self {
        Self {
            service_category: non_empty(service_category),
            raw_time: non_empty(raw_time),
            party_size: non_empty(party_size),
            customer_name: non_empty(customer_name),
            table_spec: non_empty(table_spec),
        }
    }

    /// Booking shown on the preview card.
    pub fn sample() -> Self {
        Self::new("Dinner", "7:30 PM", "4", "John Smith", "5")
    }

    /// Time text, or empty when the cell was blank.
    pub fn time_text(&self) -> &str {
        self.raw_time.as_deref().unwrap_or("")
    }

    /// Party size text, trimmed, or empty when the cell was blank.
    pub fn party_size_text(&self) -> &str {
        self.party_size.as_deref().map(str::trim).unwrap_or("")
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
