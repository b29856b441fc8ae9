//! Display lines of a single placecard.

use crate::model::Booking;
use crate::normalize::{capitalize_name, extract_table_numbers, time_range};
use serde::Serialize;

/// Fixed header printed on every card.
pub const HEADER_TEXT: &str = "RESERVED";

/// Normalized, render-ready text for one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placecard {
    /// Capitalized customer name, or "Guest".
    pub name: String,
    /// "<start> - <end>" time window.
    pub time_range: String,
    /// Comma-joined table numbers, or "TBD".
    pub tables: String,
    /// Party size as given in the input.
    pub party_size: String,
}

impl Placecard {
    /// Normalize a booking's fields into display lines.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            name: capitalize_name(booking.customer_name.as_deref()),
            time_range: time_range(booking.time_text()),
            tables: extract_table_numbers(booking.table_spec.as_deref()),
            party_size: booking.party_size_text().to_string(),
        }
    }

    /// Left footer text, e.g. "T5,12".
    pub fn table_label(&self) -> String {
        format!("T{}", self.tables)
    }

    /// Right footer text, e.g. "4P".
    pub fn party_label(&self) -> String {
        format!("{}P", self.party_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_booking() {
        let booking = Booking::new("Dinner", "19:30", "4", "  jane   mcdonald ", "T5, 12a");
        let card = Placecard::from_booking(&booking);
        assert_eq!(
            card,
            Placecard {
                name: "Jane Mcdonald".to_string(),
                time_range: "7:30 PM - 9:30 PM".to_string(),
                tables: "5,12".to_string(),
                party_size: "4".to_string(),
            }
        );
        assert_eq!(card.table_label(), "T5,12");
        assert_eq!(card.party_label(), "4P");
    }

    #[test]
    fn test_from_empty_booking() {
        let card = Placecard::from_booking(&Booking::default());
        assert_eq!(card.name, "Guest");
        assert_eq!(card.tables, "TBD");
        assert_eq!(card.time_range, " - ");
        assert_eq!(card.table_label(), "TTBD");
    }
}
