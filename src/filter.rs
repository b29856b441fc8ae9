//! Selecting bookings by service period.

use crate::model::Booking;
use serde::{Deserialize, Serialize};

/// Which service period to print cards for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFilter {
    #[default]
    All,
    Lunch,
    Dinner,
}

/// Outcome of filtering: matching bookings in input order, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Records(Vec<Booking>),
    Empty,
}

impl Selection {
    pub fn len(&self) -> usize {
        match self {
            Selection::Records(records) => records.len(),
            Selection::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

impl ServiceFilter {
    /// Parse a filter name ("all", "lunch", "dinner"), case-insensitive.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "none" => Some(ServiceFilter::All),
            "lunch" => Some(ServiceFilter::Lunch),
            "dinner" => Some(ServiceFilter::Dinner),
            _ => None,
        }
    }

    /// Keyword matched against the service column, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            ServiceFilter::All => None,
            ServiceFilter::Lunch => Some("lunch"),
            ServiceFilter::Dinner => Some("dinner"),
        }
    }

    /// Check whether a single booking passes this filter.
    pub fn matches(&self, booking: &Booking) -> bool {
        match self.keyword() {
            None => true,
            Some(keyword) => booking
                .service_category
                .as_deref()
                .map(|category| category.to_lowercase().contains(keyword))
                .unwrap_or(false),
        }
    }

    /// Keep the matching bookings, preserving order.
    pub fn apply(&self, bookings: &[Booking]) -> Selection {
        let records: Vec<Booking> = bookings
            .iter()
            .filter(|b| self.matches(b))
            .cloned()
            .collect();

        if records.is_empty() {
            Selection::Empty
        } else {
            Selection::Records(records)
        }
    }

    /// Suffix used in output file names.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ServiceFilter::All => "all_services",
            ServiceFilter::Lunch => "lunch",
            ServiceFilter::Dinner => "dinner",
        }
    }

    /// Default output file name for this filter.
    pub fn output_file_name(&self) -> String {
        format!("brewvino_placecards_{}.pdf", self.file_suffix())
    }
}

impl std::fmt::Display for ServiceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceFilter::All => write!(f, "all"),
            ServiceFilter::Lunch => write!(f, "lunch"),
            ServiceFilter::Dinner => write!(f, "dinner"),
        }
    }
}
