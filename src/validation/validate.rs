//! Validation of input columns, booking fields and style settings.

use crate::config::{PageGeometry, EPS};
use crate::error::{PlacecardError, Result};
use crate::model::{Booking, StyleConfig, REQUIRED_COLUMNS};
use crate::normalize::parse_time;

/// Title font sizes offered by the style editor.
pub const TITLE_SIZE_RANGE: (f64, f64) = (10.0, 30.0);

/// Content font sizes offered by the style editor.
pub const CONTENT_SIZE_RANGE: (f64, f64) = (8.0, 24.0);

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Check that every required column is present (exact, case-sensitive).
pub fn validate_columns<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.as_ref() == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PlacecardError::MissingColumns { missing })
    }
}

/// Report fields that will print as placeholders. Never fails.
pub fn validate_bookings(bookings: &[Booking]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, booking) in bookings.iter().enumerate() {
        // Row 1 is the header.
        let row = idx + 2;

        if booking
            .customer_name
            .as_deref()
            .map_or(true, |n| n.trim().is_empty())
        {
            result.add_warning(format!("Row {}: No customer name, printing 'Guest'", row));
        }

        if parse_time(booking.time_text()).is_none() {
            result.add_warning(format!(
                "Row {}: Unrecognized time '{}', printing it unchanged",
                row,
                booking.time_text()
            ));
        }

        let has_table_digits = booking
            .table_spec
            .as_deref()
            .map_or(false, |t| t.chars().any(|c| c.is_ascii_digit()));
        if !has_table_digits {
            result.add_warning(format!("Row {}: No table number, printing 'TBD'", row));
        }

        let party = booking.party_size_text();
        if party.is_empty() || party.parse::<u32>().is_err() {
            result.add_warning(format!("Row {}: Party size '{}' is not a whole number", row, party));
        }
    }

    result
}

/// Check style values that would break the layout.
pub fn validate_style(style: &StyleConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (field, value) in [
        ("title_font_size", style.title_font_size),
        ("content_font_size", style.content_font_size),
        ("card_width", style.card_width),
        ("card_height", style.card_height),
    ] {
        if !(value > EPS) {
            result.add_error(format!("Style: {} must be positive (got {})", field, value));
        }
    }

    if !(style.margin >= 0.0) {
        result.add_error(format!("Style: margin must not be negative (got {})", style.margin));
    } else if !PageGeometry::landscape_letter(style.margin).has_content_area() {
        result.add_error(format!(
            "Style: margin of {}in leaves no room on the page",
            style.margin
        ));
    }

    check_range(
        &mut result,
        "title_font_size",
        style.title_font_size,
        TITLE_SIZE_RANGE,
    );
    check_range(
        &mut result,
        "content_font_size",
        style.content_font_size,
        CONTENT_SIZE_RANGE,
    );

    result
}

fn check_range(result: &mut ValidationResult, field: &str, value: f64, (min, max): (f64, f64)) {
    if value > EPS && (value < min || value > max) {
        result.add_warning(format!(
            "Style: {} of {} is outside the usual range {}-{}",
            field, value, min, max
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    // ==================== validate_columns tests ====================

    #[test]
    fn test_validate_columns_all_present() {
        let headers = ["Customer", "Table(s)", "Time", "Number of People", "Service or Event"];
        assert!(validate_columns(&headers).is_ok());
    }

    #[test]
    fn test_validate_columns_lists_missing_in_order() {
        let headers = ["Customer", "Notes"];
        match validate_columns(&headers) {
            Err(PlacecardError::MissingColumns { missing }) => assert_eq!(
                missing,
                vec!["Service or Event", "Time", "Number of People", "Table(s)"]
            ),
            other => panic!("Expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_columns_sample_schema_is_rejected() {
        let headers = ["name", "table_number", "booking_time", "party_size"];
        match validate_columns(&headers) {
            Err(PlacecardError::MissingColumns { missing }) => assert_eq!(missing.len(), 5),
            other => panic!("Expected MissingColumns, got {:?}", other),
        }
    }

    // ==================== validate_bookings tests ====================

    #[test]
    fn test_validate_bookings_clean() {
        let bookings = vec![Booking::new("Dinner", "7:30 PM", "4", "Ann Lee", "T5")];
        let result = validate_bookings(&bookings);
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_bookings_placeholders_warn() {
        let bookings = vec![
            Booking::new("Dinner", "7:30 PM", "4", "Ann Lee", "T5"),
            Booking::new("Dinner", "later", "four", "", "patio"),
        ];
        let result = validate_bookings(&bookings);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 4);
        assert!(result.warnings.iter().all(|w| w.starts_with("Row 3:")));
        assert!(result.warnings.iter().any(|w| w.contains("'Guest'")));
        assert!(result.warnings.iter().any(|w| w.contains("'later'")));
        assert!(result.warnings.iter().any(|w| w.contains("'TBD'")));
        assert!(result.warnings.iter().any(|w| w.contains("'four'")));
    }

    // ==================== validate_style tests ====================

    #[test]
    fn test_validate_style_defaults_pass() {
        let result = validate_style(&StyleConfig::default());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_style_non_positive_size() {
        let style = StyleConfig {
            content_font_size: 0.0,
            ..Default::default()
        };
        let result = validate_style(&style);
        assert!(!result.passed);
        assert!(result.errors[0].contains("content_font_size"));
    }

    #[test]
    fn test_validate_style_margin_too_large() {
        let style = StyleConfig {
            margin: 5.0,
            ..Default::default()
        };
        let result = validate_style(&style);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("leaves no room")));
    }

    #[test]
    fn test_validate_style_negative_margin() {
        let style = StyleConfig {
            margin: -0.1,
            ..Default::default()
        };
        assert!(!validate_style(&style).passed);
    }

    #[test]
    fn test_validate_style_out_of_range_warns() {
        let style = StyleConfig {
            title_font_size: 40.0,
            content_font_size: 6.0,
            ..Default::default()
        };
        let result = validate_style(&style);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 2);
    }
}
