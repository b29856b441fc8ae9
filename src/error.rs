//! Error types for placecard generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for placecard processing, used as the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Input file not found
    FileNotFound = 2,
    /// Input could not be read as CSV
    ParseError = 3,
    /// Required columns missing from the header row
    MissingColumns = 4,
    /// No bookings to render
    NoRecords = 5,
    /// Style value rejected
    InvalidStyle = 6,
    /// PDF assembly or serialization failed
    RenderFailed = 7,
    /// Reading or writing a file failed
    Io = 8,
}

/// Main error type for placecard generation.
#[derive(Debug, Error)]
pub enum PlacecardError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No bookings to render")]
    NoRecords,

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidStyle {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Style config error: {0}")]
    StyleConfig(#[from] serde_json::Error),

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlacecardError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlacecardError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlacecardError::MissingColumns { .. } => ErrorCode::MissingColumns,
            PlacecardError::Csv { .. } => ErrorCode::ParseError,
            PlacecardError::NoRecords => ErrorCode::NoRecords,
            PlacecardError::InvalidStyle { .. } => ErrorCode::InvalidStyle,
            PlacecardError::StyleConfig(_) => ErrorCode::InvalidStyle,
            PlacecardError::Pdf(_) => ErrorCode::RenderFailed,
            PlacecardError::Io(_) => ErrorCode::Io,
        }
    }

    /// Exit status for a process that failed with this error.
    pub fn exit_status(&self) -> u8 {
        self.code() as u8
    }
}

/// Result type alias for placecard operations.
pub type Result<T> = std::result::Result<T, PlacecardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_all() {
        let err = PlacecardError::MissingColumns {
            missing: vec!["Time".to_string(), "Table(s)".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required columns: Time, Table(s)");
        assert_eq!(err.code(), ErrorCode::MissingColumns);
        assert_eq!(err.exit_status(), 4);
    }

    #[test]
    fn test_no_records_code() {
        assert_eq!(PlacecardError::NoRecords.exit_status(), 5);
    }

    #[test]
    fn test_io_errors_have_their_own_code() {
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PlacecardError::from(denied);
        assert_eq!(err.code(), ErrorCode::Io);
        assert_ne!(err.code(), ErrorCode::FileNotFound);
        assert_eq!(err.exit_status(), 8);
    }

    #[test]
    fn test_exit_statuses_are_distinct_failures() {
        let errors = [
            PlacecardError::FileNotFound { path: PathBuf::from("x.csv") },
            PlacecardError::MissingColumns { missing: vec![] },
            PlacecardError::NoRecords,
            PlacecardError::InvalidStyle {
                field: "margin".to_string(),
                expected: "a number".to_string(),
                value: "wide".to_string(),
            },
            PlacecardError::Io(std::io::Error::other("disk full")),
        ];
        let mut statuses: Vec<u8> = errors.iter().map(PlacecardError::exit_status).collect();
        assert!(statuses.iter().all(|s| *s > 1));
        statuses.sort();
        statuses.dedup();
        assert_eq!(statuses.len(), errors.len());
    }
}
