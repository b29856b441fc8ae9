//! CSV booking export reader.

use crate::error::{PlacecardError, Result};
use crate::model::Booking;
use crate::validation::validate_columns;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed export: the header row plus every booking, in file order.
#[derive(Debug, Clone, Default)]
pub struct BookingTable {
    /// Column names as they appear in the header row.
    pub headers: Vec<String>,
    /// One booking per data row.
    pub bookings: Vec<Booking>,
}

impl BookingTable {
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Parse a booking export from a file.
pub fn parse_bookings_file(path: &Path) -> Result<BookingTable> {
    if !path.exists() {
        return Err(PlacecardError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    parse_bookings(file, path)
}

/// Parse a booking export from any reader. `origin` is used in error messages.
///
/// The header row is checked for every required column before any data row
/// is read.
pub fn parse_bookings<R: Read>(reader: R, origin: &Path) -> Result<BookingTable> {
    let csv_err = |source: csv::Error| PlacecardError::Csv {
        path: PathBuf::from(origin),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    validate_columns(headers.as_slice())?;

    let mut bookings = Vec::new();
    for result in reader.deserialize::<Booking>() {
        bookings.push(result.map_err(csv_err)?);
    }

    debug!(
        "Read {} booking(s) with {} column(s) from {}",
        bookings.len(),
        headers.len(),
        origin.display()
    );

    Ok(BookingTable { headers, bookings })
}
