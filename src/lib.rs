//! placecards - Reservation placecard generator.
//!
//! Reads a booking export (CSV), normalizes the fields of each booking and
//! renders one "RESERVED" placecard per booking, four to a landscape US
//! Letter page, into a PDF.
//!
//! # Example
//!
//! ```no_run
//! use placecards::{generate_from_csv, Generation, ServiceFilter, StyleConfig};
//! use std::path::Path;
//!
//! let style = StyleConfig::default();
//! match generate_from_csv(Path::new("bookings.csv"), ServiceFilter::Dinner, &style).unwrap() {
//!     Generation::Document(pdf) => std::fs::write("brewvino_placecards_dinner.pdf", pdf).unwrap(),
//!     Generation::NoMatches => println!("No dinner bookings"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::PageGeometry;
pub use error::{ErrorCode, PlacecardError, Result};
pub use filter::{Selection, ServiceFilter};
pub use generator::{render_pages, Canvas, CommandRecorder, DrawCommand, PdfCanvas};
pub use layout::{layout_card, paginate, sample_page, CardLayout, PageLayout};
pub use model::{
    load_style_config, Booking, Color, FontFamily, Placecard, StyleConfig, StyleLoad,
    StyleOverrides, StyleSource,
};
pub use normalize::{capitalize_name, extract_table_numbers, time_range};
pub use parser::{parse_bookings, parse_bookings_file, BookingTable};
pub use validation::{validate_bookings, validate_columns, validate_style, ValidationResult};

/// Result of running the whole pipeline on one export.
#[derive(Debug)]
pub enum Generation {
    /// The rendered PDF.
    Document(Vec<u8>),
    /// The filter left nothing to print; no document was built.
    NoMatches,
}

/// Render placecards for `bookings` into PDF bytes.
///
/// An empty slice is rejected so a zero-page document is never produced.
pub fn generate_placecards(bookings: &[Booking], style: &StyleConfig) -> Result<Vec<u8>> {
    if bookings.is_empty() {
        return Err(PlacecardError::NoRecords);
    }
    check_style(style)?;

    let page = PageGeometry::landscape_letter(style.margin);
    let pages = paginate(bookings, style, &page);
    tracing::info!(
        "Rendering {} placecard(s) on {} page(s)",
        bookings.len(),
        pages.len()
    );
    render_pages(&pages, PdfCanvas::new(&page, "Placecards"))
}

/// Render a one-page PDF with a single sample card at the configured card size.
pub fn generate_sample_card(style: &StyleConfig) -> Result<Vec<u8>> {
    check_style(style)?;
    let page = PageGeometry::landscape_letter(style.margin);
    let sample = sample_page(style, &page);
    render_pages(&[sample], PdfCanvas::new(&page, "Placecard preview"))
}

/// Parse an export and apply the service filter.
///
/// Missing columns fail before any row is read. An empty selection is
/// logged and returned as [`Selection::Empty`].
pub fn select_bookings(input_path: &std::path::Path, filter: ServiceFilter) -> Result<Selection> {
    let table = parse_bookings_file(input_path)?;
    tracing::info!("Found {} booking(s)", table.len());

    let selection = filter.apply(&table.bookings);
    match &selection {
        Selection::Empty => tracing::warn!("No bookings found for service '{}'", filter),
        Selection::Records(records) => match filter {
            ServiceFilter::All => tracing::info!("Including all {} booking(s)", records.len()),
            service => tracing::info!("Filtered to {} {} booking(s)", records.len(), service),
        },
    }
    Ok(selection)
}

/// Parse an export, filter it and render the matching bookings.
///
/// An empty selection returns [`Generation::NoMatches`] without touching the
/// renderer.
pub fn generate_from_csv(
    input_path: &std::path::Path,
    filter: ServiceFilter,
    style: &StyleConfig,
) -> Result<Generation> {
    match select_bookings(input_path, filter)? {
        Selection::Empty => Ok(Generation::NoMatches),
        Selection::Records(records) => {
            let validation = validate_bookings(&records);
            for warning in &validation.warnings {
                tracing::warn!("{}", warning);
            }
            generate_placecards(&records, style).map(Generation::Document)
        }
    }
}

/// Validate a style, logging warnings. Errors are joined into one
/// [`PlacecardError::InvalidStyle`].
pub fn check_style(style: &StyleConfig) -> Result<()> {
    let validation = validate_style(style);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if validation.passed {
        Ok(())
    } else {
        Err(PlacecardError::InvalidStyle {
            field: "style".to_string(),
            expected: "printable layout settings".to_string(),
            value: validation.errors.join("; "),
        })
    }
}
