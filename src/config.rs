//! Configuration constants and page geometry.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// US Letter width in points (portrait).
pub const LETTER_WIDTH_PT: f64 = 612.0;

/// US Letter height in points (portrait).
pub const LETTER_HEIGHT_PT: f64 = 792.0;

/// Cards per page (2x2 grid).
pub const CARDS_PER_PAGE: usize = 4;

/// Grid columns per page.
pub const GRID_COLUMNS: usize = 2;

/// Grid rows per page.
pub const GRID_ROWS: usize = 2;

/// Cell height reduction so both rows fit inside the margins.
pub const CELL_HEIGHT_FACTOR: f64 = 0.95;

/// Card region fractions of card height, top to bottom.
pub const HEADER_FRACTION: f64 = 0.25;
pub const NAME_FRACTION: f64 = 0.25;
pub const TIME_FRACTION: f64 = 0.20;
pub const SPACER_FRACTION: f64 = 0.10;
pub const FOOTER_FRACTION: f64 = 0.20;

/// Inner horizontal padding of the footer halves, in points.
pub const FOOTER_PADDING_PT: f64 = 6.0;

/// Line width for the card outline and header rule, in points.
pub const RULE_WIDTH_PT: f64 = 1.0;

/// Header text is this much larger than the title size.
pub const HEADER_SIZE_BUMP: f64 = 2.0;

/// Smallest font size text is shrunk to when it overflows its region.
pub const MIN_FONT_SIZE: f64 = 6.0;

/// Default style config file name.
pub const DEFAULT_STYLE_FILE: &str = "design_specs.json";

/// Convert inches to PDF points.
#[inline]
pub fn inches_to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Full page width.
    pub width: f64,
    /// Full page height.
    pub height: f64,
    /// Margin applied to every side.
    pub margin: f64,
}

impl PageGeometry {
    /// US Letter in landscape orientation with a uniform margin in inches.
    pub fn landscape_letter(margin_inches: f64) -> Self {
        Self {
            width: LETTER_HEIGHT_PT,
            height: LETTER_WIDTH_PT,
            margin: inches_to_points(margin_inches),
        }
    }

    /// Width left for content once both side margins are removed.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height left for content once top and bottom margins are removed.
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Width of one grid cell.
    pub fn cell_width(&self) -> f64 {
        self.content_width() / GRID_COLUMNS as f64
    }

    /// Height of one grid cell.
    pub fn cell_height(&self) -> f64 {
        self.content_height() / GRID_ROWS as f64 * CELL_HEIGHT_FACTOR
    }

    /// Check that the margins leave some room for content.
    pub fn has_content_area(&self) -> bool {
        self.content_width() > EPS && self.content_height() > EPS
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::float_cmp::approx_eq;
    use super::*;

    #[test]
    fn test_region_fractions_cover_card() {
        let total =
            HEADER_FRACTION + NAME_FRACTION + TIME_FRACTION + SPACER_FRACTION + FOOTER_FRACTION;
        assert!(approx_eq(total, 1.0));
    }

    #[test]
    fn test_landscape_letter_geometry() {
        let page = PageGeometry::landscape_letter(0.5);
        assert!(approx_eq(page.width, 792.0));
        assert!(approx_eq(page.height, 612.0));
        assert!(approx_eq(page.margin, 36.0));
        assert!(approx_eq(page.content_width(), 720.0));
        assert!(approx_eq(page.content_height(), 540.0));
        assert!(approx_eq(page.cell_width(), 360.0));
        assert!(approx_eq(page.cell_height(), 256.5));
    }

    #[test]
    fn test_two_rows_fit_in_content_height() {
        let page = PageGeometry::landscape_letter(0.5);
        assert!(page.cell_height() * GRID_ROWS as f64 <= page.content_height());
    }

    #[test]
    fn test_oversized_margin_has_no_content_area() {
        let page = PageGeometry::landscape_letter(5.0);
        assert!(!page.has_content_area());
    }
}
