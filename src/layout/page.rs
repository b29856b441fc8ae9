//! Grouping cards onto pages.

use super::{layout_card, PageLayout, Rect};
use crate::config::{inches_to_points, PageGeometry, CARDS_PER_PAGE, GRID_COLUMNS};
use crate::model::{Booking, Placecard, StyleConfig};
use tracing::debug;

/// Frame of grid cell `slot` (0..4, row-major from the top-left).
pub fn cell_frame(page: &PageGeometry, slot: usize) -> Rect {
    let row = slot / GRID_COLUMNS;
    let col = slot % GRID_COLUMNS;
    let width = page.cell_width();
    let height = page.cell_height();
    Rect::new(
        page.margin + col as f64 * width,
        page.margin + row as f64 * height,
        width,
        height,
    )
}

/// Lay out bookings four to a page in input order.
///
/// Cells past the end of the last chunk are left blank.
pub fn paginate(bookings: &[Booking], style: &StyleConfig, page: &PageGeometry) -> Vec<PageLayout> {
    let pages: Vec<PageLayout> = bookings
        .chunks(CARDS_PER_PAGE)
        .map(|chunk| PageLayout {
            cells: (0..CARDS_PER_PAGE)
                .map(|slot| {
                    chunk.get(slot).map(|booking| {
                        let card = Placecard::from_booking(booking);
                        layout_card(&card, style, cell_frame(page, slot))
                    })
                })
                .collect(),
        })
        .collect();

    debug!(
        "Laid out {} card(s) on {} page(s)",
        bookings.len(),
        pages.len()
    );

    pages
}

/// A single preview card at the configured card size, centered on the page.
pub fn sample_page(style: &StyleConfig, page: &PageGeometry) -> PageLayout {
    let width = inches_to_points(style.card_width);
    let height = inches_to_points(style.card_height);
    let frame = Rect::new(
        (page.width - width) / 2.0,
        (page.height - height) / 2.0,
        width,
        height,
    );
    let card = Placecard::from_booking(&Booking::sample());
    PageLayout {
        cells: vec![Some(layout_card(&card, style, frame))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::config::EPS;
    use pretty_assertions::assert_eq;

    fn bookings(n: usize) -> Vec<Booking> {
        (0..n)
            .map(|i| Booking::new("Dinner", "7PM", "2", &format!("guest {}", i), &i.to_string()))
            .collect()
    }

    fn page() -> PageGeometry {
        PageGeometry::landscape_letter(0.5)
    }

    fn names(layout: &PageLayout) -> Vec<Option<String>> {
        layout
            .cells
            .iter()
            .map(|cell| cell.as_ref().map(|c| c.texts().nth(1).unwrap().text.clone()))
            .collect()
    }

    // ==================== Grid tests ====================

    #[test]
    fn test_cell_frames_row_major() {
        let p = page();
        let frames: Vec<Rect> = (0..4).map(|s| cell_frame(&p, s)).collect();
        assert!(approx_eq(frames[0].x, 36.0) && approx_eq(frames[0].y, 36.0));
        assert!(approx_eq(frames[1].x, 396.0) && approx_eq(frames[1].y, 36.0));
        assert!(approx_eq(frames[2].x, 36.0) && approx_eq(frames[2].y, 292.5));
        assert!(approx_eq(frames[3].x, 396.0) && approx_eq(frames[3].y, 292.5));
    }

    #[test]
    fn test_cells_fit_inside_margins() {
        let p = page();
        for slot in 0..4 {
            let cell = cell_frame(&p, slot);
            assert!(cell.x >= p.margin - EPS && cell.y >= p.margin - EPS, "slot {}", slot);
            assert!(cell.right() <= p.width - p.margin + EPS, "slot {}", slot);
            assert!(cell.bottom() <= p.height - p.margin + EPS, "slot {}", slot);
        }
    }

    #[test]
    fn test_cells_touch_horizontally() {
        let p = page();
        assert!(approx_eq(cell_frame(&p, 0).right(), cell_frame(&p, 1).x));
        assert!(approx_eq(cell_frame(&p, 0).bottom(), cell_frame(&p, 2).y));
    }

    // ==================== Pagination tests ====================

    #[test]
    fn test_page_counts() {
        let style = StyleConfig::default();
        for (n, expected) in [(1, 1), (3, 1), (4, 1), (5, 2), (8, 2), (9, 3), (17, 5)] {
            let pages = paginate(&bookings(n), &style, &page());
            assert_eq!(pages.len(), expected, "{} bookings", n);
            assert_eq!(pages.len(), n.div_ceil(4));
            for p in &pages[..pages.len() - 1] {
                assert_eq!(p.card_count(), 4);
            }
            let last = if n % 4 == 0 { 4 } else { n % 4 };
            assert_eq!(pages.last().unwrap().card_count(), last);
            assert!(pages.iter().all(|p| p.cells.len() == 4));
        }
    }

    #[test]
    fn test_no_bookings_no_pages() {
        assert!(paginate(&[], &StyleConfig::default(), &page()).is_empty());
    }

    #[test]
    fn test_order_and_blank_cells() {
        let pages = paginate(&bookings(6), &StyleConfig::default(), &page());
        assert_eq!(
            names(&pages[0]),
            vec![
                Some("Guest 0".to_string()),
                Some("Guest 1".to_string()),
                Some("Guest 2".to_string()),
                Some("Guest 3".to_string()),
            ]
        );
        assert_eq!(
            names(&pages[1]),
            vec![
                Some("Guest 4".to_string()),
                Some("Guest 5".to_string()),
                None,
                None
            ]
        );
    }

    #[test]
    fn test_single_card_top_left() {
        let p = page();
        let pages = paginate(&bookings(1), &StyleConfig::default(), &p);
        let cell = pages[0].cells[0].as_ref().unwrap();
        assert_eq!(cell.frame, cell_frame(&p, 0));
        assert!(pages[0].cells[1..].iter().all(|c| c.is_none()));
    }

    // ==================== Sample tests ====================

    #[test]
    fn test_sample_page() {
        let p = page();
        let sample = sample_page(&StyleConfig::default(), &p);
        assert_eq!(sample.card_count(), 1);
        let card = sample.cards().next().unwrap();
        assert!(approx_eq(card.frame.width, 252.0));
        assert!(approx_eq(card.frame.height, 180.0));
        assert!(approx_eq(card.frame.center_x(), p.width / 2.0));
        assert!(approx_eq(card.frame.center_y(), p.height / 2.0));
        assert!(card.find_text("John Smith").is_some());
        assert!(card.find_text("7:30 PM - 9:30 PM").is_some());
        assert!(card.find_text("T5").is_some());
        assert!(card.find_text("4P").is_some());
    }
}
