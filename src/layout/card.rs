//! Single placecard layout.

use super::{Align, CardLayout, Element, Point, Rect, Stroke, TextRun};
use crate::config::{
    FOOTER_FRACTION, FOOTER_PADDING_PT, HEADER_FRACTION, HEADER_SIZE_BUMP, MIN_FONT_SIZE,
    NAME_FRACTION, RULE_WIDTH_PT, SPACER_FRACTION, TIME_FRACTION,
};
use crate::model::{Color, Font, Placecard, StyleConfig, HEADER_TEXT};

/// Baseline offset below a region's vertical center, as a fraction of font size.
const BASELINE_DROP: f64 = 0.35;

/// The five stacked bands of a card, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRegions {
    pub header: Rect,
    pub name: Rect,
    pub time: Rect,
    pub spacer: Rect,
    pub footer: Rect,
}

impl CardRegions {
    /// Split a card frame into its bands.
    pub fn split(frame: Rect) -> Self {
        let h = frame.height;
        let (header, rest) = frame.split_top(h * HEADER_FRACTION);
        let (name, rest) = rest.split_top(h * NAME_FRACTION);
        let (time, rest) = rest.split_top(h * TIME_FRACTION);
        let (spacer, rest) = rest.split_top(h * SPACER_FRACTION);
        let (footer, _) = rest.split_top(h * FOOTER_FRACTION);
        Self {
            header,
            name,
            time,
            spacer,
            footer,
        }
    }
}

/// Lay out one placecard inside `frame`.
pub fn layout_card(card: &Placecard, style: &StyleConfig, frame: Rect) -> CardLayout {
    let regions = CardRegions::split(frame);
    let family = style.font_family;
    let color = style.text_color;

    let mut elements = vec![Element::Rect {
        rect: frame,
        fill: Some(style.background_color),
        stroke: None,
    }];

    let header_font = Font::bold(family, style.title_font_size + HEADER_SIZE_BUMP);
    elements.push(centered(HEADER_TEXT, regions.header, header_font, color));

    elements.push(Element::Line {
        from: Point::new(frame.x, regions.header.bottom()),
        to: Point::new(frame.right(), regions.header.bottom()),
        stroke: Stroke {
            color: style.border_color,
            width: RULE_WIDTH_PT,
        },
    });

    let name_font = Font::bold(family, style.title_font_size);
    elements.push(centered(&card.name, regions.name, name_font, color));

    let content_font = Font::regular(family, style.content_font_size);
    elements.push(centered(&card.time_range, regions.time, content_font, color));

    let (left, right) = regions.footer.split_halves();
    let footer_width = left.width - 2.0 * FOOTER_PADDING_PT;
    let table_label = card.table_label();
    let table_font = fit_font(&table_label, content_font, footer_width);
    elements.push(Element::Text(text_run(
        table_label,
        left.x + FOOTER_PADDING_PT,
        Align::Left,
        left,
        table_font,
        color,
    )));
    let party_label = card.party_label();
    let party_font = fit_font(&party_label, content_font, footer_width);
    elements.push(Element::Text(text_run(
        party_label,
        right.right() - FOOTER_PADDING_PT,
        Align::Right,
        right,
        party_font,
        color,
    )));

    if style.border {
        elements.push(Element::Rect {
            rect: frame,
            fill: None,
            stroke: Some(Stroke {
                color: style.border_color,
                width: RULE_WIDTH_PT,
            }),
        });
    }

    CardLayout { frame, elements }
}

fn centered(text: &str, region: Rect, font: Font, color: Color) -> Element {
    let max_width = region.width - 2.0 * FOOTER_PADDING_PT;
    Element::Text(text_run(
        text.to_string(),
        region.center_x(),
        Align::Center,
        region,
        fit_font(text, font, max_width),
        color,
    ))
}

fn text_run(text: String, x: f64, align: Align, region: Rect, font: Font, color: Color) -> TextRun {
    TextRun {
        text,
        x,
        baseline: region.center_y() + font.size * BASELINE_DROP,
        align,
        font,
        color,
    }
}

/// Shrink `font` until `text` fits in `max_width`, but not below the minimum size.
fn fit_font(text: &str, font: Font, max_width: f64) -> Font {
    let width = font.text_width(text);
    if width <= max_width || width <= 0.0 {
        return font;
    }
    let size = (font.size * max_width / width).max(MIN_FONT_SIZE);
    font.with_size(size.min(font.size))
}
