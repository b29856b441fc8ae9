//! Placecard layout: positioned drawing elements for cards and pages.
//!
//! Coordinates are PDF points with the origin at the top-left corner of the
//! page and y growing downward.

mod card;
mod page;

pub use card::{layout_card, CardRegions};
pub use page::{cell_frame, paginate, sample_page};

use crate::model::{Color, Font};
use serde::Serialize;

/// A point on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle; `(x, y)` is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Split into a top part of `height` and the remainder below it.
    pub fn split_top(&self, height: f64) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, self.width, height),
            Rect::new(self.x, self.y + height, self.width, self.height - height),
        )
    }

    /// Split into equal left and right halves.
    pub fn split_halves(&self) -> (Rect, Rect) {
        let half = self.width / 2.0;
        (
            Rect::new(self.x, self.y, half, self.height),
            Rect::new(self.x + half, self.y, half, self.height),
        )
    }
}

/// Horizontal text alignment relative to the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Outline color and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// A single line of text anchored at `(x, baseline)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub baseline: f64,
    pub align: Align,
    pub font: Font,
    pub color: Color,
}

impl TextRun {
    /// Left edge of the text once alignment is applied.
    pub fn left(&self) -> f64 {
        let width = self.font.text_width(&self.text);
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - width / 2.0,
            Align::Right => self.x - width,
        }
    }
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text(TextRun),
}

/// A laid-out placecard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLayout {
    /// Outer bounds of the card.
    pub frame: Rect,
    /// Primitives in paint order.
    pub elements: Vec<Element>,
}

impl CardLayout {
    /// All text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Find the text run with this exact content.
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().find(|run| run.text == text)
    }
}

/// One output page. Grid pages always have four cells; `None` cells are blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub cells: Vec<Option<CardLayout>>,
}

impl PageLayout {
    /// Number of cells holding a card.
    pub fn card_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Cards on this page, in grid order.
    pub fn cards(&self) -> impl Iterator<Item = &CardLayout> {
        self.cells.iter().flatten()
    }
}
