//! Document rendering.
//!
//! Layouts are drawn through the [`Canvas`] trait so the PDF backend can be
//! swapped for an in-memory recorder in tests.

mod pdf;
mod recorder;

pub use pdf::PdfCanvas;
pub use recorder::{CommandRecorder, DrawCommand};

use crate::error::Result;
use crate::layout::{Element, PageLayout, Point, Rect, Stroke, TextRun};
use crate::model::Color;

/// Drawing surface for laid-out pages.
pub trait Canvas {
    /// What `finish` hands back (PDF bytes, recorded commands, ...).
    type Output;

    /// Draw a rectangle, filled, outlined, or both.
    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) -> Result<()>;

    /// Draw a straight line.
    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()>;

    /// Draw one line of left, centered or right aligned text.
    fn draw_text(&mut self, run: &TextRun) -> Result<()>;

    /// Close the current page and start a new one.
    fn page_break(&mut self) -> Result<()>;

    /// Close the last page and produce the document.
    fn finish(self) -> Result<Self::Output>;

    /// Draw a layout element.
    fn draw(&mut self, element: &Element) -> Result<()> {
        match element {
            Element::Rect { rect, fill, stroke } => self.draw_rect(*rect, *fill, *stroke),
            Element::Line { from, to, stroke } => self.draw_line(*from, *to, *stroke),
            Element::Text(run) => self.draw_text(run),
        }
    }
}

/// Draw every page onto `canvas`, with a page break between pages.
pub fn render_pages<C: Canvas>(pages: &[PageLayout], mut canvas: C) -> Result<C::Output> {
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            canvas.page_break()?;
        }
        for card in page.cards() {
            for element in &card.elements {
                canvas.draw(element)?;
            }
        }
    }
    canvas.finish()
}
