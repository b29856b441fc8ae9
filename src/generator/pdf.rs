//! PDF canvas backed by lopdf.
//!
//! Text uses the standard Type 1 fonts with WinAnsi encoding, so nothing is
//! embedded. Characters outside Latin-1 print as `?`.

use super::Canvas;
use crate::config::PageGeometry;
use crate::error::Result;
use crate::layout::{Point, Rect, Stroke, TextRun};
use crate::model::{Color, Font, FontFamily};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use tracing::debug;

/// PDF canvas. Pages share one resource dictionary holding all six faces.
pub struct PdfCanvas {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    operations: Vec<Operation>,
    width: f64,
    height: f64,
    title: String,
}

impl PdfCanvas {
    /// Start a document whose first page is already open.
    pub fn new(page: &PageGeometry, title: &str) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            operations: Vec::new(),
            width: page.width,
            height: page.height,
            title: title.to_string(),
        }
    }

    /// Flip a top-down y coordinate into PDF space.
    fn pdf_y(&self, y: f64) -> f64 {
        self.height - y
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill(&mut self, color: Color) {
        self.push("rg", color_operands(color));
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.push("RG", color_operands(stroke.color));
        self.push("w", vec![real(stroke.width)]);
    }

    /// Write the open page's content stream and register the page.
    fn close_page(&mut self) -> Result<()> {
        let content = Content {
            operations: std::mem::take(&mut self.operations),
        };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn font_resources(&mut self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for family in FontFamily::ALL {
            for bold in [false, true] {
                let font = Font {
                    family,
                    bold,
                    size: 0.0,
                };
                let font_id = self.doc.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.base_name(),
                    "Encoding" => "WinAnsiEncoding",
                });
                fonts.set(resource_name(&font), font_id);
            }
        }
        fonts
    }
}

impl Canvas for PdfCanvas {
    type Output = Vec<u8>;

    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) -> Result<()> {
        let paint = match (fill, stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return Ok(()),
        };

        self.push("q", vec![]);
        if let Some(color) = fill {
            self.set_fill(color);
        }
        if let Some(stroke) = stroke {
            self.set_stroke(stroke);
        }
        let bottom = self.pdf_y(rect.bottom());
        self.push(
            "re",
            vec![real(rect.x), real(bottom), real(rect.width), real(rect.height)],
        );
        self.push(paint, vec![]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
        let (y1, y2) = (self.pdf_y(from.y), self.pdf_y(to.y));
        self.push("q", vec![]);
        self.set_stroke(stroke);
        self.push("m", vec![real(from.x), real(y1)]);
        self.push("l", vec![real(to.x), real(y2)]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        let x = run.left();
        let y = self.pdf_y(run.baseline);
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(resource_name(&run.font).into()), real(run.font.size)],
        );
        self.set_fill(run.color);
        self.push("Td", vec![real(x), real(y)]);
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(&run.text))]);
        self.push("ET", vec![]);
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.close_page()
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.close_page()?;

        let fonts = self.font_resources();
        let resources_id = self.doc.add_object(dictionary! { "Font" => fonts });

        let kids: Vec<Object> = self.page_ids.iter().map(|id| (*id).into()).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), real(self.width), real(self.height)],
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.doc.add_object(dictionary! {
            "Title" => Object::string_literal(encode_win_ansi(&self.title)),
            "Producer" => Object::string_literal(concat!("placecards ", env!("CARGO_PKG_VERSION"))),
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);
        self.doc.compress();

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        debug!(
            "Serialized {} page(s), {} bytes",
            self.page_ids.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn color_operands(color: Color) -> Vec<Object> {
    color
        .components()
        .iter()
        .map(|c| Object::Real(*c))
        .collect()
}

/// Resource name of a face: F1..F6.
fn resource_name(font: &Font) -> &'static str {
    match (font.family, font.bold) {
        (FontFamily::Helvetica, false) => "F1",
        (FontFamily::Helvetica, true) => "F2",
        (FontFamily::TimesRoman, false) => "F3",
        (FontFamily::TimesRoman, true) => "F4",
        (FontFamily::Courier, false) => "F5",
        (FontFamily::Courier, true) => "F6",
    }
}

/// Map text to single WinAnsi bytes; unsupported characters become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Align;
    use pretty_assertions::assert_eq;

    fn geometry() -> PageGeometry {
        PageGeometry::landscape_letter(0.5)
    }

    fn run(text: &str) -> TextRun {
        TextRun {
            text: text.to_string(),
            x: 100.0,
            baseline: 100.0,
            align: Align::Center,
            font: Font::bold(FontFamily::Helvetica, 12.0),
            color: Color::BLACK,
        }
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Zoë Ñ"), vec![b'Z', b'o', 0xEB, b' ', 0xD1]);
        assert_eq!(encode_win_ansi("李"), vec![b'?']);
        assert_eq!(encode_win_ansi("a\tb"), vec![b'a', b'?', b'b']);
    }

    #[test]
    fn test_resource_names_unique() {
        let mut names: Vec<&str> = FontFamily::ALL
            .iter()
            .flat_map(|f| [Font::regular(*f, 1.0), Font::bold(*f, 1.0)])
            .map(|font| resource_name(&font))
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_pages_and_text_round_trip() {
        let mut canvas = PdfCanvas::new(&geometry(), "Test");
        canvas.draw_text(&run("First")).unwrap();
        canvas.page_break().unwrap();
        canvas.draw_text(&run("Second")).unwrap();
        canvas
            .draw_rect(
                Rect::new(10.0, 10.0, 50.0, 20.0),
                Some(Color::WHITE),
                Some(Stroke {
                    color: Color::GRAY,
                    width: 1.0,
                }),
            )
            .unwrap();
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).expect("Should reload");
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);

        let second = pages.get(&2).copied().unwrap();
        let content = Content::decode(&doc.get_page_content(second).unwrap()).unwrap();
        let shown: Vec<Vec<u8>> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match &op.operands[0] {
                Object::String(bytes, _) => Some(bytes.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec![b"Second".to_vec()]);
        assert!(content.operations.iter().any(|op| op.operator == "re"));
        assert!(content.operations.iter().any(|op| op.operator == "B"));
    }

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut canvas = PdfCanvas::new(&geometry(), "Test");
        canvas
            .draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), None, None)
            .unwrap();
        assert!(canvas.operations.is_empty());
    }

    #[test]
    fn test_y_axis_flipped() {
        let mut canvas = PdfCanvas::new(&geometry(), "Test");
        canvas
            .draw_rect(Rect::new(36.0, 36.0, 100.0, 50.0), Some(Color::BLACK), None)
            .unwrap();
        let re = canvas
            .operations
            .iter()
            .find(|op| op.operator == "re")
            .unwrap();
        // Bottom edge of a rect 36pt from the top of a 612pt page.
        match &re.operands[1] {
            Object::Real(y) => assert!((*y - 526.0).abs() < 0.01),
            other => panic!("Expected real operand, got {:?}", other),
        }
    }
}
