//! Standard PDF fonts and their glyph widths.
//!
//! Widths are the Adobe Core 14 AFM advance widths (1/1000 em) for the
//! printable ASCII range 0x20..=0x7E. Characters outside that range use the
//! family's fallback width.

use serde::{Deserialize, Serialize};

/// Font families offered for placecards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "Helvetica")]
    Helvetica,
    #[serde(rename = "Times-Roman")]
    TimesRoman,
    #[serde(rename = "Courier")]
    Courier,
}

impl FontFamily {
    /// All families, in the order they are offered.
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Helvetica,
        FontFamily::TimesRoman,
        FontFamily::Courier,
    ];

    /// Parse a family from its PDF name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "helvetica" => Some(FontFamily::Helvetica),
            "times-roman" | "times" => Some(FontFamily::TimesRoman),
            "courier" => Some(FontFamily::Courier),
            _ => None,
        }
    }

    /// Base font name of the regular face.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesRoman => "Times-Roman",
            FontFamily::Courier => "Courier",
        }
    }

    /// Base font name of the bold face.
    pub fn bold_name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica-Bold",
            FontFamily::TimesRoman => "Times-Bold",
            FontFamily::Courier => "Courier-Bold",
        }
    }

    fn widths(&self, bold: bool) -> &'static [u16; 95] {
        match (self, bold) {
            (FontFamily::Helvetica, false) => &HELVETICA,
            (FontFamily::Helvetica, true) => &HELVETICA_BOLD,
            (FontFamily::TimesRoman, false) => &TIMES_ROMAN,
            (FontFamily::TimesRoman, true) => &TIMES_BOLD,
            (FontFamily::Courier, _) => &COURIER,
        }
    }

    fn fallback_width(&self) -> u16 {
        match self {
            FontFamily::Helvetica => 556,
            FontFamily::TimesRoman => 500,
            FontFamily::Courier => 600,
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A concrete face and size used for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub family: FontFamily,
    pub bold: bool,
    pub size: f64,
}

impl Font {
    pub fn regular(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            bold: false,
            size,
        }
    }

    pub fn bold(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            bold: true,
            size,
        }
    }

    /// PDF base font name for this face.
    pub fn base_name(&self) -> &'static str {
        if self.bold {
            self.family.bold_name()
        } else {
            self.family.name()
        }
    }

    /// Same face at a different size.
    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    /// Rendered width of `text` in points.
    pub fn text_width(&self, text: &str) -> f64 {
        let table = self.family.widths(self.bold);
        let fallback = self.family.fallback_width();
        let units: u32 = text
            .chars()
            .map(|c| match c as u32 {
                code @ 0x20..=0x7E => table[(code - 0x20) as usize] as u32,
                _ => fallback as u32,
            })
            .sum();
        units as f64 * self.size / 1000.0
    }
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const COURIER: [u16; 95] = [600; 95];
