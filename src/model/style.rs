//! Visual style for placecards and how it is loaded.

use crate::error::{PlacecardError, Result};
use crate::model::FontFamily;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// An RGB color. Parsed from a known name or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors accepted in style files and on the command line.
const NAMED_COLORS: [(&str, Color); 9] = [
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("lightgray", Color::rgb(0xD3, 0xD3, 0xD3)),
    ("lightblue", Color::rgb(0xAD, 0xD8, 0xE6)),
    ("lightyellow", Color::rgb(0xFF, 0xFF, 0xE0)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
];

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color name (case-insensitive, "grey" spelling allowed) or `#rrggbb`.
    pub fn from_name(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase().replace("grey", "gray");
        if let Some(hex) = name.strip_prefix('#') {
            return Self::from_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channel values scaled to 0.0..=1.0 for PDF color operators.
    pub fn components(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match NAMED_COLORS.iter().find(|(_, c)| c == self) {
            Some((name, _)) => write!(f, "{}", name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = PlacecardError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_name(&value).ok_or_else(|| PlacecardError::InvalidStyle {
            field: "color".to_string(),
            expected: "a color name or #rrggbb".to_string(),
            value,
        })
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Display options for placecards. Sizes in points, lengths in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_family: FontFamily,
    pub title_font_size: f64,
    pub content_font_size: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub margin: f64,
    pub background_color: Color,
    pub text_color: Color,
    pub border: bool,
    pub border_color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Helvetica,
            title_font_size: 14.0,
            content_font_size: 12.0,
            card_width: 3.5,
            card_height: 2.5,
            margin: 0.5,
            background_color: Color::WHITE,
            text_color: Color::BLACK,
            border: true,
            border_color: Color::GRAY,
        }
    }
}

impl StyleConfig {
    /// Parse a style from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where the active style came from.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSource {
    /// Read from this file.
    File(PathBuf),
    /// Built-in defaults, with the reason the file was not used.
    Defaults { reason: String },
}

/// A loaded style and its origin.
#[derive(Debug, Clone)]
pub struct StyleLoad {
    pub config: StyleConfig,
    pub source: StyleSource,
}

impl StyleLoad {
    pub fn used_defaults(&self) -> bool {
        matches!(self.source, StyleSource::Defaults { .. })
    }
}

/// Load the style file, falling back to defaults when it is absent or unreadable.
pub fn load_style_config(path: &Path) -> StyleLoad {
    let outcome = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                format!("Style file '{}' not found", path.display())
            } else {
                format!("Cannot read style file '{}': {}", path.display(), e)
            }
        })
        .and_then(|json| {
            StyleConfig::from_json(&json)
                .map_err(|e| format!("Invalid style file '{}': {}", path.display(), e))
        });

    match outcome {
        Ok(config) => {
            debug!("Loaded style from {}", path.display());
            StyleLoad {
                config,
                source: StyleSource::File(path.to_path_buf()),
            }
        }
        Err(reason) => {
            warn!("{}. Using default settings.", reason);
            StyleLoad {
                config: StyleConfig::default(),
                source: StyleSource::Defaults { reason },
            }
        }
    }
}

/// Per-field edits applied on top of a loaded style.
#[derive(Debug, Clone, Default)]
pub struct StyleOverrides {
    pub font_family: Option<String>,
    pub title_font_size: Option<f64>,
    pub content_font_size: Option<f64>,
    pub border: Option<bool>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl StyleOverrides {
    /// Apply every set field to `style`.
    pub fn apply(&self, style: &mut StyleConfig) -> Result<()> {
        if let Some(name) = &self.font_family {
            style.font_family =
                FontFamily::from_name(name).ok_or_else(|| PlacecardError::InvalidStyle {
                    field: "font_family".to_string(),
                    expected: "Helvetica, Times-Roman or Courier".to_string(),
                    value: name.clone(),
                })?;
        }
        if let Some(size) = self.title_font_size {
            style.title_font_size = size;
        }
        if let Some(size) = self.content_font_size {
            style.content_font_size = size;
        }
        if let Some(border) = self.border {
            style.border = border;
        }
        if let Some(color) = &self.border_color {
            style.border_color = parse_color_field("border_color", color)?;
        }
        if let Some(color) = &self.background_color {
            style.background_color = parse_color_field("background_color", color)?;
        }
        if let Some(color) = &self.text_color {
            style.text_color = parse_color_field("text_color", color)?;
        }
        Ok(())
    }
}

fn parse_color_field(field: &str, value: &str) -> Result<Color> {
    Color::from_name(value).ok_or_else(|| PlacecardError::InvalidStyle {
        field: field.to_string(),
        expected: "a color name or #rrggbb".to_string(),
        value: value.to_string(),
    })
}
