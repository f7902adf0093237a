use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Handle to a shape living on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

/// RGBA fill/stroke color (0.0 - 1.0 per channel).
///
/// Parses from the color strings simulation input files use: `#rrggbb`,
/// `#rgb`, or a handful of common names (`"red"`, `"white"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Fully opaque color from RGB u8 values (0-255).
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "yellow" => Self::YELLOW,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            "orange" => Self::ORANGE,
            "gray" | "grey" => Self::GRAY,
            _ => return None,
        };
        Some(color)
    }

    fn to_u8(channel: f32) -> u8 {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Returned when a color string is neither a known name nor a hex triplet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if let Some(color) = Self::named(&lower) {
            return Ok(color);
        }

        let err = || ParseColorError(s.to_string());
        let hex = lower.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Self::rgb8(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #rgb expands each digit: #fa0 == #ffaa00
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Self::rgb8(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            Self::to_u8(self.r),
            Self::to_u8(self.g),
            Self::to_u8(self.b)
        )
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Font descriptor for text labels, written as `Family-Size` (e.g. `Arial-16`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelFont {
    pub family: String,
    /// Point size.
    pub size: u32,
}

impl LabelFont {
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new("Arial", 16)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("font must look like `Family-Size`, got {0:?}")]
pub struct ParseFontError(pub String);

impl FromStr for LabelFont {
    type Err = ParseFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Family names may contain dashes; the size is whatever follows the last one.
        let (family, size) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| ParseFontError(s.to_string()))?;
        let size: u32 = size.parse().map_err(|_| ParseFontError(s.to_string()))?;
        if family.is_empty() || size == 0 {
            return Err(ParseFontError(s.to_string()));
        }
        Ok(Self::new(family, size))
    }
}

impl TryFrom<String> for LabelFont {
    type Error = ParseFontError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.size)
    }
}

impl From<LabelFont> for String {
    fn from(font: LabelFont) -> Self {
        font.to_string()
    }
}
