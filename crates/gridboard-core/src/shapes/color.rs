//! Hex RGB colors used for shape fill and outline.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in color: {0}")]
    InvalidDigit(String),
}

/// Opaque RGB color, serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parse `#rrggbb` or `#rgb`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };
        match digits.len() {
            3 => Ok(Self::new(
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scale every channel by `1 - amount`, rounding down.
    ///
    /// `amount` is clamped to `[0, 1]`; `darken(0.2)` derives an outline
    /// color from a fill color.
    pub fn darken(self, amount: f64) -> Self {
        let factor = 1.0 - amount.clamp(0.0, 1.0);
        let scale = |c: u8| (f64::from(c) * factor).floor() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ShapeColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for ShapeColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<ShapeColor> for String {
    fn from(color: ShapeColor) -> Self {
        color.to_hex()
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let color = ShapeColor::from_hex("#e0e0e0").unwrap();
        assert_eq!(color, ShapeColor::new(224, 224, 224));
    }

    #[test]
    fn test_parse_short_hex_and_no_prefix() {
        assert_eq!(ShapeColor::from_hex("#f0a").unwrap(), ShapeColor::new(255, 0, 170));
        assert_eq!(ShapeColor::from_hex("00ff00").unwrap(), ShapeColor::new(0, 255, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ShapeColor::from_hex("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert!(matches!(
            ShapeColor::from_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(ShapeColor::new(255, 0, 16).to_hex(), "#ff0010");
    }

    #[test]
    fn test_darken_floors_channels() {
        // 255 * 0.8 = 204, 0 stays 0, 1 * 0.8 = 0.8 -> 0
        let dark = ShapeColor::new(255, 0, 1).darken(0.2);
        assert_eq!(dark, ShapeColor::new(204, 0, 0));
        assert_eq!(ShapeColor::from_hex("#ffff00").unwrap().darken(0.2).to_hex(), "#cccc00");
    }

    #[test]
    fn test_darken_clamps_amount() {
        let color = ShapeColor::new(100, 150, 200);
        assert_eq!(color.darken(2.0), ShapeColor::black());
        assert_eq!(color.darken(-1.0), color);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&ShapeColor::new(158, 158, 158)).unwrap();
        assert_eq!(json, "\"#9e9e9e\"");
        let back: ShapeColor = serde_json::from_str("\"#9e9e9e\"").unwrap();
        assert_eq!(back, ShapeColor::new(158, 158, 158));
        assert!(serde_json::from_str::<ShapeColor>("\"nope\"").is_err());
    }

    #[test]
    fn test_peniko_conversion() {
        let color = ShapeColor::new(10, 20, 30);
        let peniko: Color = color.into();
        assert_eq!(ShapeColor::from(peniko), color);
    }
}
