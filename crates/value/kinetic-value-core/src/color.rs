//! 8-bit ARGB colors as written by animation authors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coercion::ParseValueError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors accepted by [`Color::from_str`], lowercase.
const NAMED: &[(&str, Color)] = &[
    ("transparent", Color::from_argb(0x00, 0xFF, 0xFF, 0xFF)),
    ("black", Color::from_argb(0xFF, 0x00, 0x00, 0x00)),
    ("white", Color::from_argb(0xFF, 0xFF, 0xFF, 0xFF)),
    ("red", Color::from_argb(0xFF, 0xFF, 0x00, 0x00)),
    ("green", Color::from_argb(0xFF, 0x00, 0x80, 0x00)),
    ("lime", Color::from_argb(0xFF, 0x00, 0xFF, 0x00)),
    ("blue", Color::from_argb(0xFF, 0x00, 0x00, 0xFF)),
    ("yellow", Color::from_argb(0xFF, 0xFF, 0xFF, 0x00)),
    ("orange", Color::from_argb(0xFF, 0xFF, 0xA5, 0x00)),
    ("purple", Color::from_argb(0xFF, 0x80, 0x00, 0x80)),
    ("gray", Color::from_argb(0xFF, 0x80, 0x80, 0x80)),
    ("cornflowerblue", Color::from_argb(0xFF, 0x64, 0x95, 0xED)),
];

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    fn from_hex(text: &str, digits: &str) -> Result<Self, ParseValueError> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseValueError::InvalidColor(text.to_string()));
        }
        // Expand shorthand forms (#RGB, #ARGB) by doubling each digit.
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(ParseValueError::InvalidColor(text.to_string())),
        };
        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ParseValueError::InvalidColor(text.to_string()))?;
        let [a, r, g, b] = if expanded.len() == 6 {
            (0xFF00_0000 | value).to_be_bytes()
        } else {
            value.to_be_bytes()
        };
        Ok(Self::from_argb(a, r, g, b))
    }
}

impl FromStr for Color {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            return Self::from_hex(s, digits);
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| *color)
            .ok_or_else(|| ParseValueError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::from_rgb(255, 0, 0));
        assert_eq!(
            "#80112233".parse::<Color>().unwrap(),
            Color::from_argb(0x80, 0x11, 0x22, 0x33)
        );
        assert_eq!("#f0a".parse::<Color>().unwrap(), Color::from_rgb(0xFF, 0x00, 0xAA));
        assert_eq!(
            "#8f0a".parse::<Color>().unwrap(),
            Color::from_argb(0x88, 0xFF, 0x00, 0xAA)
        );
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::from_rgb(255, 0, 0));
        assert_eq!("  TRANSPARENT ".parse::<Color>().unwrap().a, 0);
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["#12345", "#GGGGGG", "", "#", "notacolor", "#FF00FF00FF"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(ParseValueError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_is_argb_hex() {
        let c = Color::from_argb(0x80, 0x11, 0x22, 0x33);
        assert_eq!(c.to_string(), "#80112233");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}
