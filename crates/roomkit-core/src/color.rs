//! Color values for room surfaces.
//!
//! Colors travel as CSS-style hex strings (`#rrggbb`, with the `#rgb`
//! shorthand accepted on input) both in snapshot files and from the
//! embedding shell's color inputs.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` or `#rgb` hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseError::InvalidColor(s.to_string()))?;

        let parse = |h: &str| u8::from_str_radix(h, 16);
        match hex.len() {
            6 => {
                let r = parse(&hex[0..2]);
                let g = parse(&hex[2..4]);
                let b = parse(&hex[4..6]);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
                    _ => Err(ParseError::InvalidColor(s.to_string())),
                }
            }
            3 => {
                // #rgb expands each nibble: #f2a -> #ff22aa
                let r = parse(&hex[0..1]);
                let g = parse(&hex[1..2]);
                let b = parse(&hex[2..3]);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r * 17, g * 17, b * 17)),
                    _ => Err(ParseError::InvalidColor(s.to_string())),
                }
            }
            _ => Err(ParseError::InvalidColor(s.to_string())),
        }
    }

    /// Formats as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#f2f2f2").unwrap();
        assert_eq!(c, Color::new(0xf2, 0xf2, 0xf2));
    }

    #[test]
    fn parses_shorthand_hex() {
        let c = Color::from_hex("#f2a").unwrap();
        assert_eq!(c, Color::new(0xff, 0x22, 0xaa));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Color::from_hex("f2f2f2").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("#f2f2f").is_err());
    }

    #[test]
    fn round_trips_through_hex() {
        let c = Color::new(18, 52, 86);
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
    }
}
