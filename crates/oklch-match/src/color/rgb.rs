//! 8-bit sRGB color parsed from hex strings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;

/// A gamma-encoded sRGB color with 8-bit channels.
///
/// This is the form colors arrive in from the color picker and the form
/// the palette catalog stores them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form, zero padded.
    ///
    /// ```
    /// use oklch_match::color::Rgb;
    /// assert_eq!(Rgb::new(10, 0, 255).to_hex(), "#0a00ff");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }

    /// Euclidean distance between two colors in 8-bit RGB space.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    ///
    /// No whitespace trimming and no 3-digit shorthand: the picker always
    /// produces the full form, and anything else is treated as garbage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(4))
        );
        assert!(matches!(
            "#GG0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        // Multi-byte characters fail on length or on hex decoding, never panic
        assert!("#ééé".parse::<Rgb>().is_err());
        assert!("ffffé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_parse_case_insensitive() {
        let upper: Rgb = "#ABCDEF".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        let mixed: Rgb = "AbCdEf".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_string(), "#ffffff");
    }

    #[test]
    fn test_distance() {
        let black = Rgb::new(0, 0, 0);
        let red = Rgb::new(255, 0, 0);
        assert_eq!(black.distance(black), 0.0);
        assert_eq!(black.distance(red), 255.0);
        assert_eq!(black.distance(red), red.distance(black));
    }
}
