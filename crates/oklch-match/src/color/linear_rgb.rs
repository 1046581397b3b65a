//! Linear-light RGB
//!
//! The gamma curve is decoded with the exact IEC 61966-2-1 formula rather
//! than a lookup table: inputs are always 8-bit, and the matcher compares
//! against reference OKLCH values to full `f64` precision.

use super::rgb::Rgb;

/// sRGB encoded values at or below this use the linear segment.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// A color in linear RGB, physically proportional to light intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Decode one gamma-encoded sRGB channel (0.0..=1.0) to linear light.
#[inline]
pub(crate) fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded <= SRGB_LINEAR_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(f64::from(rgb.r) / 255.0),
            g: srgb_to_linear(f64::from(rgb.g) / 255.0),
            b: srgb_to_linear(f64::from(rgb.b) / 255.0),
        }
    }
}
