//! CIE XYZ tristimulus values (D65 white point)

use super::linear_rgb::LinearRgb;

/// A color in CIE 1931 XYZ, relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB to XYZ using the standard sRGB/D65 primaries matrix.
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b,
            y: 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b,
            z: 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b,
        }
    }
}
