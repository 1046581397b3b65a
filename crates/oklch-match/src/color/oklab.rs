//! Oklab perceptual color space
//!
//! Oklab is a perceptual color space where Euclidean distance tracks
//! perceived difference. It is reached here through CIE XYZ, using the
//! XYZ → LMS matrix from the original Oklab derivation.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::rgb::Rgb;
use super::xyz::Xyz;
use super::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl From<Xyz> for Oklab {
    fn from(xyz: Xyz) -> Self {
        // Step 1: XYZ to LMS cone response (M1)
        let l = 0.8189330101 * xyz.x + 0.3618667424 * xyz.y - 0.1288597137 * xyz.z;
        let m = 0.0329845436 * xyz.x + 0.9293118715 * xyz.y + 0.0361456387 * xyz.z;
        let s = 0.0482003018 * xyz.x + 0.2643662691 * xyz.y + 0.6338517070 * xyz.z;

        // Step 2: Cube root (nonlinearity)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // Step 3: LMS' to Lab (M2)
        Self {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<LinearRgb> for Oklab {
    #[inline]
    fn from(rgb: LinearRgb) -> Self {
        Self::from(Xyz::from(rgb))
    }
}

impl From<Rgb> for Oklab {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::from(LinearRgb::from(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Going through XYZ with the 2020 M1 matrix differs from the direct
    /// linear-sRGB matrix in the fourth decimal at worst.
    const REFERENCE_TOLERANCE: f64 = 1e-3;

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, Oklab as PaletteOklab, Srgb};

        let test_colors = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (79, 70, 229),
            (62, 99, 221),
            (255, 197, 61),
            (255, 255, 255),
            (0, 0, 0),
        ];

        for (r, g, b) in test_colors {
            let ours = Oklab::from(Rgb::new(r, g, b));
            let reference: PaletteOklab<f64> =
                Srgb::new(r, g, b).into_format::<f64>().into_linear().into_color();

            assert!(
                (ours.l - reference.l).abs() < REFERENCE_TOLERANCE,
                "L mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.l,
                reference.l
            );
            assert!(
                (ours.a - reference.a).abs() < REFERENCE_TOLERANCE,
                "a mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.a,
                reference.a
            );
            assert!(
                (ours.b - reference.b).abs() < REFERENCE_TOLERANCE,
                "b mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.b,
                reference.b
            );
        }
    }

    #[test]
    fn test_grays_are_neutral() {
        for v in [0u8, 1, 17, 64, 128, 200, 254, 255] {
            let gray = Oklab::from(Rgb::new(v, v, v));
            assert!(gray.chroma() < 1e-3, "gray {} has chroma {}", v, gray.chroma());
        }
    }

    #[test]
    fn test_lightness_ordering() {
        let dark = Oklab::from(Rgb::new(30, 30, 30));
        let mid = Oklab::from(Rgb::new(128, 128, 128));
        let light = Oklab::from(Rgb::new(230, 230, 230));
        assert!(dark.l < mid.l && mid.l < light.l);
    }

    #[test]
    fn test_hue_axes() {
        // Red leans to +a, blue to -b
        let red = Oklab::from(Rgb::new(255, 0, 0));
        assert!(red.a > 0.2);
        let blue = Oklab::from(Rgb::new(0, 0, 255));
        assert!(blue.b < -0.2);
    }
}
