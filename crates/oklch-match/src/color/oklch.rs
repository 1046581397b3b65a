//! OKLCH: the polar form of Oklab
//!
//! Hue is kept in degrees in `[0, 360)`, matching CSS `oklch()` and the
//! way palettes are described by designers.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseOklchError;
use super::oklab::Oklab;
use super::rgb::Rgb;

/// A color in OKLCH (Lightness, Chroma, Hue).
///
/// # Components
///
/// - `l`: Lightness, 0.0..=1.0 for in-gamut sources (not clamped)
/// - `c`: Chroma, `>= 0.0`
/// - `h`: Hue angle in degrees, `0.0..360.0`
///
/// For achromatic colors the hue is whatever `atan2` yields for the tiny
/// residual `a`/`b`; with chroma at zero it carries no weight in any
/// chroma-projected distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: distance from the neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees
    pub h: f64,
}

impl Oklch {
    /// Create a new OKLCH color. The hue is normalized into `[0, 360)`.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Hue in radians.
    #[inline]
    pub fn hue_radians(self) -> f64 {
        self.h * PI / 180.0
    }

    /// Cartesian projection of chroma along the hue angle: `(sin(h)·c, cos(h)·c)`.
    #[inline]
    pub fn chroma_projection(self) -> (f64, f64) {
        let h = self.hue_radians();
        (h.sin() * self.c, h.cos() * self.c)
    }
}

/// Wrap a hue angle in degrees into `[0, 360)`.
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar; `atan2` output is shifted from `(-180, 180]` into `[0, 360)`.
    fn from(lab: Oklab) -> Self {
        let h = lab.b.atan2(lab.a) * 180.0 / PI;
        Self {
            l: lab.l,
            c: lab.chroma(),
            h: if h < 0.0 { h + 360.0 } else { h },
        }
    }
}

impl From<Rgb> for Oklch {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::from(Oklab::from(rgb))
    }
}

impl fmt::Display for Oklch {
    /// CSS form with three decimals: `oklch(0.511 0.230 276.966)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.3} {:.3} {:.3})", self.l, self.c, self.h)
    }
}

impl FromStr for Oklch {
    type Err = ParseOklchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseOklchError::MissingFunction)?;

        let parts: Vec<&str> = inner.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ParseOklchError::ComponentCount(parts.len()));
        }

        let mut values = [0.0f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            // Only plain non-negative decimals, the way catalogs write them
            if part.is_empty() || !part.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
                return Err(ParseOklchError::InvalidComponent((*part).to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| ParseOklchError::InvalidComponent((*part).to_string()))?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oklch_matches_palette_crate() {
        use palette::{IntoColor, Oklch as PaletteOklch, Srgb};

        // Chromatic colors only: the hue of a gray is not meaningful
        let test_colors = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (79, 70, 229),
            (229, 72, 77),
            (48, 164, 108),
            (255, 197, 61),
        ];

        for (r, g, b) in test_colors {
            let ours = Oklch::from(Rgb::new(r, g, b));
            let reference: PaletteOklch<f64> =
                Srgb::new(r, g, b).into_format::<f64>().into_linear().into_color();
            let reference_hue = reference.hue.into_positive_degrees();

            assert!(
                (ours.l - reference.l).abs() < 1e-3,
                "L mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.l,
                reference.l
            );
            assert!(
                (ours.c - reference.chroma).abs() < 1e-3,
                "C mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.c,
                reference.chroma
            );
            assert!(
                (ours.h - reference_hue).abs() < 0.5,
                "h mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.h,
                reference_hue
            );
        }
    }

    #[test]
    fn test_hue_range() {
        for (r, g, b) in [(255, 0, 0), (0, 255, 0), (0, 0, 255), (255, 0, 128), (10, 200, 90)] {
            let lch = Oklch::from(Rgb::new(r, g, b));
            assert!(
                (0.0..360.0).contains(&lch.h),
                "hue {} out of range for ({}, {}, {})",
                lch.h,
                r,
                g,
                b
            );
        }
    }

    #[test]
    fn test_known_indigo() {
        // #4F46E5 is a saturated blue-violet
        let lch = Oklch::from(Rgb::new(0x4f, 0x46, 0xe5));
        assert!((lch.l - 0.511).abs() < 0.01, "L = {}", lch.l);
        assert!((lch.c - 0.230).abs() < 0.01, "C = {}", lch.c);
        assert!(lch.h > 270.0 && lch.h < 285.0, "h = {}", lch.h);
    }

    #[test]
    fn test_achromatic_no_nan() {
        let gray = Oklch::from(Oklab::new(0.5, 0.0, 0.0));
        assert!(!gray.l.is_nan());
        assert!(!gray.c.is_nan());
        assert!(!gray.h.is_nan());
        assert_eq!(gray.c, 0.0);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert!(normalize_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_display() {
        let lch = Oklch::new(0.637, 0.237, 25.331);
        assert_eq!(lch.to_string(), "oklch(0.637 0.237 25.331)");
    }

    #[test]
    fn test_parse() {
        let lch: Oklch = "oklch(0.637 0.237 25.331)".parse().unwrap();
        assert_eq!(lch.l, 0.637);
        assert_eq!(lch.c, 0.237);
        assert_eq!(lch.h, 25.331);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "rgb(1 2 3)".parse::<Oklch>(),
            Err(ParseOklchError::MissingFunction)
        );
        assert_eq!(
            "oklch(0.5 0.1)".parse::<Oklch>(),
            Err(ParseOklchError::ComponentCount(2))
        );
        assert_eq!(
            "oklch(0.5 -0.1 20)".parse::<Oklch>(),
            Err(ParseOklchError::InvalidComponent("-0.1".to_string()))
        );
        assert!("oklch(0.5 0.1 1.2.3)".parse::<Oklch>().is_err());
    }
}
