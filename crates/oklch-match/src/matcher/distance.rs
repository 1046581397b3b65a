//! The weighted OKLCH distance used for palette matching
//!
//! Lightness differences dominate, chroma comes next and hue counts least,
//! since many palettes share a hue at different intensities:
//!
//! ```text
//! dH   = min(|h1 - h2|, 360 - |h1 - h2|)
//! dist = sqrt(dL² · 1.0 + dC² · 0.5 + (dH / 360 · 2π)² · 0.3)
//! ```
//!
//! Near the ends of the lightness axis every scale converges towards white
//! or black, so lightness would swamp everything else and send all very
//! light or very dark inputs to whichever gray happens to be closest. For
//! those targets the matcher switches to [`extreme_lightness_distance`],
//! which compares the chroma vectors directly and keeps only a small
//! lightness term.

use std::f64::consts::PI;

use crate::color::Oklch;

/// Weight of the squared lightness difference.
pub const LIGHTNESS_WEIGHT: f64 = 1.0;
/// Weight of the squared chroma difference.
pub const CHROMA_WEIGHT: f64 = 0.5;
/// Weight of the squared normalized hue difference.
pub const HUE_WEIGHT: f64 = 0.3;

/// Weight of the hue/chroma vector distance for extreme-lightness targets.
pub const EXTREME_HUE_CHROMA_WEIGHT: f64 = 0.8;
/// Weight of the absolute lightness difference for extreme-lightness targets.
pub const EXTREME_LIGHTNESS_WEIGHT: f64 = 0.2;

/// Targets lighter than this use the extreme-lightness distance.
const EXTREME_LIGHT_THRESHOLD: f64 = 0.9;
/// Targets darker than this use the extreme-lightness distance.
const EXTREME_DARK_THRESHOLD: f64 = 0.1;

/// Weighted Euclidean distance between two OKLCH colors with circular hue.
///
/// Symmetric, zero for identical inputs, and never negative.
///
/// ```
/// use oklch_match::color::Oklch;
/// use oklch_match::matcher::oklch_distance;
///
/// let a = Oklch::new(0.5, 0.1, 1.0);
/// let b = Oklch::new(0.5, 0.1, 359.0);
/// // 2° apart across the 0/360 seam
/// assert!(oklch_distance(a, b) < 0.02);
/// ```
#[inline]
pub fn oklch_distance(a: Oklch, b: Oklch) -> f64 {
    let raw_dh = (a.h - b.h).abs();
    let dh = raw_dh.min(360.0 - raw_dh);
    let dl = a.l - b.l;
    let dc = a.c - b.c;
    let hue_term = dh / 360.0 * PI * 2.0;

    (dl * dl * LIGHTNESS_WEIGHT + dc * dc * CHROMA_WEIGHT + hue_term * hue_term * HUE_WEIGHT)
        .sqrt()
}

/// Whether `target` is light or dark enough to need the reweighted distance.
#[inline]
pub fn is_extreme_lightness(target: Oklch) -> bool {
    target.l > EXTREME_LIGHT_THRESHOLD || target.l < EXTREME_DARK_THRESHOLD
}

/// Distance used for very light or very dark targets.
///
/// `0.8 · |chroma vector difference| + 0.2 · |dL|`, where the chroma vector
/// of a color is `(sin(h)·c, cos(h)·c)`. Grays have a zero vector no matter
/// what their hue angle says.
#[inline]
pub fn extreme_lightness_distance(target: Oklch, candidate: Oklch) -> f64 {
    let (target_x, target_y) = target.chroma_projection();
    let (candidate_x, candidate_y) = candidate.chroma_projection();
    let dx = target_x - candidate_x;
    let dy = target_y - candidate_y;
    let hue_chroma = (dx * dx + dy * dy).sqrt();

    hue_chroma * EXTREME_HUE_CHROMA_WEIGHT + (target.l - candidate.l).abs() * EXTREME_LIGHTNESS_WEIGHT
}

/// Distance the sampled palette search uses for one target/shade pair.
#[inline]
pub(crate) fn sampled_distance(target: Oklch, candidate: Oklch) -> f64 {
    if is_extreme_lightness(target) {
        extreme_lightness_distance(target, candidate)
    } else {
        oklch_distance(target, candidate)
    }
}
