//! Nearest shade in plain 8-bit RGB
//!
//! Cheap and perceptually naive. Used for the live preview while a color
//! picker is being dragged; the OKLCH searches are authoritative.

use crate::catalog::{PaletteCatalog, Variant};
use crate::color::{hex_to_rgb, Rgb};

use super::DEFAULT_PALETTE;

/// Euclidean distance between two hex colors in RGB space.
///
/// Returns `f64::INFINITY` when either side fails to parse, so an invalid
/// candidate can never be the nearest one.
pub fn rgb_distance(hex_a: &str, hex_b: &str) -> f64 {
    match (hex_to_rgb(hex_a), hex_to_rgb(hex_b)) {
        (Some(a), Some(b)) => a.distance(b),
        _ => f64::INFINITY,
    }
}

/// Name of the base palette owning the shade nearest to `hex` in RGB.
///
/// Every shade of every base palette is considered. Invalid input, or a
/// catalog without a parseable shade, yields [`DEFAULT_PALETTE`].
pub fn find_closest_palette_by_rgb<'a>(
    catalog: &'a PaletteCatalog,
    hex: &str,
    variant: Variant,
) -> &'a str {
    let Some(target) = hex_to_rgb(hex) else {
        return DEFAULT_PALETTE;
    };

    let mut best = DEFAULT_PALETTE;
    let mut min_distance = f64::INFINITY;
    for palette in catalog.base_palettes() {
        for (_, shade) in palette.scale(variant).iter() {
            let Some(candidate) = shade.hex().parse::<Rgb>().ok() else {
                continue;
            };
            let distance = target.distance(candidate);
            if distance < min_distance {
                min_distance = distance;
                best = palette.name();
            }
        }
    }
    best
}
