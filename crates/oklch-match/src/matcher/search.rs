//! Linear scans over the catalog for the closest palette and shade

use crate::catalog::{PaletteCatalog, Variant, SHADE_COUNT};
use crate::color::Oklch;

use super::distance::{oklch_distance, sampled_distance};
use super::{MatchResult, DEFAULT_PALETTE};

/// Shades that represent a palette when scoring it as a whole: the lightest
/// background, the middle border, the solid step and the text step.
pub const SAMPLE_SHADES: [u8; 4] = [1, 5, 9, 12];

/// Name of the base palette whose sampled shades are, on average, closest to
/// `target`.
///
/// Shades that are missing or whose hex does not parse are left out of the
/// average. A palette with no usable sample is never selected. Ties keep the
/// earlier palette. With nothing to score, returns [`DEFAULT_PALETTE`].
pub fn find_closest_palette(catalog: &PaletteCatalog, target: Oklch, variant: Variant) -> &str {
    let mut best = DEFAULT_PALETTE;
    let mut min_distance = f64::INFINITY;

    for palette in catalog.base_palettes() {
        let scale = palette.scale(variant);
        let (total, samples) = SAMPLE_SHADES
            .iter()
            .filter_map(|&key| scale.get(key).and_then(|shade| shade.oklch()))
            .fold((0.0, 0u32), |(total, n), candidate| {
                (total + sampled_distance(target, candidate), n + 1)
            });

        if samples == 0 {
            continue;
        }
        let average = total / f64::from(samples);
        if average < min_distance {
            min_distance = average;
            best = palette.name();
        }
    }

    best
}

/// [`find_closest_palette`] paired with a fixed shade.
pub fn closest_match(
    catalog: &PaletteCatalog,
    target: Oklch,
    variant: Variant,
    shade: u8,
) -> MatchResult {
    MatchResult::new(find_closest_palette(catalog, target, variant), shade)
}

/// The single closest shade across every base palette.
///
/// Uses the plain weighted distance for every target, including very light
/// and very dark ones. Ties keep the earlier palette, then the lower shade.
pub fn find_closest_shade(catalog: &PaletteCatalog, target: Oklch, variant: Variant) -> MatchResult {
    let mut best: Option<(&str, u8)> = None;
    let mut min_distance = f64::INFINITY;

    for palette in catalog.base_palettes() {
        let scale = palette.scale(variant);
        for key in 1..=SHADE_COUNT {
            let Some(candidate) = scale.get(key).and_then(|shade| shade.oklch()) else {
                continue;
            };
            let distance = oklch_distance(target, candidate);
            if distance < min_distance {
                min_distance = distance;
                best = Some((palette.name(), key));
            }
        }
    }

    best.map_or_else(MatchResult::default, |(name, shade)| MatchResult::new(name, shade))
}
