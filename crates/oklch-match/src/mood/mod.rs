//! Mood transforms: push a brand color towards an archetype's chroma and
//! lightness while keeping its hue, then snap to the nearest catalog shade.
//!
//! The transform itself only sees numbers. Resolving a mood name to its
//! numbers is [`MoodTarget::for_name`]'s job.

mod profile;

pub use profile::{MoodProfile, MoodTarget};

use crate::catalog::{PaletteCatalog, Variant};
use crate::color::{adjust_oklch, hex_to_oklch};
use crate::matcher::{find_closest_shade, MatchResult};

/// Transform `hex` to the given chroma/lightness and return the closest light
/// shade.
///
/// An unparseable `hex` returns [`MatchResult::default`].
///
/// ```
/// use oklch_match::catalog::{GrayPairTable, Palette, PaletteCatalog, ShadeScale};
/// use oklch_match::mood::transform_color_by_mood;
///
/// let indigo = Palette::new(
///     "indigo",
///     ShadeScale::from_hex(&["#fdfdfe", "#f7f9ff", "#edf2fe", "#e1e9ff"]),
///     ShadeScale::default(),
/// );
/// let catalog = PaletteCatalog::new(vec![indigo], GrayPairTable::default()).unwrap();
///
/// let result = transform_color_by_mood(&catalog, "#4f46e5", 0.30, 0.90);
/// assert_eq!(result.palette_name, "indigo");
/// ```
pub fn transform_color_by_mood(
    catalog: &PaletteCatalog,
    hex: &str,
    chroma: f64,
    lightness: f64,
) -> MatchResult {
    transform_for_variant(catalog, hex, chroma, lightness, Variant::Light)
}

/// [`transform_color_by_mood`] against an explicit variant's scales.
pub fn transform_for_variant(
    catalog: &PaletteCatalog,
    hex: &str,
    chroma: f64,
    lightness: f64,
    variant: Variant,
) -> MatchResult {
    let Some(base) = hex_to_oklch(hex) else {
        return MatchResult::default();
    };
    let adjusted = adjust_oklch(base, chroma, lightness);
    find_closest_shade(catalog, adjusted, variant)
}

/// [`transform_for_variant`] with a named archetype's target.
pub fn transform_for_mood(
    catalog: &PaletteCatalog,
    hex: &str,
    mood: MoodProfile,
    variant: Variant,
) -> MatchResult {
    let target = mood.target();
    transform_for_variant(catalog, hex, target.chroma, target.lightness, variant)
}

/// One archetype resolved for a given input color.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPreview {
    pub mood: MoodProfile,
    pub target: MoodTarget,
    #[serde(flatten)]
    pub result: MatchResult,
    /// Display hex of the resolved shade
    pub hex: String,
}

/// Resolve every archetype for `hex`, in [`MoodProfile::ALL`] order.
pub fn preview_moods(catalog: &PaletteCatalog, hex: &str, variant: Variant) -> Vec<MoodPreview> {
    MoodProfile::ALL
        .into_iter()
        .map(|mood| {
            let result = transform_for_mood(catalog, hex, mood, variant);
            let hex = catalog
                .shade_hex(&result.palette_name, result.shade, variant)
                .to_string();
            MoodPreview {
                mood,
                target: mood.target(),
                result,
                hex,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GrayPairTable, Palette, ShadeScale};

    fn two_palettes() -> PaletteCatalog {
        let indigo = Palette::new(
            "indigo",
            ShadeScale::from_hex(&[
                "#fdfdfe", "#f7f9ff", "#edf2fe", "#e1e9ff", "#d2deff", "#c1d0ff", "#abbdf9",
                "#8da4ef", "#3e63dd", "#3358d4", "#3a5bc7", "#1f2d5c",
            ]),
            ShadeScale::from_hex(&[
                "#11131f", "#141726", "#182449", "#1d2e62", "#253974", "#304384", "#3a4f97",
                "#435db1", "#3e63dd", "#5472e4", "#9eb1ff", "#d6e1ff",
            ]),
        );
        let tomato = Palette::new(
            "tomato",
            ShadeScale::from_hex(&[
                "#fffcfc", "#fff8f7", "#feebe7", "#ffdcd3", "#ffcdc2", "#fdbdaf", "#f5a898",
                "#ec8e7b", "#e54d2e", "#dd4425", "#d13415", "#5c271f",
            ]),
            ShadeScale::default(),
        );
        PaletteCatalog::new(vec![indigo, tomato], GrayPairTable::default()).unwrap()
    }

    #[test]
    fn test_invalid_hex_returns_default() {
        let catalog = two_palettes();
        for hex in ["", "#12", "zzzzzz", "#4f46e5ff", " #4f46e5"] {
            assert_eq!(
                transform_color_by_mood(&catalog, hex, 0.3, 0.9),
                MatchResult::default(),
                "{hex:?}"
            );
        }
    }

    #[test]
    fn test_hue_family_survives_transform() {
        let catalog = two_palettes();
        let result = transform_color_by_mood(&catalog, "#e54d2e", 0.30, 0.90);
        assert_eq!(result.palette_name, "tomato");
        let result = transform_color_by_mood(&catalog, "#4f46e5", 0.30, 0.90);
        assert_eq!(result.palette_name, "indigo");
    }

    #[test]
    fn test_lightness_moves_shade() {
        let catalog = two_palettes();
        let light = transform_color_by_mood(&catalog, "#4f46e5", 0.05, 0.95);
        let deep = transform_color_by_mood(&catalog, "#4f46e5", 0.10, 0.30);
        assert!(light.shade < deep.shade, "{light} vs {deep}");
    }

    #[test]
    fn test_variant_is_explicit() {
        let catalog = two_palettes();
        let light = transform_for_variant(&catalog, "#4f46e5", 0.05, 0.95, Variant::Light);
        let dark = transform_for_variant(&catalog, "#4f46e5", 0.05, 0.95, Variant::Dark);
        // The dark scale runs the other way: its lightest steps are at the top
        assert!(light.shade <= 3, "{light}");
        assert!(dark.shade >= 11, "{dark}");
        assert_eq!(
            transform_color_by_mood(&catalog, "#4f46e5", 0.05, 0.95),
            light
        );
    }

    #[test]
    fn test_named_mood_matches_numeric_transform() {
        let catalog = two_palettes();
        let by_name = transform_for_mood(&catalog, "#4f46e5", MoodProfile::Ruler, Variant::Light);
        let by_numbers = transform_color_by_mood(&catalog, "#4f46e5", 0.80, 0.25);
        assert_eq!(by_name, by_numbers);
    }

    #[test]
    fn test_preview_covers_all_moods() {
        let catalog = two_palettes();
        let previews = preview_moods(&catalog, "#4f46e5", Variant::Light);
        assert_eq!(previews.len(), MoodProfile::ALL.len());
        for (preview, mood) in previews.iter().zip(MoodProfile::ALL) {
            assert_eq!(preview.mood, mood);
            assert_eq!(
                preview.hex,
                catalog.shade_hex(&preview.result.palette_name, preview.result.shade, Variant::Light)
            );
        }
    }

    #[test]
    fn test_preview_serializes_flat() {
        let catalog = two_palettes();
        let previews = preview_moods(&catalog, "#4f46e5", Variant::Light);
        let json = serde_json::to_value(&previews[0]).unwrap();
        assert_eq!(json["mood"], "caregiver");
        assert_eq!(json["paletteName"], "indigo");
        assert!(json["shade"].is_u64());
        assert!(json["target"]["chroma"].is_f64());
    }
}
